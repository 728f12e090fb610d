pub mod jwt;
pub mod memory;
pub mod metrics;
pub mod mongo;
pub mod store;
pub mod symptoms;

pub use jwt::{Identity, TokenClaims, TokenIssuer};
pub use memory::MemoryStore;
pub use metrics::{get_metrics, init_metrics, record_symptom_analysis};
pub use mongo::MongoStore;
pub use store::{collections, DocumentStore, StoreGateway};
