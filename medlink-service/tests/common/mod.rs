use medlink_service::config::{
    Environment, JwtConfig, MedlinkConfig, StoreBackend, StoreConfig,
};
use medlink_service::services::StoreGateway;
use medlink_service::startup::Application;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: StoreGateway,
    pub client: reqwest::Client,
}

pub fn test_config() -> MedlinkConfig {
    // Set TEST_MONGODB_URI to run against a real MongoDB instead of memory.
    let (backend, uri) = match std::env::var("TEST_MONGODB_URI") {
        Ok(uri) => (StoreBackend::Mongo, uri),
        Err(_) => (StoreBackend::Memory, String::new()),
    };

    MedlinkConfig {
        common: CoreConfig { port: 0 },
        environment: Environment::Dev,
        service_name: "medlink-service".to_string(),
        log_level: "debug".to_string(),
        otlp_endpoint: None,
        store: StoreConfig {
            backend,
            uri,
            database: format!("medlink_test_{}", Uuid::new_v4().simple()),
        },
        jwt: JwtConfig {
            secret: Secret::new(TEST_JWT_SECRET.to_string()),
            expiry_days: 7,
        },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
