use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    RequestPartsExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use service_core::error::AppError;

use crate::services::Identity;
use crate::startup::AppState;

/// Who is calling. Tokens are optional everywhere: a request without a bearer
/// token is anonymous, while a bearer token that fails verification is
/// rejected with 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    Authenticated(Identity),
    Anonymous,
}

impl Caller {
    pub fn email(&self) -> Option<&str> {
        match self {
            Caller::Authenticated(identity) => Some(&identity.email),
            Caller::Anonymous => None,
        }
    }
}

impl std::fmt::Display for Caller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Caller::Authenticated(identity) => write!(f, "{}", identity.email),
            Caller::Anonymous => write!(f, "anonymous"),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Missing header or a non-bearer scheme both read as "no token".
        let bearer = parts
            .extract::<Option<TypedHeader<Authorization<Bearer>>>>()
            .await
            .ok()
            .flatten();

        match bearer {
            None => Ok(Caller::Anonymous),
            Some(TypedHeader(Authorization(bearer))) => {
                let identity = state.tokens.verify(bearer.token()).map_err(|e| {
                    tracing::warn!(error = %e, "Rejected bearer token");
                    e
                })?;
                Ok(Caller::Authenticated(identity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, JwtConfig, MedlinkConfig, StoreBackend, StoreConfig};
    use crate::services::{MemoryStore, StoreGateway, TokenIssuer};
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use secrecy::Secret;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> AppState {
        let config = MedlinkConfig {
            common: service_core::config::Config { port: 0 },
            environment: Environment::Dev,
            service_name: "medlink-service".to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
            store: StoreConfig {
                backend: StoreBackend::Memory,
                uri: String::new(),
                database: "medlink_test".to_string(),
            },
            jwt: JwtConfig {
                secret: Secret::new("test-secret".to_string()),
                expiry_days: 7,
            },
        };
        AppState {
            tokens: TokenIssuer::new(&config.jwt),
            store: StoreGateway::new(Arc::new(MemoryStore::new("medlink_test"))),
            config,
        }
    }

    async fn whoami(state: AppState, authorization: Option<&str>) -> (StatusCode, String) {
        let app = Router::new()
            .route("/", get(|caller: Caller| async move { caller.to_string() }))
            .with_state(state);

        let mut request = Request::builder().uri("/");
        if let Some(value) = authorization {
            request = request.header("authorization", value);
        }

        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn missing_header_is_anonymous() {
        let (status, body) = whoami(state(), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "anonymous");
    }

    #[tokio::test]
    async fn other_scheme_is_anonymous() {
        let (status, body) = whoami(state(), Some("Basic dXNlcjpwYXNz")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "anonymous");
    }

    #[tokio::test]
    async fn valid_token_is_authenticated() {
        let state = state();
        let token = state.tokens.issue("sandhya@example.com", "Sandhya").unwrap();
        let (status, body) = whoami(state, Some(&format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "sandhya@example.com");
    }

    #[tokio::test]
    async fn invalid_token_is_rejected() {
        let (status, _) = whoami(state(), Some("Bearer not-a-real-token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
