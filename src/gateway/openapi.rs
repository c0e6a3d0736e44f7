//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::account::models::{AccountSnapshot, BalanceChangeRequest};
use crate::auth::service::{AuthResponse, LoginRequest};
use crate::error::ErrorBody;
use crate::gateway::HealthData;
use crate::transfer::models::TransferRequest;
use crate::user::models::{CreateUserRequest, UserProfile};

/// Bearer JWT security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT obtained from POST /auth/login"))
                        .build(),
                ),
            );
        }
    }
}

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Minibank API",
        version = "1.0.0",
        description = "Small banking back-end: accounts, deposits, withdrawals and atomic inter-account transfers."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::health_check,
        crate::auth::handlers::login,
        crate::account::handlers::get_account,
        crate::account::handlers::deposit,
        crate::account::handlers::withdraw,
        crate::transfer::handlers::transfer,
        crate::user::handlers::create_user,
        crate::user::handlers::list_users,
        crate::user::handlers::me,
    ),
    components(
        schemas(
            HealthData,
            ErrorBody,
            LoginRequest,
            AuthResponse,
            AccountSnapshot,
            BalanceChangeRequest,
            TransferRequest,
            CreateUserRequest,
            UserProfile,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Login and token issuance"),
        (name = "Account", description = "Balance queries, deposits and withdrawals (auth required)"),
        (name = "Transfer", description = "Inter-account fund transfers (auth required)"),
        (name = "User", description = "User administration (admin role required)"),
        (name = "System", description = "Health checks and build info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Minibank API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Minibank API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/health"));
        assert!(paths.paths.contains_key("/auth/login"));
        assert!(paths.paths.contains_key("/account/{id}"));
        assert!(paths.paths.contains_key("/account/deposit/{id}"));
        assert!(paths.paths.contains_key("/transfer/"));
        assert!(paths.paths.contains_key("/user/list"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
