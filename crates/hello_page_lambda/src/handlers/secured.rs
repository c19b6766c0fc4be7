use hello_page_core::claims::{extract_authorizer_claims, AuthorizerClaims};
use hello_page_core::contract::{cors_html_response, ApiGatewayResponse};
use hello_page_core::hosted_ui::hosted_ui_base_url;
use hello_page_core::page::{render_secured_page, SecuredPageView};
use serde_json::{json, Value};

/// Per-invocation environment snapshot, built once in the binary so the
/// handler stays a pure function of (event, config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecuredHandlerConfig {
    pub user_pool_id: String,
    pub client_id: String,
    pub aws_region: String,
}

/// Renders the authenticated hello page.
///
/// Claims come from the user pool authorizer; a request without an authorizer
/// context still renders, with every claim shown as its placeholder. Nothing
/// here returns a non-200 status.
pub fn handle_secured_event(event: Value, config: &SecuredHandlerConfig) -> ApiGatewayResponse {
    log_secured_info("request_received", json!({ "request": event }));

    let claims = match extract_authorizer_claims(&event) {
        Some(claims) => claims,
        None => {
            log_secured_info(
                "authorizer_claims_missing",
                json!({
                    "note": "request may be unauthenticated or a debug invocation",
                }),
            );
            AuthorizerClaims::missing()
        }
    };

    let view = SecuredPageView {
        claims,
        hosted_ui_base_url: hosted_ui_base_url(&config.user_pool_id, &config.aws_region),
        user_pool_id: config.user_pool_id.clone(),
        client_id: config.client_id.clone(),
        aws_region: config.aws_region.clone(),
    };

    cors_html_response(render_secured_page(&view))
}

fn log_secured_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "secured_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
