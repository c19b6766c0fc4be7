use hello_page_core::contract::{html_response, ApiGatewayResponse};
use hello_page_core::page::render_hello_page;
use serde_json::{json, Value};

/// Renders the unauthenticated hello page.
///
/// The event is logged for observability but no field of it is read, so any
/// shape of input is tolerated.
pub fn handle_hello_event(event: Value) -> ApiGatewayResponse {
    log_hello_info("request_received", json!({ "request": event }));

    html_response(render_hello_page())
}

fn log_hello_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "hello_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_the_static_page_for_an_empty_event() {
        let response = handle_hello_event(json!({}));

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers["Content-Type"], "text/html");
        assert!(response
            .body
            .contains("<h1>Hello World from AWS Lambda!</h1>"));
    }

    #[test]
    fn tolerates_arbitrary_event_shapes() {
        let with_claims = handle_hello_event(json!({
            "requestContext": { "authorizer": { "claims": { "sub": "abc" } } }
        }));
        let not_an_object = handle_hello_event(json!([1, 2, 3]));

        assert_eq!(with_claims.status_code, 200);
        assert_eq!(not_an_object.status_code, 200);
        assert_eq!(with_claims.body, not_an_object.body);
    }
}
