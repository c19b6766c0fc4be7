use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Response envelope for the API Gateway Lambda proxy integration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

pub fn html_response(body: impl Into<String>) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        headers: json!({"Content-Type": "text/html"}),
        body: body.into(),
    }
}

/// Same as [`html_response`] but browsable from another origin. The proxy
/// integration does not add CORS headers on its own.
pub fn cors_html_response(body: impl Into<String>) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        headers: json!({
            "Content-Type": "text/html",
            "Access-Control-Allow-Origin": "*",
        }),
        body: body.into(),
    }
}
