use hello_page_core::contract::ApiGatewayResponse;
use hello_page_lambda::handlers::secured::{handle_secured_event, SecuredHandlerConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    // Snapshot the environment once per invocation; unset values fall back to
    // visible placeholders instead of failing the render.
    let config = SecuredHandlerConfig {
        user_pool_id: std::env::var("USER_POOL_ID")
            .unwrap_or_else(|_| "YOUR_USER_POOL_ID".to_string()),
        client_id: std::env::var("CLIENT_ID").unwrap_or_else(|_| "YOUR_CLIENT_ID".to_string()),
        aws_region: std::env::var("AWS_REGION")
            .unwrap_or_else(|_| "YOUR_AWS_REGION".to_string()),
    };

    Ok(handle_secured_event(event.payload, &config))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
