use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use site_core::contract::SiteResponse;
use site_lambda::handlers::ping::handle_ping_request;

async fn handle_request(_event: LambdaEvent<Value>) -> Result<SiteResponse, Error> {
    Ok(handle_ping_request())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
