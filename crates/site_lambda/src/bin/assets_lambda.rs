use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use site_core::contract::{SiteRequest, SiteResponse};
use site_lambda::handlers::assets::handle_asset_request;
use site_lambda::runtime::config::site_root_from_env;

async fn handle_request(event: LambdaEvent<Value>) -> Result<SiteResponse, Error> {
    let request: SiteRequest = serde_json::from_value(event.payload)
        .map_err(|error| Error::from(format!("invalid request event: {error}")))?;

    Ok(handle_asset_request(&request, &site_root_from_env()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
