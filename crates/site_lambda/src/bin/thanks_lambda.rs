use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use site_core::contract::{SiteRequest, SiteResponse};
use site_lambda::handlers::pages::{handle_page_request, PageTemplate};
use site_lambda::runtime::config::{site_root_from_env, CdnVars};

async fn handle_request(event: LambdaEvent<Value>) -> Result<SiteResponse, Error> {
    let request: SiteRequest = serde_json::from_value(event.payload)
        .map_err(|error| Error::from(format!("invalid request event: {error}")))?;

    handle_page_request(
        &request,
        PageTemplate::Thanks,
        &site_root_from_env(),
        &CdnVars::from_env(),
    )
    .map_err(|error| Error::from(error.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
