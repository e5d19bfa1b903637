use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use site_core::contract::{SiteRequest, SiteResponse};
use site_core::email::EmailMessage;
use site_lambda::adapters::mailer::Mailer;
use site_lambda::handlers::assets::handle_asset_request;
use site_lambda::handlers::contact::handle_contact_request;
use site_lambda::handlers::pages::{handle_page_request, PageTemplate};
use site_lambda::handlers::ping::handle_ping_request;
use site_lambda::runtime::config::{sender_identity_from_env, site_root_from_env, CdnVars};

const ASSETS_PREFIX: &str = "/assets/";

struct SesMailer {
    ses_client: aws_sdk_sesv2::Client,
}

impl Mailer for SesMailer {
    fn send(&self, message: &EmailMessage) -> Result<String, String> {
        let client = self.ses_client.clone();
        let message = message.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let subject = build_content(&message.subject, &message.charset)?;
                let text = build_content(&message.text_body, &message.charset)?;
                let html = build_content(&message.html_body, &message.charset)?;

                let content = EmailContent::builder()
                    .simple(
                        Message::builder()
                            .subject(subject)
                            .body(Body::builder().text(text).html(html).build())
                            .build(),
                    )
                    .build();

                let response = client
                    .send_email()
                    .from_email_address(message.from)
                    .destination(Destination::builder().to_addresses(message.to).build())
                    .reply_to_addresses(message.reply_to)
                    .content(content)
                    .send()
                    .await
                    .map_err(|error| format!("failed to send contact email: {error}"))?;

                Ok(response.message_id().unwrap_or_default().to_string())
            })
        })
    }
}

fn build_content(data: &str, charset: &str) -> Result<Content, String> {
    Content::builder()
        .data(data)
        .charset(charset)
        .build()
        .map_err(|error| format!("failed to build message content: {error}"))
}

async fn ses_client_from_env() -> aws_sdk_sesv2::Client {
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let mut builder = aws_sdk_sesv2::config::Builder::from(&aws_config);

    if let Ok(region) = std::env::var("AWS_SES_REGION") {
        builder = builder.region(aws_sdk_sesv2::config::Region::new(region));
    }
    if let (Ok(access_key), Ok(secret_key)) = (
        std::env::var("AWS_SES_ACCESSKEYID"),
        std::env::var("AWS_SES_SECRETACCESSKEY"),
    ) {
        builder = builder.credentials_provider(aws_sdk_sesv2::config::Credentials::new(
            access_key,
            secret_key,
            None,
            None,
            "contact-form-env",
        ));
    }

    aws_sdk_sesv2::Client::from_conf(builder.build())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Asset,
    Contact,
    Thanks,
    Ping,
    Home,
}

fn route_for_path(path: &str) -> Route {
    if path.starts_with(ASSETS_PREFIX) {
        return Route::Asset;
    }
    match path.trim_end_matches('/') {
        "/contact" => Route::Contact,
        "/thanks" => Route::Thanks,
        "/ping" => Route::Ping,
        _ => Route::Home,
    }
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<SiteResponse, Error> {
    let request: SiteRequest = serde_json::from_value(event.payload)
        .map_err(|error| Error::from(format!("invalid request event: {error}")))?;

    let site_root = site_root_from_env();

    match route_for_path(&request.path) {
        Route::Asset => Ok(handle_asset_request(&request, &site_root)),
        Route::Contact => {
            let sender = sender_identity_from_env().map_err(Error::from)?;
            let mailer = SesMailer {
                ses_client: ses_client_from_env().await,
            };
            handle_contact_request(&request, &sender, &mailer)
                .map_err(|error| Error::from(error.message))
        }
        Route::Thanks => handle_page_request(
            &request,
            PageTemplate::Thanks,
            &site_root,
            &CdnVars::from_env(),
        )
        .map_err(|error| Error::from(error.message)),
        Route::Ping => Ok(handle_ping_request()),
        Route::Home => handle_page_request(
            &request,
            PageTemplate::Home,
            &site_root,
            &CdnVars::from_env(),
        )
        .map_err(|error| Error::from(error.message)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_route_by_prefix() {
        assert_eq!(route_for_path("/assets/styles/index.min.css"), Route::Asset);
        assert_eq!(route_for_path("/assets/logo.png"), Route::Asset);
    }

    #[test]
    fn named_paths_route_to_their_handlers() {
        assert_eq!(route_for_path("/contact"), Route::Contact);
        assert_eq!(route_for_path("/thanks/"), Route::Thanks);
        assert_eq!(route_for_path("/ping"), Route::Ping);
    }

    #[test]
    fn everything_else_routes_home() {
        assert_eq!(route_for_path("/"), Route::Home);
        assert_eq!(route_for_path(""), Route::Home);
        assert_eq!(route_for_path("/unknown"), Route::Home);
    }
}
