use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use site_core::contract::{SiteRequest, SiteResponse};
use site_core::email::EmailMessage;
use site_lambda::adapters::mailer::Mailer;
use site_lambda::handlers::contact::handle_contact_request;
use site_lambda::runtime::config::sender_identity_from_env;

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

async fn handle_request(event: LambdaEvent<Value>) -> Result<SiteResponse, Error> {
    let request: SiteRequest = serde_json::from_value(event.payload)
        .map_err(|error| Error::from(format!("invalid request event: {error}")))?;

    let sender = sender_identity_from_env().map_err(Error::from)?;
    let mailer = SesMailer {
        ses_client: ses_client_from_env().await,
    };

    handle_contact_request(&request, &sender, &mailer)
        .map_err(|error| Error::from(error.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
