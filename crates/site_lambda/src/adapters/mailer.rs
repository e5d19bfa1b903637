use site_core::email::EmailMessage;

/// Mail-delivery collaborator. Returns the provider message id on success.
pub trait Mailer {
    fn send(&self, message: &EmailMessage) -> Result<String, String>;
}
