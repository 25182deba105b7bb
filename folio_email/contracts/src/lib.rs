use std::future::Future;

use folio_models::email_address::EmailAddressWithName;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Submit an email to the smtp server.
    ///
    /// Returns `false` if the server did not accept the message.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Check that the smtp server is reachable.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddressWithName,
    pub subject: String,
    pub body: EmailBody,
    pub reply_to: Option<EmailAddressWithName>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    Text(String),
    /// Plain text with an html alternative
    Alternative { text: String, html: String },
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_error(mut self, email: Email, error: &'static str) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
