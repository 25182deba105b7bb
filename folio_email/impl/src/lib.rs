use anyhow::anyhow;
use folio_email_contracts::{Email, EmailBody, EmailService};
use folio_models::email_address::EmailAddressWithName;
use folio_utils::Apply;
use lettre::{
    message::{header, MessageBuilder, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    pub host: String,
    pub port: u16,
    pub tls: SmtpTls,
    pub credentials: Option<SmtpCredentials>,
    pub from: EmailAddressWithName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpTls {
    None,
    Starttls,
    Implicit,
}

#[derive(Clone)]
pub struct SmtpCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl EmailServiceImpl {
    pub fn new(config: EmailServiceConfig) -> anyhow::Result<Self> {
        let builder = match config.tls {
            SmtpTls::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host.as_str())
            }
            SmtpTls::Starttls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            }
            SmtpTls::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?,
        };

        let transport = builder
            .port(config.port)
            .apply_map(config.credentials, |builder, credentials| {
                builder.credentials(Credentials::new(credentials.username, credentials.password))
            })
            .build();

        Ok(Self {
            from: config.from,
            transport,
        })
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let builder = Message::builder()
            .from(self.from.0.clone())
            .to(email.recipient.0)
            .apply_map(email.reply_to.map(|x| x.0), MessageBuilder::reply_to)
            .subject(email.subject);

        let message = match email.body {
            EmailBody::Text(text) => builder.header(header::ContentType::TEXT_PLAIN).body(text),
            EmailBody::Alternative { text, html } => {
                builder.multipart(MultiPart::alternative_plain_html(text, html))
            }
        }?;

        Ok(message)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = self.build_message(email)?;

        let response = self.transport.send(message).await?;
        debug!(code = %response.code(), "smtp server accepted the message");

        Ok(response.is_positive())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
