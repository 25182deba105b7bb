use anyhow::Context;
use folio_config::{EmailConfig, EmailTls};
use folio_email_impl::{EmailServiceConfig, EmailServiceImpl, SmtpCredentials, SmtpTls};

/// Set up the SMTP transport
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(EmailServiceConfig {
        host: config.host.clone(),
        port: config.port,
        tls: match config.tls {
            EmailTls::None => SmtpTls::None,
            EmailTls::Starttls => SmtpTls::Starttls,
            EmailTls::Implicit => SmtpTls::Implicit,
        },
        credentials: config
            .credentials
            .as_ref()
            .map(|credentials| SmtpCredentials {
                username: credentials.username.clone(),
                password: credentials.password.clone(),
            }),
        from: config.from.clone(),
    })
    .with_context(|| {
        format!(
            "Failed to set up SMTP transport for {}:{}",
            config.host, config.port
        )
    })
}
