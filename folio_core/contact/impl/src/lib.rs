use std::sync::Arc;

use anyhow::{ensure, Context};
use folio_core_contact_contracts::ContactService;
use folio_email_contracts::{Email, EmailBody, EmailService};
use folio_models::{
    contact::{ContactSubmission, RelayResponse},
    email_address::{EmailAddress, EmailAddressWithName},
};
use folio_templates_contracts::{
    ContactNotificationHtmlTemplate, ContactNotificationTextTemplate, TemplateService,
};
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// The site owner
    pub recipient: Arc<EmailAddressWithName>,
}

impl<EmailS, TemplateS> ContactServiceImpl<EmailS, TemplateS> {
    pub fn new(email: EmailS, template: TemplateS, config: ContactFeatureConfig) -> Self {
        Self {
            email,
            template,
            config,
        }
    }
}

impl<EmailS, TemplateS> ContactService for ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_message(&self, submission: ContactSubmission) -> RelayResponse {
        match self.deliver(submission).await {
            Ok(()) => {
                info!("Relayed contact form submission");
                RelayResponse::sent()
            }
            Err(err) => {
                error!("Failed to relay contact form submission: {err:#}");
                RelayResponse::failed()
            }
        }
    }
}

impl<EmailS, TemplateS> ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn deliver(&self, submission: ContactSubmission) -> anyhow::Result<()> {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        let reply_to = email
            .parse::<EmailAddress>()
            .context("Invalid sender email address")?
            .with_name(name.clone());

        let text = self.template.render(&ContactNotificationTextTemplate {
            name: name.clone(),
            email: email.clone(),
            message: message.clone(),
        })?;
        let html = self.template.render(&ContactNotificationHtmlTemplate {
            name: name.clone(),
            email,
            message,
        })?;

        let email = Email {
            recipient: (*self.config.recipient).clone(),
            subject: format!("New Contact Form Submission from {name}"),
            body: EmailBody::Alternative { text, html },
            reply_to: Some(reply_to),
        };

        ensure!(
            self.email.send(email).await?,
            "smtp server did not accept the message"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use folio_email_contracts::MockEmailService;
    use folio_templates_contracts::MockTemplateService;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> ContactFeatureConfig {
        ContactFeatureConfig {
            recipient: Arc::new("Site Owner <owner@example.com>".parse().unwrap()),
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Max Mustermann".into(),
            email: "max.mustermann@example.de".into(),
            message: "Hello World!".into(),
        }
    }

    fn template() -> MockTemplateService {
        MockTemplateService::new()
            .with_render(
                ContactNotificationTextTemplate {
                    name: "Max Mustermann".into(),
                    email: "max.mustermann@example.de".into(),
                    message: "Hello World!".into(),
                },
                "text body".into(),
            )
            .with_render(
                ContactNotificationHtmlTemplate {
                    name: "Max Mustermann".into(),
                    email: "max.mustermann@example.de".into(),
                    message: "Hello World!".into(),
                },
                "html body".into(),
            )
    }

    fn expected_email(config: &ContactFeatureConfig) -> Email {
        Email {
            recipient: (*config.recipient).clone(),
            subject: "New Contact Form Submission from Max Mustermann".into(),
            body: EmailBody::Alternative {
                text: "text body".into(),
                html: "html body".into(),
            },
            reply_to: Some(
                "Max Mustermann <max.mustermann@example.de>"
                    .parse()
                    .unwrap(),
            ),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let config = config();
        let email = MockEmailService::new().with_send(expected_email(&config), true);

        let sut = ContactServiceImpl::new(email, template(), config);

        // Act
        let result = sut.send_message(submission()).await;

        // Assert
        assert_eq!(result, RelayResponse::sent());
        assert_eq!(result.message, "Email sent successfully!");
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let config = config();
        let email = MockEmailService::new().with_send(expected_email(&config), false);

        let sut = ContactServiceImpl::new(email, template(), config);

        // Act
        let result = sut.send_message(submission()).await;

        // Assert
        assert_eq!(result, RelayResponse::failed());
    }

    #[tokio::test]
    async fn delivery_error() {
        // Arrange
        let config = config();
        let email = MockEmailService::new()
            .with_send_error(expected_email(&config), "authentication failed");

        let sut = ContactServiceImpl::new(email, template(), config);

        // Act
        let result = sut.send_message(submission()).await;

        // Assert
        assert_eq!(result, RelayResponse::failed());
        assert!(!result.message.contains("authentication"));
    }

    #[tokio::test]
    async fn malformed_sender_address() {
        // Arrange
        let sut = ContactServiceImpl::new(
            MockEmailService::new(),
            MockTemplateService::new(),
            config(),
        );

        // Act
        let result = sut
            .send_message(ContactSubmission {
                email: "max@exa mple.de".into(),
                ..submission()
            })
            .await;

        // Assert
        assert_eq!(result, RelayResponse::failed());
    }
}
