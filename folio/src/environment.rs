//! Wiring of the concrete service implementations

use std::sync::Arc;

use folio_api_rest::RestServerConfig;
use folio_config::Config;
use folio_core_contact_impl::{ContactFeatureConfig, ContactServiceImpl};
use folio_email_impl::EmailServiceImpl;
use folio_extern_impl::contact::{ContactRelayApiServiceConfig, ContactRelayApiServiceImpl};
use folio_form::{ContactForm, ContactFormConfig};
use folio_templates_impl::TemplateServiceImpl;

pub type Email = EmailServiceImpl;
pub type Template = TemplateServiceImpl;
pub type Contact = ContactServiceImpl<Email, Template>;
pub type RestServer = folio_api_rest::RestServer<Contact>;
pub type ContactRelay = ContactRelayApiServiceImpl;
pub type Form = ContactForm<ContactRelay>;

pub fn rest_server(config: &Config, email: Email) -> anyhow::Result<RestServer> {
    let contact = ContactServiceImpl::new(
        email,
        TemplateServiceImpl::new()?,
        ContactFeatureConfig {
            recipient: Arc::new(config.contact.recipient.clone()),
        },
    );

    Ok(RestServer::new(
        contact,
        RestServerConfig {
            addr: config.http.address,
        },
    ))
}

pub fn contact_form(config: &Config) -> anyhow::Result<Form> {
    let relay = ContactRelayApiServiceImpl::new(ContactRelayApiServiceConfig::new(
        &config.form.endpoint,
    )?)?;

    Ok(ContactForm::new(
        relay,
        ContactFormConfig {
            status_reset_delay: config.form.status_reset_delay.into(),
        },
    ))
}
