//! State machine behind the contact form.
//!
//! A [`ContactForm`] owns the form fields and the [`SubmissionStatus`]. Every
//! submission ends in a terminal status (`Success` or `Error`) which reverts to
//! `Idle` after [`ContactFormConfig::status_reset_delay`] unless another
//! submission replaces it first.

use std::{sync::Arc, time::Duration};

use folio_extern_contracts::contact::ContactRelayApiService;
use folio_models::contact::{ContactSubmission, SubmissionStatus};
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy)]
pub struct ContactFormConfig {
    pub status_reset_delay: Duration,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            status_reset_delay: Duration::from_secs(5),
        }
    }
}

#[derive(Debug)]
pub struct ContactForm<Relay> {
    relay: Relay,
    config: ContactFormConfig,
    fields: ContactSubmission,
    status: Arc<watch::Sender<SubmissionStatus>>,
    pending_reset: Option<JoinHandle<()>>,
}

impl<Relay> ContactForm<Relay>
where
    Relay: ContactRelayApiService,
{
    pub fn new(relay: Relay, config: ContactFormConfig) -> Self {
        Self {
            relay,
            config,
            fields: ContactSubmission::default(),
            status: Arc::new(watch::Sender::new(SubmissionStatus::Idle)),
            pending_reset: None,
        }
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactSubmission {
        &mut self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    /// Observe status changes, including the automatic revert to `Idle`.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    pub fn is_submitting(&self) -> bool {
        *self.status.borrow() == SubmissionStatus::Submitting
    }

    /// Validate `data` and hand it to the relay.
    ///
    /// `data` becomes the current form content. It is cleared only if the relay
    /// reports success.
    pub async fn submit(&mut self, data: ContactSubmission) -> SubmissionStatus {
        self.cancel_pending_reset();
        self.fields = data;

        let status = match self.fields.validate() {
            Err(err) => {
                debug!("contact form submission is invalid: {err}");
                err.into()
            }
            Ok(()) => self.relay_fields().await,
        };

        self.finish(status.clone());
        status
    }

    async fn relay_fields(&mut self) -> SubmissionStatus {
        self.status.send_replace(SubmissionStatus::Submitting);

        match self.relay.send(self.fields.clone()).await {
            Ok(response) => {
                if response.success {
                    self.fields = ContactSubmission::default();
                }
                response.into()
            }
            Err(err) => {
                warn!("Failed to reach the contact relay: {err:#}");
                SubmissionStatus::Error(SubmissionStatus::UNEXPECTED_ERROR.into())
            }
        }
    }

    fn finish(&mut self, status: SubmissionStatus) {
        self.status.send_replace(status);

        let sender = Arc::clone(&self.status);
        let delay = self.config.status_reset_delay;
        self.pending_reset = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            sender.send_replace(SubmissionStatus::Idle);
        }));
    }

    fn cancel_pending_reset(&mut self) {
        if let Some(handle) = self.pending_reset.take() {
            handle.abort();
        }
    }
}

impl<Relay> Drop for ContactForm<Relay> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_reset.take() {
            handle.abort();
        }
    }
}
