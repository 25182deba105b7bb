use std::future::Future;

use folio_models::contact::{ContactSubmission, RelayResponse};

/// Client side access to the mail relay.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRelayApiService: Send + Sync + 'static {
    /// Hand the submission to the relay.
    ///
    /// Returns an error only if the relay could not be reached or answered
    /// with something other than a relay response.
    fn send(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<RelayResponse>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactRelayApiService {
    pub fn with_send(mut self, submission: ContactSubmission, result: RelayResponse) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_error(mut self, submission: ContactSubmission) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "relay unreachable"
                ))))
            });
        self
    }
}
