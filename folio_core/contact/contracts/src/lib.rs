use std::future::Future;

use folio_models::contact::{ContactSubmission, RelayResponse};

/// Relays contact form submissions to the site owner.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Send a notification email for the given submission.
    ///
    /// Delivery failures are not returned to the caller. They are reported as
    /// [`RelayResponse::failed`].
    fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = RelayResponse> + Send;
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_send_message(
        mut self,
        submission: ContactSubmission,
        result: RelayResponse,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
