use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::ContactService;
use folio_models::contact::{ContactSubmission, RelayResponse};
use tracing::debug;

use super::error;
use crate::models::contact::{ApiContactSubmission, ApiRelayResponse};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactService>>,
    submission: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    let Ok(Json(submission)) = submission else {
        return error(StatusCode::BAD_REQUEST, "Invalid request body");
    };
    let submission = ContactSubmission::from(submission);

    if let Err(err) = submission.validate() {
        debug!("rejected contact form submission: {err}");
        return relay_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            RelayResponse::rejected(err),
        );
    }

    let response = service.send_message(submission).await;
    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    relay_response(status, response)
}

fn relay_response(status: StatusCode, response: RelayResponse) -> Response {
    (status, Json(ApiRelayResponse::from(response))).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use folio_core_contact_contracts::MockContactService;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    async fn post(service: MockContactService, body: &str) -> (StatusCode, Value) {
        let request = Request::post("/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();

        let response = router(service.into()).oneshot(request).await.unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "A".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service =
            MockContactService::new().with_send_message(submission(), RelayResponse::sent());

        // Act
        let (status, body) = post(
            service,
            r#"{"name": "A", "email": "a@b.com", "message": "hi"}"#,
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "message": "Email sent successfully!"})
        );
    }

    #[tokio::test]
    async fn delivery_failed() {
        // Arrange
        let service =
            MockContactService::new().with_send_message(submission(), RelayResponse::failed());

        // Act
        let (status, body) = post(
            service,
            r#"{"name": "A", "email": "a@b.com", "message": "hi"}"#,
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body,
            json!({"success": false, "message": "Failed to send email. Please try again later."})
        );
    }

    #[tokio::test]
    async fn missing_fields() {
        let (status, body) = post(
            MockContactService::new(),
            r#"{"name": "A", "email": "a@b.com"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({"success": false, "message": "Please fill in all fields"})
        );
    }

    #[tokio::test]
    async fn null_field() {
        let (status, body) = post(
            MockContactService::new(),
            r#"{"name": null, "email": "a@b.com", "message": "hi"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({"success": false, "message": "Please fill in all fields"})
        );
    }

    #[tokio::test]
    async fn invalid_email() {
        let (status, body) = post(
            MockContactService::new(),
            r#"{"name": "A", "email": "foo@bar", "message": "hi"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({"success": false, "message": "Please enter a valid email address"})
        );
    }

    #[tokio::test]
    async fn malformed_body() {
        let (status, body) = post(MockContactService::new(), "not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Invalid request body"}));
    }
}
