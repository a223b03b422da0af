use crate::{
    domain::{SubscriptionRequest, SubscriptionRequestError},
    notifier::{Notifier, NotifyError},
    utils::error_chain_fmt,
};

use {
    actix_web::{error::JsonPayloadError, http::StatusCode, web, HttpResponse, ResponseError},
    serde::{Deserialize, Serialize},
};

/// The only failure message the landing page ever gets to see.
pub const SEND_FAILURE_MESSAGE: &str = "Failed to send emails";

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BodyData {
    email: Option<String>,
    admin_email: Option<String>,
    sender_email: Option<String>,
}

impl TryFrom<BodyData> for SubscriptionRequest {
    type Error = SubscriptionRequestError;

    fn try_from(body: BodyData) -> Result<Self, Self::Error> {
        SubscriptionRequest::parse(body.email, body.admin_email, body.sender_email)
    }
}

#[derive(Serialize, Debug)]
struct SubscribeResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("The subscription request was rejected")]
    InvalidRequest(#[from] SubscriptionRequestError),
    #[error("The request body could not be read as JSON")]
    MalformedBody(#[source] JsonPayloadError),
    #[error("Failed to deliver the subscription emails")]
    SendFailed(#[from] NotifyError),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

// Every failure looks the same from the outside: the form only reads `success`.
impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(SubscribeResponse {
            success: false,
            error: Some(SEND_FAILURE_MESSAGE),
        })
    }
}

/// Turns extractor failures (bad JSON, wrong content type) into the same
/// failure response the handler produces.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|error, _request| {
        tracing::warn!(error = %error, "Rejected an unreadable subscription body");
        SubscribeError::MalformedBody(error).into()
    })
}

#[tracing::instrument(
    name = "Handling a newsletter subscription",
    skip(body, notifier),
    fields(
        subscriber_email = ?body.email,
        admin_email = ?body.admin_email,
    )
)]
pub async fn subscribe(
    body: web::Json<BodyData>,
    notifier: web::Data<Notifier>,
) -> Result<HttpResponse, SubscribeError> {
    let request: SubscriptionRequest = body.0.try_into().map_err(|e| {
        tracing::warn!(error.cause_chain = ?e, "Rejected an invalid subscription request");
        SubscribeError::InvalidRequest(e)
    })?;

    match notifier.notify(&request).await {
        Ok(report) => {
            tracing::info!(
                welcome_sent = report.welcome_sent,
                admin_notified = report.admin_notified,
                "Subscription emails sent"
            );
            Ok(HttpResponse::Ok().json(SubscribeResponse {
                success: true,
                error: None,
            }))
        }
        Err(e) => {
            let report = e.report();
            tracing::error!(
                error.cause_chain = ?e,
                welcome_sent = report.welcome_sent,
                admin_notified = report.admin_notified,
                "Error sending emails"
            );
            Err(e.into())
        }
    }
}
