//! The subscription notifier: a welcome email to the subscriber, then a notice
//! to the admin.
//!
//! The two sends are sequential and not transactional. If the admin notice
//! fails after the welcome email went out, the whole operation still counts as
//! failed; [`NotifyError::report`] tells what was actually delivered.

use crate::{
    configuration::{EmailSettings, SmtpSettings},
    domain::SubscriptionRequest,
    email::{Email, SendError, TransportError, TransportFactory},
    email_templates::{self, AdminNoticeArgs},
    utils::error_chain_fmt,
};

use std::sync::Arc;

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub welcome_sent: bool,
    pub admin_notified: bool,
}

#[derive(thiserror::Error)]
pub enum NotifyError {
    #[error("Failed to set up the mail transport")]
    Transport(#[source] TransportError),
    #[error("Failed to send the welcome email")]
    Welcome(#[source] SendError),
    #[error("Failed to send the admin notification")]
    AdminNotice(#[source] SendError),
}

impl NotifyError {
    pub fn report(&self) -> DeliveryReport {
        match self {
            NotifyError::Transport(_) | NotifyError::Welcome(_) => DeliveryReport::default(),
            NotifyError::AdminNotice(_) => DeliveryReport {
                welcome_sent: true,
                admin_notified: false,
            },
        }
    }
}

impl std::fmt::Debug for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct Notifier {
    factory: Arc<dyn TransportFactory>,
    smtp: SmtpSettings,
    sender_name: String,
}

impl Notifier {
    pub fn new(factory: Arc<dyn TransportFactory>, settings: &EmailSettings) -> Self {
        Self {
            factory,
            smtp: settings.smtp.clone(),
            sender_name: settings.sender_name.clone(),
        }
    }

    #[tracing::instrument(
        name = "Notifying about a new subscription",
        skip(self, request),
        fields(
            subscriber_email = %request.subscriber,
            admin_email = %request.admin,
        )
    )]
    pub async fn notify(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<DeliveryReport, NotifyError> {
        let transport = self
            .factory
            .build(&self.smtp)
            .map_err(NotifyError::Transport)?;

        transport
            .send(&self.welcome_email(request))
            .await
            .map_err(NotifyError::Welcome)?;

        transport
            .send(&self.admin_notice(request, Local::now()))
            .await
            .map_err(NotifyError::AdminNotice)?;

        Ok(DeliveryReport {
            welcome_sent: true,
            admin_notified: true,
        })
    }

    fn welcome_email(&self, request: &SubscriptionRequest) -> Email {
        Email {
            sender_name: self.sender_name.clone(),
            from: request.sender.clone(),
            to: request.subscriber.clone(),
            subject: email_templates::WELCOME_SUBJECT.to_string(),
            html_body: email_templates::render_welcome_email(),
            text_body: email_templates::render_welcome_text(),
        }
    }

    fn admin_notice(&self, request: &SubscriptionRequest, subscribed_at: DateTime<Local>) -> Email {
        let args = AdminNoticeArgs {
            subscriber_email: request.subscriber.as_ref(),
            subscribed_at,
        };
        Email {
            sender_name: self.sender_name.clone(),
            from: request.sender.clone(),
            to: request.admin.clone(),
            subject: email_templates::ADMIN_NOTICE_SUBJECT.to_string(),
            html_body: email_templates::render_admin_notice(&args),
            text_body: email_templates::render_admin_notice_text(&args),
        }
    }
}
