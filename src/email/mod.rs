//! Outgoing mail.
//!
//! [`MailTransport`] delivers one message. [`TransportFactory`] builds a fresh
//! transport from the relay settings for every request, which is the seam
//! tests use to swap the relay for an in-memory recorder.

mod logging;
mod smtp;

use crate::{
    configuration::{EmailSettings, MailBackend, SmtpSettings},
    domain::EmailAddress,
};

use std::sync::Arc;

use async_trait::async_trait;

pub use {
    logging::{LogTransport, LogTransportFactory},
    smtp::{SmtpTransport, SmtpTransportFactory},
};

/// A fully rendered message, ready to hand over to a transport.
#[derive(Clone, Debug)]
pub struct Email {
    /// Display name shown next to `from`.
    pub sender_name: String,
    pub from: EmailAddress,
    pub to: EmailAddress,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("`{address}` is not an address the relay accepts")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error("Failed to assemble the message")]
    Message(#[from] lettre::error::Error),
    #[error("The SMTP relay did not accept the message")]
    Relay(#[from] lettre::transport::smtp::Error),
    #[error("The SMTP relay did not answer within {0:?}")]
    Timeout(std::time::Duration),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to configure the SMTP relay at {host}")]
    Relay {
        host: String,
        #[source]
        source: lettre::transport::smtp::Error,
    },
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &Email) -> Result<(), SendError>;
}

pub trait TransportFactory: Send + Sync {
    fn build(&self, settings: &SmtpSettings) -> Result<Box<dyn MailTransport>, TransportError>;
}

/// Pick the factory matching the configured backend.
pub fn transport_factory(settings: &EmailSettings) -> Arc<dyn TransportFactory> {
    match settings.backend {
        MailBackend::Smtp => Arc::new(SmtpTransportFactory),
        MailBackend::Log => Arc::new(LogTransportFactory),
    }
}
