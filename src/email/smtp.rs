use super::{Email, MailTransport, SendError, TransportError, TransportFactory};
use crate::{
    configuration::{SmtpSettings, TlsMode},
    domain::EmailAddress,
};

use std::time::Duration;

use {
    async_trait::async_trait,
    lettre::{
        message::{Mailbox, MultiPart},
        transport::smtp::authentication::Credentials,
        Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    },
    secrecy::ExposeSecret,
};

/// Builds an [`SmtpTransport`] per call. Holds no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpTransportFactory;

impl TransportFactory for SmtpTransportFactory {
    fn build(&self, settings: &SmtpSettings) -> Result<Box<dyn MailTransport>, TransportError> {
        Ok(Box::new(SmtpTransport::new(settings)?))
    }
}

/// Delivers through an SMTP relay with lettre's tokio transport.
pub struct SmtpTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// Bounds the whole SMTP conversation. lettre's own timeout only covers connecting.
    timeout: Duration,
}

impl SmtpTransport {
    pub fn new(settings: &SmtpSettings) -> Result<Self, TransportError> {
        let builder = match settings.tls {
            TlsMode::Starttls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            }
            TlsMode::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host),
            TlsMode::None => Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(
                settings.host.as_str(),
            )),
        }
        .map_err(|source| TransportError::Relay {
            host: settings.host.clone(),
            source,
        })?;

        let mut builder = builder
            .port(settings.port)
            .timeout(Some(settings.timeout()));
        // Without credentials lettre skips AUTH entirely
        if !settings.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                settings.username.clone(),
                settings.password.expose_secret().clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            timeout: settings.timeout(),
        })
    }
}

#[async_trait]
impl MailTransport for SmtpTransport {
    #[tracing::instrument(
        name = "Sending an email through the SMTP relay",
        skip(self, email),
        fields(recipient = %email.to, subject = %email.subject)
    )]
    async fn send(&self, email: &Email) -> Result<(), SendError> {
        let message = build_message(email)?;
        let response = tokio::time::timeout(self.timeout, self.transport.send(message))
            .await
            .map_err(|_| SendError::Timeout(self.timeout))??;
        tracing::debug!(code = %response.code(), "Relay accepted the message");
        Ok(())
    }
}

fn mailbox(name: Option<String>, address: &EmailAddress) -> Result<Mailbox, SendError> {
    let parsed: Address = address
        .as_ref()
        .parse()
        .map_err(|source| SendError::InvalidAddress {
            address: address.to_string(),
            source,
        })?;
    Ok(Mailbox::new(name, parsed))
}

fn build_message(email: &Email) -> Result<Message, SendError> {
    let sender_name = Some(email.sender_name.clone()).filter(|name| !name.trim().is_empty());
    let message = Message::builder()
        .from(mailbox(sender_name, &email.from)?)
        .to(mailbox(None, &email.to)?)
        .subject(email.subject.clone())
        .multipart(MultiPart::alternative_plain_html(
            email.text_body.clone(),
            email.html_body.clone(),
        ))?;
    Ok(message)
}
