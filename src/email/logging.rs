use super::{Email, MailTransport, SendError, TransportError, TransportFactory};
use crate::configuration::SmtpSettings;

use async_trait::async_trait;

/// Factory for [`LogTransport`]. Ignores the relay settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTransportFactory;

impl TransportFactory for LogTransportFactory {
    fn build(&self, _settings: &SmtpSettings) -> Result<Box<dyn MailTransport>, TransportError> {
        Ok(Box::new(LogTransport))
    }
}

/// Writes the message envelope to the log instead of delivering it.
/// Used for local development where no relay credentials exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    async fn send(&self, email: &Email) -> Result<(), SendError> {
        tracing::info!(
            from = %email.from,
            recipient = %email.to,
            subject = %email.subject,
            html_bytes = email.html_body.len(),
            "Email delivery skipped, log backend is active"
        );
        Ok(())
    }
}
