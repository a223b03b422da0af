use super::{EmailAddress, EmailAddressError};

/// One subscription as received from the landing page form. Lives for the
/// duration of a single request.
#[derive(Clone, Debug)]
pub struct SubscriptionRequest {
    pub subscriber: EmailAddress,
    pub admin: EmailAddress,
    pub sender: EmailAddress,
}

#[derive(Debug, thiserror::Error)]
pub enum SubscriptionRequestError {
    #[error("Invalid subscriber email")]
    Subscriber(#[source] EmailAddressError),
    #[error("Invalid admin email")]
    Admin(#[source] EmailAddressError),
    #[error("Invalid sender email")]
    Sender(#[source] EmailAddressError),
}

impl SubscriptionRequest {
    /// Absent fields are treated as empty strings so that they are reported
    /// the same way as blank ones.
    pub fn parse(
        subscriber: Option<String>,
        admin: Option<String>,
        sender: Option<String>,
    ) -> Result<Self, SubscriptionRequestError> {
        let subscriber = EmailAddress::parse(subscriber.unwrap_or_default())
            .map_err(SubscriptionRequestError::Subscriber)?;
        let admin = EmailAddress::parse(admin.unwrap_or_default())
            .map_err(SubscriptionRequestError::Admin)?;
        let sender = EmailAddress::parse(sender.unwrap_or_default())
            .map_err(SubscriptionRequestError::Sender)?;
        Ok(Self {
            subscriber,
            admin,
            sender,
        })
    }
}
