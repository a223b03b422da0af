mod email_address;
mod subscription_request;

pub use {
    email_address::{EmailAddress, EmailAddressError},
    subscription_request::{SubscriptionRequest, SubscriptionRequestError},
};
