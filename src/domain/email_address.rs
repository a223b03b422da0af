use validator::validate_email;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmailAddressError {
    #[error("Email address is missing")]
    Missing,
    #[error("`{0}` is not a valid email address")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<Self, EmailAddressError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(EmailAddressError::Missing)
        } else if validate_email(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(EmailAddressError::Invalid(s))
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
