use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields correctly.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number.";
pub const REJECTED_MESSAGE: &str = "Sorry, there was a problem sending your message. Please try again.";
pub const CONNECTIVITY_MESSAGE: &str =
    "Sorry, there was a problem sending your message. Please check your internet connection and try again.";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid phone")]
    InvalidPhone,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields(_) => MISSING_FIELDS_MESSAGE,
            ValidationError::InvalidEmail => INVALID_EMAIL_MESSAGE,
            ValidationError::InvalidPhone => INVALID_PHONE_MESSAGE,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("malformed response (status {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The endpoint answered but refused the submission.
    #[error("rejected by form endpoint: {}", describe(.messages))]
    RemoteRejection { messages: Vec<String> },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

fn describe(messages: &[String]) -> String {
    if messages.is_empty() {
        "no details".to_string()
    } else {
        messages.join(", ")
    }
}

impl SubmitError {
    /// Text shown next to the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(e) => e.user_message().to_string(),
            SubmitError::RemoteRejection { messages } if !messages.is_empty() => messages.join(", "),
            SubmitError::RemoteRejection { .. } => REJECTED_MESSAGE.to_string(),
            SubmitError::Transport(_) => CONNECTIVITY_MESSAGE.to_string(),
        }
    }
}
