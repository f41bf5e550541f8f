use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("{0} is not yet available.")]
    NotYetAvailable(&'static str),

    #[error("Invalid email recipient '{0}'.")]
    InvalidRecipient(String),
}
