use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid opening hours")]
    InvalidOpeningHours,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("The stall has already been reviewed by this user")]
    DuplicateReview,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<chatori_entities::email::EmailAddressParseError> for Error {
    fn from(_: chatori_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<chatori_entities::stall::OpeningHoursParseError> for Error {
    fn from(_: chatori_entities::stall::OpeningHoursParseError) -> Self {
        Self::InvalidOpeningHours
    }
}

impl From<chatori_entities::url::ParseError> for Error {
    fn from(_: chatori_entities::url::ParseError) -> Self {
        Self::Url
    }
}
