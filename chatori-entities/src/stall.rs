use crate::{activity::*, id::*, location::*, rating::*, url::Url};

use std::str::FromStr;

/// Label substituted for descriptive fields that were never filled in.
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OpeningHours(String);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OpeningHoursParseError;

impl OpeningHours {
    pub const fn min_len() -> usize {
        4
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for OpeningHours {
    type Err = OpeningHoursParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() < Self::min_len() {
            return Err(OpeningHoursParseError);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<OpeningHours> for String {
    fn from(from: OpeningHours) -> Self {
        from.0
    }
}

/// A food stall record.
///
/// `images` keeps upload order. `rating` is the denormalized aggregate
/// that review creation folds into. `created` never changes after the
/// stall has been submitted.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Stall {
    pub id            : Id,
    pub name          : String,
    pub dish_type     : String,
    pub location      : Location,
    pub description   : String,
    pub opening_hours : Option<OpeningHours>,
    pub phone         : Option<String>,
    pub owner_name    : Option<String>,
    pub images        : Vec<Url>,
    pub rating        : AvgRating,
    pub created       : Activity,
}

impl Stall {
    pub fn area(&self) -> &str {
        &self.location.area
    }

    pub fn is_created_by(&self, user_id: &Id) -> bool {
        self.created.by.as_ref() == Some(user_id)
    }

    /// Fold a new review's rating into the aggregate.
    pub fn apply_rating(&mut self, rating: RatingValue) {
        self.rating = self.rating.add(rating);
    }

    pub fn add_image(&mut self, image: Url) {
        self.images.push(image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_hours_require_a_minimum_length() {
        assert!("   ".parse::<OpeningHours>().is_err());
        assert!("9-5".parse::<OpeningHours>().is_err());
        let parsed = " 10:00-22:00 ".parse::<OpeningHours>().unwrap();
        assert_eq!("10:00-22:00", parsed.as_str());
    }
}
