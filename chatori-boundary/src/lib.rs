//! # chatori-boundary
//!
//! Serializable, anemic data structures for exchanging Chatori data
//! (snapshot import/export) in a type-safe manner.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
#[cfg(feature = "entity-conversions")]
pub use conv::ConversionError;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Stall {
    pub id            : String,
    pub name          : String,
    pub dish_type     : String,
    pub area          : String,
    pub lat           : f64,
    pub lng           : f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description   : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone         : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name    : Option<String>,
    #[serde(default)]
    pub images        : Vec<String>,
    pub rating        : f64,
    pub num_ratings   : u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by    : Option<String>,
    pub created_at    : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Review {
    pub id           : String,
    pub stall_id     : String,
    pub user_id      : String,
    pub rating       : f64,
    pub comment      : String,
    pub created_at   : i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author_name  : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_image : Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stall_name   : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub id        : String,
    pub name      : String,
    pub email     : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image     : Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bio       : String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone     : String,
    #[serde(default)]
    pub favorites : Vec<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Dish {
    pub id    : String,
    pub name  : String,
    #[serde(default)]
    pub tags  : Vec<String>,
    #[serde(default)]
    pub price : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A complete data snapshot, as imported and exported by the CLI.
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Snapshot {
    #[serde(default)]
    pub stalls: Vec<Stall>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}
