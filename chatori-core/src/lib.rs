//! # chatori-core
//!
//! Business logic of the Chatori stall discovery service: repository
//! traits, usecases, and the pure discovery engine.

use chatori_entities::geo::MapPoint;

pub mod entities;
pub mod repositories;
pub mod usecases;
pub mod util;

/// Provider of the device's last known position.
///
/// Discovery degrades gracefully when no position is available, so
/// implementations may always return `None`.
pub trait LocationGateway {
    fn last_known_position(&self) -> Option<MapPoint>;
}
