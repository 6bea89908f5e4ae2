use crate::geo::*;

/// Where a stall is found: map position plus the colloquial
/// neighbourhood label ("area") used for filtering.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Location {
    pub pos: MapPoint,
    pub area: String,
}
