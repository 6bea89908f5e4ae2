use super::prelude::*;
use crate::util::discovery::{self, DiscoveryQuery};

/// Loads the current stall snapshot and runs discovery over it.
///
/// Invoked anew whenever the snapshot or any filter parameter changes;
/// there is no incremental update.
pub fn search_stalls<R: StallRepo>(
    repo: &R,
    query: &DiscoveryQuery,
    origin: Option<MapPoint>,
) -> Result<Vec<Stall>> {
    let stalls = repo.all_stalls()?;
    Ok(discovery::discover(stalls, query, origin))
}
