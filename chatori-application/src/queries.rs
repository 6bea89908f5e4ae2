use rand::Rng;

use super::*;
use crate::memdb::Connections;
use chatori_core::util::discovery::DiscoveryQuery;
use chatori_entities::geo::MapPoint;

/// Runs a discovery query over the current snapshot.
pub fn search(
    connections: &Connections,
    query: &DiscoveryQuery,
    origin: Option<MapPoint>,
) -> Result<Vec<Stall>> {
    let db = connections.shared();
    Ok(usecases::search_stalls(db.inner(), query, origin)?)
}

/// Distinct dish types and areas for the filter chips.
pub fn filter_options(connections: &Connections) -> Result<usecases::FilterOptions> {
    let db = connections.shared();
    Ok(usecases::filter_options(db.inner())?)
}

/// Assembles the start screen rails.
pub fn load_home_feed<G: Rng>(
    connections: &Connections,
    origin: Option<MapPoint>,
    limit: usize,
    rng: &mut G,
) -> Result<usecases::HomeFeed> {
    let db = connections.shared();
    Ok(usecases::home_feed(db.inner(), origin, limit, rng)?)
}

/// A stall together with its reviews, newest first.
pub fn stall_details(
    connections: &Connections,
    stall_id: &str,
    review_limit: Option<usize>,
) -> Result<(Stall, Vec<Review>)> {
    let db = connections.shared();
    let stall = usecases::get_stall(db.inner(), stall_id)?;
    let reviews = usecases::reviews_of_stall(db.inner(), stall_id, review_limit)?;
    Ok((stall, reviews))
}

/// Everything shown on a profile page.
pub fn profile_page(
    connections: &Connections,
    user_id: &str,
) -> Result<(User, Vec<Stall>, Vec<Review>)> {
    let db = connections.shared();
    let user = usecases::get_user(db.inner(), user_id)?;
    let stalls = usecases::stalls_of_user(db.inner(), user_id)?;
    let reviews = usecases::reviews_of_user(db.inner(), user_id)?;
    Ok((user, stalls, reviews))
}
