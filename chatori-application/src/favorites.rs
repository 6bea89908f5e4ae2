use super::*;
use crate::memdb::Connections;

/// Flips a stall in the user's bookmarks. Returns `true` if the stall
/// is a favorite afterwards.
pub fn toggle_favorite(connections: &Connections, user_id: &str, stall_id: Id) -> Result<bool> {
    let mut db = connections.exclusive();
    let is_favorite = db.transaction(|db| usecases::toggle_favorite(db, user_id, stall_id))?;
    Ok(is_favorite)
}

/// The stalls a user has bookmarked, in bookmark order.
pub fn favorite_stalls(connections: &Connections, user_id: &str) -> Result<Vec<Stall>> {
    let db = connections.shared();
    Ok(usecases::favorite_stalls(db.inner(), user_id)?)
}
