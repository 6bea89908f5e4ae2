use super::*;
use crate::memdb::Connections;

/// Removes a user's own review. The stall aggregate keeps the past
/// contribution; see the core usecase.
pub fn remove_review(connections: &Connections, user_id: &Id, review_id: &str) -> Result<()> {
    let mut db = connections.exclusive();
    db.transaction(|db| usecases::delete_review(db, user_id, review_id))?;
    Ok(())
}
