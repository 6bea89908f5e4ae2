use super::*;
use crate::memdb::Connections;

/// Persists a vendor's stall submission.
pub fn submit_stall(connections: &Connections, stall: usecases::NewStall) -> Result<Stall> {
    let mut db = connections.exclusive();
    let stall = db.transaction(|db| usecases::create_new_stall(db, stall))?;
    // New dish types feed the category filter collection.
    if stall.dish_type != chatori_entities::stall::UNKNOWN_LABEL {
        if let Err(err) = usecases::add_dish_if_absent(db.inner(), &stall.dish_type, vec![]) {
            warn!("Failed to register dish type {}: {err}", stall.dish_type);
        }
    }
    Ok(stall)
}
