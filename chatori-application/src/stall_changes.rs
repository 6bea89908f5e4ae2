use super::*;
use crate::memdb::Connections;

/// Applies a creator's edit of descriptive stall fields.
pub fn change_stall(
    connections: &Connections,
    user_id: &Id,
    stall_id: &str,
    update: usecases::UpdateStall,
) -> Result<Stall> {
    let mut db = connections.exclusive();
    let stall = db.transaction(|db| usecases::update_stall(db, user_id, stall_id, update))?;
    Ok(stall)
}

/// Appends an uploaded image to a stall's gallery.
pub fn attach_stall_image(
    connections: &Connections,
    stall_id: &str,
    image_url: &str,
) -> Result<Stall> {
    let mut db = connections.exclusive();
    let stall = db.transaction(|db| usecases::add_stall_image(db, stall_id, image_url))?;
    Ok(stall)
}
