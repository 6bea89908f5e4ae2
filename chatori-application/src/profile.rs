use super::*;
use crate::memdb::Connections;

/// Creates the local account record after a sign-in with the external
/// identity provider.
pub fn sign_up(connections: &Connections, new_user: usecases::NewUser) -> Result<User> {
    let mut db = connections.exclusive();
    let user = db.transaction(|db| usecases::register_user(db, new_user))?;
    Ok(user)
}

/// Applies profile edits.
pub fn edit_profile(
    connections: &Connections,
    user_id: &str,
    update: usecases::UpdateProfile,
) -> Result<User> {
    let mut db = connections.exclusive();
    let user = db.transaction(|db| usecases::update_profile(db, user_id, update))?;
    Ok(user)
}
