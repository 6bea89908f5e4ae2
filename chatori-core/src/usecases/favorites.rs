use super::prelude::*;

pub fn add_favorite<R: UserRepo>(repo: &R, user_id: &str, stall_id: Id) -> Result<()> {
    let mut user = repo
        .try_get_user(user_id)?
        .ok_or(Error::UserDoesNotExist)?;
    user.favorites.add(stall_id);
    Ok(repo.update_user(&user)?)
}

pub fn remove_favorite<R: UserRepo>(repo: &R, user_id: &str, stall_id: &Id) -> Result<()> {
    let mut user = repo
        .try_get_user(user_id)?
        .ok_or(Error::UserDoesNotExist)?;
    user.favorites.remove(stall_id);
    Ok(repo.update_user(&user)?)
}

/// Bookmarks the stall if it is not bookmarked yet, un-bookmarks it
/// otherwise. Returns `true` if the stall is a favorite afterwards.
pub fn toggle_favorite<R: UserRepo>(repo: &R, user_id: &str, stall_id: Id) -> Result<bool> {
    let mut user = repo
        .try_get_user(user_id)?
        .ok_or(Error::UserDoesNotExist)?;
    let is_favorite = user.favorites.toggle(stall_id);
    repo.update_user(&user)?;
    Ok(is_favorite)
}

/// Resolves the bookmarked ids to stall records.
///
/// Ids pointing at stalls that no longer exist are skipped instead of
/// failing the whole view.
pub fn favorite_stalls<R>(repo: &R, user_id: &str) -> Result<Vec<Stall>>
where
    R: UserRepo + StallRepo,
{
    let user = repo
        .try_get_user(user_id)?
        .ok_or(Error::UserDoesNotExist)?;
    let mut stalls = Vec::with_capacity(user.favorites.len());
    for stall_id in user.favorites.iter() {
        match repo.get_stall(stall_id.as_str()) {
            Ok(stall) => stalls.push(stall),
            Err(crate::repositories::Error::NotFound) => {
                log::debug!("Skipping dangling favorite: {stall_id}");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(stalls)
}

#[cfg(test)]
mod tests {

    use super::super::tests::MockDb;
    use super::*;
    use chatori_entities::builders::*;

    fn seeded_db() -> MockDb {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(User::build().id("anmol").finish());
        db.stalls
            .borrow_mut()
            .push(Stall::build().id("sharma").name("Sharma Chaat").finish());
        db
    }

    #[test]
    fn toggle_twice_restores_the_original_set() {
        let db = seeded_db();
        assert!(toggle_favorite(&db, "anmol", "sharma".into()).unwrap());
        assert!(!toggle_favorite(&db, "anmol", "sharma".into()).unwrap());
        assert!(db.get_user("anmol").unwrap().favorites.is_empty());
    }

    #[test]
    fn adding_twice_keeps_a_single_entry() {
        let db = seeded_db();
        add_favorite(&db, "anmol", "sharma".into()).unwrap();
        add_favorite(&db, "anmol", "sharma".into()).unwrap();
        assert_eq!(1, db.get_user("anmol").unwrap().favorites.len());
    }

    #[test]
    fn dangling_favorites_are_skipped() {
        let db = seeded_db();
        add_favorite(&db, "anmol", "sharma".into()).unwrap();
        add_favorite(&db, "anmol", "vanished".into()).unwrap();
        let stalls = favorite_stalls(&db, "anmol").unwrap();
        assert_eq!(1, stalls.len());
        assert_eq!("Sharma Chaat", stalls[0].name);
    }

    #[test]
    fn unknown_user_is_reported() {
        let db = MockDb::default();
        assert!(matches!(
            toggle_favorite(&db, "ghost", "sharma".into()),
            Err(Error::UserDoesNotExist)
        ));
    }
}
