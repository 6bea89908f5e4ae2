use super::prelude::*;
use crate::util::validate;

/// Account data handed over by the external identity provider after a
/// successful sign-in.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Id,
    pub name: String,
    pub email: EmailAddress,
    pub image: Option<Url>,
}

/// Creates the local account record for an authenticated identity.
///
/// Signing in repeatedly with the same identity is a no-op that
/// returns the existing record; a different identity re-using an
/// already registered id is rejected.
pub fn register_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    if !validate::is_valid_email(u.email.as_str()) {
        return Err(Error::EmailAddress);
    }
    if let Some(existing) = repo.try_get_user(u.id.as_str())? {
        if existing.email == u.email {
            return Ok(existing);
        }
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: u.id,
        name: u.name,
        email: u.email,
        image: u.image,
        bio: String::new(),
        phone: String::new(),
        favorites: Favorites::default(),
    };
    log::debug!("Creating new user: id = {}", new_user.id);
    repo.create_user(&new_user)?;
    Ok(new_user)
}

#[cfg(test)]
mod tests {

    use super::super::tests::MockDb;
    use super::*;

    fn new_user(id: &str, email: &str) -> NewUser {
        NewUser {
            id: id.into(),
            name: "Anmol".into(),
            email: EmailAddress::new_unchecked(email.into()),
            image: None,
        }
    }

    #[test]
    fn register_two_users() {
        let db = MockDb::default();
        assert!(register_user(&db, new_user("a", "a@example.com")).is_ok());
        assert!(register_user(&db, new_user("b", "b@example.com")).is_ok());
        assert_eq!(2, db.count_users().unwrap());
    }

    #[test]
    fn register_with_invalid_email() {
        let db = MockDb::default();
        assert!(matches!(
            register_user(&db, new_user("a", "not-an-email")),
            Err(Error::EmailAddress)
        ));
    }

    #[test]
    fn repeated_sign_in_is_idempotent() {
        let db = MockDb::default();
        let first = register_user(&db, new_user("a", "a@example.com")).unwrap();
        let second = register_user(&db, new_user("a", "a@example.com")).unwrap();
        assert_eq!(first, second);
        assert_eq!(1, db.count_users().unwrap());
    }

    #[test]
    fn conflicting_identity_is_rejected() {
        let db = MockDb::default();
        register_user(&db, new_user("a", "a@example.com")).unwrap();
        assert!(matches!(
            register_user(&db, new_user("a", "other@example.com")),
            Err(Error::UserExists)
        ));
    }
}
