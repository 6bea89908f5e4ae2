use super::prelude::*;

/// Editable profile fields. Review snapshots that were copied from the
/// profile earlier keep their old values.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
}

pub fn update_profile<R: UserRepo>(repo: &R, user_id: &str, u: UpdateProfile) -> Result<User> {
    let mut user = repo
        .try_get_user(user_id)?
        .ok_or(Error::UserDoesNotExist)?;
    if let Some(name) = u.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(Error::Name);
        }
        user.name = name;
    }
    if let Some(bio) = u.bio {
        user.bio = bio;
    }
    if let Some(phone) = u.phone {
        user.phone = phone;
    }
    if let Some(image) = u.image {
        user.image = Some(image.parse()?);
    }
    repo.update_user(&user)?;
    Ok(user)
}
