mod add_stall_image;
mod create_review;
mod create_stall;
mod delete_review;
mod dishes;
mod error;
mod favorites;
mod filter_options;
mod home_feed;
mod load_reviews;
mod register_user;
mod search_stalls;
mod update_profile;
mod update_stall;


type Result<T> = std::result::Result<T, Error>;

pub use self::{
    add_stall_image::*, create_review::*, create_stall::*, delete_review::*, dishes::*,
    error::Error, favorites::*, filter_options::*, home_feed::*, load_reviews::*,
    register_user::*, search_stalls::*, update_profile::*, update_stall::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn get_stall<R: StallRepo>(repo: &R, id: &str) -> Result<Stall> {
    Ok(repo.get_stall(id)?)
}

pub fn stalls_of_user<R: StallRepo>(repo: &R, user_id: &str) -> Result<Vec<Stall>> {
    Ok(repo.stalls_created_by(user_id)?)
}

pub fn get_user<R: UserRepo>(repo: &R, id: &str) -> Result<User> {
    repo.try_get_user(id)?.ok_or(Error::UserDoesNotExist)
}
