// Low-level store access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait StallRepo {
    fn create_stall(&self, stall: Stall) -> Result<()>;
    fn update_stall(&self, stall: &Stall) -> Result<()>;

    fn get_stall(&self, id: &str) -> Result<Stall>;
    fn all_stalls(&self) -> Result<Vec<Stall>>;
    fn count_stalls(&self) -> Result<usize>;

    fn stalls_created_by(&self, user_id: &str) -> Result<Vec<Stall>>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: Review) -> Result<()>;
    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, id: &str) -> Result<()>;

    fn load_review(&self, id: &str) -> Result<Review>;

    // Newest first
    fn reviews_of_stall(&self, stall_id: &str) -> Result<Vec<Review>>;
    fn reviews_of_user(&self, user_id: &str) -> Result<Vec<Review>>;

    fn try_review_of_user_for_stall(
        &self,
        user_id: &str,
        stall_id: &str,
    ) -> Result<Option<Review>>;

    fn count_reviews(&self) -> Result<usize>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait DishRepo {
    fn create_dish_if_it_does_not_exist(&self, dish: &Dish) -> Result<()>;

    fn all_dishes(&self) -> Result<Vec<Dish>>;
    fn dishes_by_tag(&self, tag: &str) -> Result<Vec<Dish>>;
    fn count_dishes(&self) -> Result<usize>;
}

pub trait Db: StallRepo + ReviewRepo + UserRepo + DishRepo {}

impl<T> Db for T where T: StallRepo + ReviewRepo + UserRepo + DishRepo {}
