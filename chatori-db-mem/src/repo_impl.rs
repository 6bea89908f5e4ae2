use std::cell::RefCell;

use chatori_core::{entities::*, repositories::*};

type Result<T> = std::result::Result<T, Error>;

/// The collections of the store. Documents are kept in insertion
/// order; queries are linear scans like on the hosted backend.
#[derive(Debug, Clone, Default)]
pub struct Store {
    stalls: RefCell<Vec<Stall>>,
    reviews: RefCell<Vec<Review>>,
    users: RefCell<Vec<User>>,
    dishes: RefCell<Vec<Dish>>,
}

impl StallRepo for Store {
    fn create_stall(&self, stall: Stall) -> Result<()> {
        let mut stalls = self.stalls.borrow_mut();
        if stalls.iter().any(|s| s.id == stall.id) {
            return Err(Error::AlreadyExists);
        }
        log::debug!("Storing stall {}", stall.id);
        stalls.push(stall);
        Ok(())
    }

    fn update_stall(&self, stall: &Stall) -> Result<()> {
        let mut stalls = self.stalls.borrow_mut();
        let pos = stalls
            .iter()
            .position(|s| s.id == stall.id)
            .ok_or(Error::NotFound)?;
        stalls[pos] = stall.clone();
        Ok(())
    }

    fn get_stall(&self, id: &str) -> Result<Stall> {
        self.stalls
            .borrow()
            .iter()
            .find(|s| s.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_stalls(&self) -> Result<Vec<Stall>> {
        Ok(self.stalls.borrow().clone())
    }

    fn count_stalls(&self) -> Result<usize> {
        Ok(self.stalls.borrow().len())
    }

    fn stalls_created_by(&self, user_id: &str) -> Result<Vec<Stall>> {
        Ok(self
            .stalls
            .borrow()
            .iter()
            .filter(|s| s.created.by.as_ref().map(Id::as_str) == Some(user_id))
            .cloned()
            .collect())
    }
}

impl ReviewRepo for Store {
    fn create_review(&self, review: Review) -> Result<()> {
        let mut reviews = self.reviews.borrow_mut();
        if reviews.iter().any(|r| r.id == review.id) {
            return Err(Error::AlreadyExists);
        }
        log::debug!("Storing review {} of stall {}", review.id, review.stall_id);
        reviews.push(review);
        Ok(())
    }

    fn update_review(&self, review: &Review) -> Result<()> {
        let mut reviews = self.reviews.borrow_mut();
        let pos = reviews
            .iter()
            .position(|r| r.id == review.id)
            .ok_or(Error::NotFound)?;
        reviews[pos] = review.clone();
        Ok(())
    }

    fn delete_review(&self, id: &str) -> Result<()> {
        let mut reviews = self.reviews.borrow_mut();
        let pos = reviews
            .iter()
            .position(|r| r.id.as_str() == id)
            .ok_or(Error::NotFound)?;
        reviews.remove(pos);
        Ok(())
    }

    fn load_review(&self, id: &str) -> Result<Review> {
        self.reviews
            .borrow()
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn reviews_of_stall(&self, stall_id: &str) -> Result<Vec<Review>> {
        let mut reviews: Vec<_> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.stall_id.as_str() == stall_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    fn reviews_of_user(&self, user_id: &str) -> Result<Vec<Review>> {
        let mut reviews: Vec<_> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.user_id.as_str() == user_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }

    fn try_review_of_user_for_stall(
        &self,
        user_id: &str,
        stall_id: &str,
    ) -> Result<Option<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .find(|r| r.user_id.as_str() == user_id && r.stall_id.as_str() == stall_id)
            .cloned())
    }

    fn count_reviews(&self) -> Result<usize> {
        Ok(self.reviews.borrow().len())
    }
}

impl UserRepo for Store {
    fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|u| u.id == user.id) {
            return Err(Error::AlreadyExists);
        }
        log::debug!("Storing user {}", user.id);
        users.push(user.clone());
        Ok(())
    }

    fn update_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.borrow_mut();
        let pos = users
            .iter()
            .position(|u| u.id == user.id)
            .ok_or(Error::NotFound)?;
        users[pos] = user.clone();
        Ok(())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        self.try_get_user(id)?.ok_or(Error::NotFound)
    }

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.users.borrow().len())
    }
}

impl DishRepo for Store {
    fn create_dish_if_it_does_not_exist(&self, dish: &Dish) -> Result<()> {
        let mut dishes = self.dishes.borrow_mut();
        if dishes.iter().any(|d| d.name == dish.name) {
            return Ok(());
        }
        dishes.push(dish.clone());
        Ok(())
    }

    fn all_dishes(&self) -> Result<Vec<Dish>> {
        Ok(self.dishes.borrow().clone())
    }

    fn dishes_by_tag(&self, tag: &str) -> Result<Vec<Dish>> {
        Ok(self
            .dishes
            .borrow()
            .iter()
            .filter(|d| d.tags.iter().any(|t| t == tag))
            .cloned()
            .collect())
    }

    fn count_dishes(&self) -> Result<usize> {
        Ok(self.dishes.borrow().len())
    }
}
