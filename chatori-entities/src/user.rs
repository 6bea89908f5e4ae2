use crate::{email::*, id::*, url::Url};

/// Stalls a user has bookmarked.
///
/// Semantically a set: an id is never contained twice. Iteration order
/// is insertion order and carries no meaning.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Favorites(Vec<Id>);

impl Favorites {
    pub fn contains(&self, stall_id: &Id) -> bool {
        self.0.contains(stall_id)
    }

    /// Adds the id unless it is already present.
    pub fn add(&mut self, stall_id: Id) {
        if !self.contains(&stall_id) {
            self.0.push(stall_id);
        }
    }

    /// Removes the id if present.
    pub fn remove(&mut self, stall_id: &Id) {
        self.0.retain(|id| id != stall_id);
    }

    /// Adds the id if absent, removes it if present.
    /// Returns `true` if the id is contained afterwards.
    pub fn toggle(&mut self, stall_id: Id) -> bool {
        if self.contains(&stall_id) {
            self.remove(&stall_id);
            false
        } else {
            self.add(stall_id);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Id>> for Favorites {
    fn from(from: Vec<Id>) -> Self {
        let mut favorites = Self::default();
        for id in from {
            favorites.add(id);
        }
        favorites
    }
}

impl From<Favorites> for Vec<Id> {
    fn from(from: Favorites) -> Self {
        from.0
    }
}

/// An authenticated account. The id equals the subject id assigned by
/// the external identity provider.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id        : Id,
    pub name      : String,
    pub email     : EmailAddress,
    pub image     : Option<Url>,
    pub bio       : String,
    pub phone     : String,
    pub favorites : Favorites,
}
