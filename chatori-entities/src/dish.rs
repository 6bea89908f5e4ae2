use crate::{id::*, url::Url};

/// A named menu item used to populate category filters.
///
/// `price` stays the free-form string entered by vendors; it is
/// displayed verbatim and never used for arithmetic.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id    : Id,
    pub name  : String,
    pub tags  : Vec<String>,
    pub price : String,
    pub image : Option<Url>,
}

impl Dish {
    pub const DEFAULT_PRICE: &'static str = "0";

    pub fn new(id: Id, name: String) -> Self {
        Self {
            id,
            name,
            tags: Vec::new(),
            price: Self::DEFAULT_PRICE.to_string(),
            image: None,
        }
    }

    /// Adds the tag unless it is already present.
    pub fn add_tag(&mut self, tag: String) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_never_contain_duplicates() {
        let mut dish = Dish::new(Id::new(), "Momos".into());
        dish.add_tag("steamed".into());
        dish.add_tag("tibetan".into());
        dish.add_tag("steamed".into());
        assert_eq!(vec!["steamed", "tibetan"], dish.tags);
        dish.remove_tag("steamed");
        assert_eq!(vec!["tibetan"], dish.tags);
    }
}
