use super::prelude::*;

/// Registers a dish name for the category filters unless a dish with
/// that name already exists.
pub fn add_dish_if_absent<R: DishRepo>(repo: &R, name: &str, tags: Vec<String>) -> Result<Dish> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let mut dish = Dish::new(Id::new(), name.to_string());
    for tag in tags {
        dish.add_tag(tag);
    }
    repo.create_dish_if_it_does_not_exist(&dish)?;
    Ok(dish)
}

pub fn all_dishes<R: DishRepo>(repo: &R) -> Result<Vec<Dish>> {
    Ok(repo.all_dishes()?)
}

pub fn dishes_by_tag<R: DishRepo>(repo: &R, tag: &str) -> Result<Vec<Dish>> {
    Ok(repo.dishes_by_tag(tag)?)
}

#[cfg(test)]
mod tests {

    use super::super::tests::MockDb;
    use super::*;

    #[test]
    fn register_dish_once() {
        let db = MockDb::default();
        add_dish_if_absent(&db, "Momos", vec!["steamed".into(), "steamed".into()]).unwrap();
        add_dish_if_absent(&db, "Momos", vec![]).unwrap();
        let dishes = all_dishes(&db).unwrap();
        assert_eq!(1, dishes.len());
        assert_eq!(vec!["steamed"], dishes[0].tags);
    }

    #[test]
    fn blank_name_is_rejected() {
        let db = MockDb::default();
        assert!(matches!(
            add_dish_if_absent(&db, "  ", vec![]),
            Err(Error::Name)
        ));
    }

    #[test]
    fn filter_by_tag() {
        let db = MockDb::default();
        add_dish_if_absent(&db, "Momos", vec!["steamed".into()]).unwrap();
        add_dish_if_absent(&db, "Chaat", vec!["tangy".into()]).unwrap();
        let dishes = dishes_by_tag(&db, "tangy").unwrap();
        assert_eq!(1, dishes.len());
        assert_eq!("Chaat", dishes[0].name);
    }
}
