use super::prelude::*;

/// Reviews of a stall, newest first, optionally capped.
pub fn reviews_of_stall<R: ReviewRepo>(
    repo: &R,
    stall_id: &str,
    limit: Option<usize>,
) -> Result<Vec<Review>> {
    let mut reviews = repo.reviews_of_stall(stall_id)?;
    if let Some(limit) = limit {
        reviews.truncate(limit);
    }
    Ok(reviews)
}

/// Reviews written by a user, newest first.
pub fn reviews_of_user<R: ReviewRepo>(repo: &R, user_id: &str) -> Result<Vec<Review>> {
    Ok(repo.reviews_of_user(user_id)?)
}

#[cfg(test)]
mod tests {

    use super::super::tests::MockDb;
    use super::*;
    use chatori_entities::builders::*;

    fn seed_reviews(db: &MockDb) {
        for (id, stall, user, seconds) in [
            ("r1", "sharma", "anmol", 100),
            ("r2", "sharma", "chotu", 300),
            ("r3", "momos", "anmol", 200),
        ] {
            db.reviews.borrow_mut().push(
                Review::build()
                    .id(id)
                    .stall_id(stall)
                    .user_id(user)
                    .rating(4.0)
                    .comment("tasty")
                    .created_at(Timestamp::from_seconds(seconds))
                    .finish(),
            );
        }
    }

    #[test]
    fn stall_reviews_are_newest_first() {
        let db = MockDb::default();
        seed_reviews(&db);
        let reviews = reviews_of_stall(&db, "sharma", None).unwrap();
        let ids: Vec<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(vec!["r2", "r1"], ids);
    }

    #[test]
    fn stall_reviews_can_be_capped() {
        let db = MockDb::default();
        seed_reviews(&db);
        assert_eq!(1, reviews_of_stall(&db, "sharma", Some(1)).unwrap().len());
    }

    #[test]
    fn user_reviews_span_stalls() {
        let db = MockDb::default();
        seed_reviews(&db);
        let reviews = reviews_of_user(&db, "anmol").unwrap();
        let ids: Vec<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(vec!["r3", "r1"], ids);
    }
}
