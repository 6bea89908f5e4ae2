use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewStallReview {
    pub stall: Id,
    pub user: Id,
    pub rating: RatingValue,
    pub comment: String,
}

/// Validated review together with the stall it will be folded into.
#[derive(Debug, Clone)]
pub struct Storable(Review, Stall);

impl Storable {
    pub fn review_id(&self) -> &str {
        self.0.id.as_ref()
    }
}

pub fn prepare_new_review<R>(repo: &R, r: NewStallReview) -> Result<Storable>
where
    R: StallRepo + UserRepo + ReviewRepo,
{
    if r.comment.trim().is_empty() {
        return Err(Error::EmptyComment);
    }
    if !r.rating.is_valid() || !r.rating.is_rated() {
        return Err(Error::RatingValue);
    }
    let user = repo
        .try_get_user(r.user.as_str())?
        .ok_or(Error::UserDoesNotExist)?;
    let stall = repo.get_stall(r.stall.as_str())?;
    if repo
        .try_review_of_user_for_stall(r.user.as_str(), r.stall.as_str())?
        .is_some()
    {
        return Err(Error::DuplicateReview);
    }
    // Display fields are copied from the author and the stall at write
    // time and stay frozen afterwards.
    let review = Review {
        id: Id::new(),
        stall_id: r.stall,
        user_id: r.user,
        rating: r.rating,
        comment: r.comment,
        created_at: Timestamp::now(),
        author_name: user.name,
        author_image: user.image,
        stall_name: stall.name.clone(),
    };
    Ok(Storable(review, stall))
}

/// Persists the prepared review and folds its rating into the stall
/// aggregate. Callers that need both writes to happen atomically must
/// run this inside a store transaction.
pub fn store_new_review<R>(repo: &R, s: Storable) -> Result<(Stall, Review)>
where
    R: StallRepo + ReviewRepo,
{
    let Storable(review, mut stall) = s;
    debug_assert_eq!(stall.id, review.stall_id);
    repo.create_review(review.clone())?;
    stall.apply_rating(review.rating);
    repo.update_stall(&stall)?;
    Ok((stall, review))
}
