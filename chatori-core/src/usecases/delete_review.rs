use super::prelude::*;

/// Removes a review. Only the author may do so.
///
/// The stall's rating aggregate keeps the contribution of the deleted
/// review; it only ever grows by new reviews.
pub fn delete_review<R: ReviewRepo>(repo: &R, user_id: &Id, review_id: &str) -> Result<()> {
    let review = repo.load_review(review_id)?;
    if &review.user_id != user_id {
        return Err(Error::Forbidden);
    }
    Ok(repo.delete_review(review_id)?)
}
