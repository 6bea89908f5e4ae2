use super::*;
use crate::memdb::Connections;

/// Adds a review to a stall and folds its rating into the stall's
/// aggregate. Both writes run in one transaction: a review is never
/// persisted without its aggregate update, and vice versa.
pub fn create_review(
    connections: &Connections,
    review: usecases::NewStallReview,
) -> Result<String> {
    let review_id = {
        let mut db = connections.exclusive();
        db.transaction(|db| {
            let storable = usecases::prepare_new_review(db, review)?;
            let review_id = storable.review_id().to_owned();
            usecases::store_new_review(db, storable).map_err(|err| {
                warn!("Failed to store new review: {err}");
                err
            })?;
            Ok::<_, usecases::Error>(review_id)
        })
    }?;
    Ok(review_id)
}
