use crate::{id::*, rating::*, time::*, url::Url};

/// One user's rating and comment for one stall.
///
/// `author_name`, `author_image`, and `stall_name` are copied from the
/// authoring user and the reviewed stall when the review is written.
/// They are display snapshots and are deliberately never re-synced when
/// the source records change later.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id           : Id,
    pub stall_id     : Id,
    pub user_id      : Id,
    pub rating       : RatingValue,
    pub comment      : String,
    pub created_at   : Timestamp,
    pub author_name  : String,
    pub author_image : Option<Url>,
    pub stall_name   : String,
}
