pub use chatori_entities::{
    activity::*, dish::*, email::*, geo::*, id::*, location::*, rating::*, review::*, stall::*,
    time::*, url::Url, user::*,
};
