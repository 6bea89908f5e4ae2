//! # chatori-application
//!
//! Composed flows on top of the core usecases: each flow owns its
//! store-access boundary, multi-document writes run inside a single
//! transaction.

#[macro_use]
extern crate log;

mod create_review;
mod create_stall;
mod delete_review;
mod favorites;
mod profile;
mod queries;
mod stall_changes;

pub mod prelude {
    pub use super::{
        create_review::*, create_stall::*, delete_review::*, favorites::*, profile::*,
        queries::*, stall_changes::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use chatori_core::{entities::*, repositories::*, usecases};

pub(crate) mod memdb {
    pub use chatori_db_mem::Connections;
}
