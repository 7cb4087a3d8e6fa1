//! `db` crate — pure persistence layer.
//!
//! Provides connection settings, a connection pool, the photo row structs, and
//! one repository function per operation on the `photos` table.  No business
//! logic lives here.

pub mod config;
pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use config::DbConfig;
pub use pool::DbPool;
pub use error::DbError;
pub use models::{NewPhoto, PhotoRow};
