//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and schema migrations
//! - Repositories over the users table

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};
