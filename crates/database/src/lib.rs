//! # Student Records Database Crate
//!
//! This crate is the application's interface to the PostgreSQL database. It
//! hides the SQL behind a small, entity-oriented API.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `run_migrations`: Applies the embedded migrations so the `Etudiant` table exists.
//! - `Dao`: The capability trait (`create`, `find_all`) shared by entity services.
//! - `StudentService`: The `Dao<Student>` implementation backed by a `PgPool`.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod dao;
pub mod error;
pub mod student_service;

// Re-export the key components to create a clean public-facing API.
pub use connection::{connect, run_migrations, MIGRATOR};
pub use dao::Dao;
pub use error::DbError;
pub use student_service::{StudentRecord, StudentService};
