//! # Healthcare Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! PostgreSQL database that holds submitted questionnaires.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. The web layer talks to the
//!   `QuestionnaireStore` trait and never sees a query string.
//! - **Validated writes only:** Inserts accept a `QuestionnaireSubmission`, which
//!   can only be produced by the validation schema in `core-types`.
//! - **All-or-nothing submissions:** A questionnaire and its chronic-detail record
//!   are written inside one transaction via `run_in_transaction`.
//! - **Asynchronous & Pooled:** Every call checks a connection out of a shared
//!   `PgPool`; it is returned on every exit path, including errors.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `DbRepository`: Holds the pool and implements `QuestionnaireStore`.
//! - `questionnaires` / `chronic_details`: The two table repositories.
//! - `run_in_transaction`: Runs an operation between BEGIN and COMMIT/ROLLBACK.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod chronic_details;
pub mod connection;
pub mod error;
pub mod questionnaires;
pub mod repository;
pub mod store;
pub mod transaction;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_options};
pub use error::DbError;
pub use repository::DbRepository;
pub use store::QuestionnaireStore;
pub use transaction::run_in_transaction;
