//! # Passboard Common Library
//!
//! Typed data layer for the recruitment pass dashboard:
//! - Domain model (passes, positions, feedback, activity)
//! - Derived-state engine (progress, health, priority)
//! - Filter / query engine with pagination
//! - Aggregation engine (summary metrics, timeline insights)
//! - Mutation engine over the in-memory [`PassStore`]
//! - Input validation, seed data, configuration loading

pub mod config;
pub mod derived;
pub mod error;
pub mod filter;
pub mod ids;
pub mod model;
pub mod seed;
pub mod store;
pub mod summary;
pub mod time;
pub mod validate;

pub use error::{Error, Result};
pub use filter::PassFilter;
pub use store::{FeedbackOutcome, PassStore, StatusUpdateOutcome};
