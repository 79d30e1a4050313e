//! HTTP API handlers for passboard-server
//!
//! A thin surface over [`passboard_common::PassStore`]: handlers validate
//! input, take the store lock, call one core operation and serialize the
//! result.

pub mod context;
pub mod dashboard;
pub mod health;
pub mod mutations;
pub mod passes;
pub mod ui;

pub use context::{RequestUser, UserRole};
pub use dashboard::dashboard_routes;
pub use health::health_routes;
pub use mutations::mutation_routes;
pub use passes::pass_routes;
pub use ui::ui_routes;
