//! AlgoArena - Competitive Programming Platform Backend
//!
//! This library provides the backend for the AlgoArena platform: a problem
//! catalog, per-problem discussion, user profiles, and a submission
//! evaluation pipeline backed by an external code-execution service.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic, including the evaluation pipeline
//! - **Judge**: Client, dispatcher, and aggregator for the external judge
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
