//! Project Service Library
//!
//! An HTTP CRUD service for a single "project" resource held in memory.

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod projects;

pub use client::ProjectClient;
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use projects::{Project, ProjectStatus, ProjectStore};
