//! Project resource subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler (parsed JSON body)
//!     → validation.rs (ordered field checks → NewProject / ProjectPatch)
//!     → store.rs (id + timestamp assignment, lookup, merge, removal)
//!     → types.rs (Project serialized back to the client)
//! ```
//!
//! # Design Decisions
//! - The store owns the collection; handlers re-look-up by id on every call
//! - Insertion order is the only ordering (no sort by priority or date)
//! - `id` and `createdAt` are assigned once and never written again
//! - Patches are explicit optional fields, never a generic object merge

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{ProjectError, ProjectResult, ValidationError};
pub use store::ProjectStore;
pub use types::{NewProject, Project, ProjectPatch, ProjectStatus};
pub use validation::{validate_new_project, validate_patch};
