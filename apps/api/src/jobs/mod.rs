//! Kanban board jobs: CRUD, pipeline analytics, and export.

pub mod export;
pub mod handlers;
pub mod stats;
