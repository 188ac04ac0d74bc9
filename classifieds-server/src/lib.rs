//! classifieds-server: HTTP CRUD service for advertisement records
//!
//! One resource (`/ad/`), one PostgreSQL table. Requests are validated
//! field by field, mapped to single-row database operations, and answered
//! with JSON; every failure produces the uniform error envelope
//! `{"status": "error", "description": ...}`.

pub mod db;
pub mod http;
pub mod models;
