//! Session-based authentication for the admin dashboard.
//!
//! This module provides:
//! - signed, expiring session tokens (issue/verify)
//! - login/logout handlers for the single admin credential
//! - `require_session` middleware guarding the protected prefix

mod handlers;
pub mod jwt;
mod middleware;
pub mod types;

pub use handlers::{login, logout, session_status};
pub use middleware::{
    build_session_cookie, clear_session_cookie, require_session, session_from_headers, LOGIN_PATH,
};
