//! Web layer for the browser-facing login flow.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Form handling
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration
//! - [`views`] - `login` and `dashboard` templates

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;
