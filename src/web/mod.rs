//! Server-rendered public page.
//!
//! Renders the profile, active links and headline counters with Askama
//! templates. The page's script talks to the JSON API to record clicks and
//! refresh the counters.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
