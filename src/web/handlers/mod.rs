//! HTML template rendering handlers for the public page.

mod error_page;
mod profile_page;

pub use error_page::{ErrorPageTemplate, PageError};
pub use profile_page::{LinkCard, ProfilePageTemplate, profile_page_handler};
