//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - An entry on the profile page
//! - [`Click`] - One recorded activation of a link
//! - [`Visitor`] - One deduplicated (IP, day) presence record
//! - [`Profile`] - Static metadata of the page owner
//!
//! Statistics value types live in [`stats`].
//!
//! # Design Pattern
//!
//! Entities have separate structs for creation (`NewLink`, `NewClick`,
//! `NewVisitor`); clicks and visitors are never updated once written.

pub mod click;
pub mod link;
pub mod profile;
pub mod stats;
pub mod visitor;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
pub use profile::{Profile, SocialLink};
pub use stats::{DailyClicks, DetailedStats, StatsSummary, TopLink};
pub use visitor::{NewVisitor, VisitOutcome, Visitor};
