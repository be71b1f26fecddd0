//! Profile Provider service.

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::Profile;

/// Serves the static profile of the page owner.
///
/// The profile is fixed for the lifetime of the process: either the built-in
/// default or the contents of a JSON file read at startup.
pub struct ProfileService {
    profile: Profile,
}

impl ProfileService {
    /// Creates a service serving the given profile.
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Loads the profile from `path`, or falls back to the built-in default.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid profile.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::new(Profile::default()));
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file {}", path.display()))?;
        let profile: Profile = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid profile file {}", path.display()))?;

        tracing::info!(path = %path.display(), name = %profile.name, "Profile loaded");
        Ok(Self::new(profile))
    }

    /// Returns the profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}
