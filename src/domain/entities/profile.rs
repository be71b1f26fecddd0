//! Profile metadata shown at the top of the page.

use serde::{Deserialize, Serialize};

/// Static profile of the page owner.
///
/// Serialized with camelCase keys (`avatarUrl`, `socialLinks`) to match the
/// public API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar_url: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

/// A social network or contact entry of the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl SocialLink {
    fn new(name: &str, url: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "Chef • Food Lover".to_string(),
            bio: "Turning ingredients into memorable experiences. Welcome to my kitchen!"
                .to_string(),
            avatar_url: "/static/images/avatar.svg".to_string(),
            social_links: vec![
                SocialLink::new("Whatsapp", "https://wa.me/0000000000", "fab fa-whatsapp"),
                SocialLink::new("Instagram", "https://www.instagram.com/", "fab fa-instagram"),
                SocialLink::new("E-mail", "mailto:hello@example.com", "fas fa-envelope"),
                SocialLink::new("TikTok", "https://www.tiktok.com/", "fab fa-tiktok"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_serializes_camel_case() {
        let json = serde_json::to_value(Profile::default()).unwrap();

        assert!(json.get("avatarUrl").is_some());
        assert!(json.get("socialLinks").is_some());
        assert!(json.get("avatar_url").is_none());
        assert_eq!(json["socialLinks"][0]["name"], "Whatsapp");
    }

    #[test]
    fn test_profile_deserializes_without_social_links() {
        let profile: Profile = serde_json::from_str(
            r#"{"name":"A","title":"B","bio":"C","avatarUrl":"/a.png"}"#,
        )
        .unwrap();

        assert_eq!(profile.name, "A");
        assert!(profile.social_links.is_empty());
    }
}
