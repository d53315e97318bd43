//! Portal profile collaborator.
//!
//! A GIS portal session can supply author/contact defaults for the
//! generated documents. The portal is optional: when no profile is
//! available the credits fall back to configured contact defaults, then
//! to the local username, then to a generic placeholder. Absence is
//! never an error.

use serde::{Deserialize, Serialize};

use crate::meta::defaults::ContactDefaults;

/// Source of signed-in user information.
pub trait PortalProfile {
    fn full_name(&self) -> Option<String>;
    fn organization(&self) -> Option<String>;
    fn email(&self) -> Option<String>;
}

/// A fixed profile, handy for deployments without a live portal session
/// and for tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticProfile {
    pub full_name: Option<String>,
    pub organization: Option<String>,
    pub email: Option<String>,
}

impl PortalProfile for StaticProfile {
    fn full_name(&self) -> Option<String> {
        self.full_name.clone()
    }

    fn organization(&self) -> Option<String> {
        self.organization.clone()
    }

    fn email(&self) -> Option<String> {
        self.email.clone()
    }
}

/// Resolved contact information used for credit and usage-limit defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credits {
    pub user: String,
    pub organization: String,
    pub email: String,
}

impl Credits {
    /// Merge profile values over configured defaults.
    pub fn resolve(profile: Option<&dyn PortalProfile>, defaults: &ContactDefaults) -> Self {
        let user = profile
            .and_then(|p| p.full_name())
            .or_else(|| defaults.name.clone())
            .or_else(local_username)
            .unwrap_or_else(|| "Unknown".to_string());
        let organization = profile
            .and_then(|p| p.organization())
            .or_else(|| defaults.organization.clone())
            .unwrap_or_default();
        let email = profile
            .and_then(|p| p.email())
            .or_else(|| defaults.email.clone())
            .unwrap_or_default();
        Self {
            user,
            organization,
            email,
        }
    }

    /// HTML contact lines, in display order.
    pub fn contact_lines(&self) -> [String; 3] {
        [
            format!("<b> Point of Contact (POC): {}</b> ", self.user),
            format!("<b> Organization: {}</b> ", self.organization),
            format!("<b> Email: {}</b> ", self.email),
        ]
    }

    /// The contact lines as one HTML block.
    pub fn contact_block(&self) -> String {
        self.contact_lines().join("<br></br>")
    }
}

fn local_username() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_values_win() {
        let profile = StaticProfile {
            full_name: Some("A. Hampton".to_string()),
            organization: Some("Geo Org".to_string()),
            email: Some("poc@example.com".to_string()),
        };
        let defaults = ContactDefaults {
            name: Some("Fallback".to_string()),
            ..ContactDefaults::default()
        };

        let credits = Credits::resolve(Some(&profile), &defaults);
        assert_eq!(credits.user, "A. Hampton");
        assert_eq!(credits.organization, "Geo Org");
        assert_eq!(credits.email, "poc@example.com");
    }

    #[test]
    fn test_configured_defaults_fill_gaps() {
        let profile = StaticProfile {
            full_name: Some("A. Hampton".to_string()),
            ..StaticProfile::default()
        };
        let defaults = ContactDefaults {
            name: None,
            organization: Some("Geo Org".to_string()),
            email: Some("team@example.com".to_string()),
        };

        let credits = Credits::resolve(Some(&profile), &defaults);
        assert_eq!(credits.user, "A. Hampton");
        assert_eq!(credits.organization, "Geo Org");
        assert_eq!(credits.email, "team@example.com");
    }

    #[test]
    fn test_no_portal_is_not_an_error() {
        let credits = Credits::resolve(None, &ContactDefaults::default());
        // Falls back to the local username or the placeholder.
        assert!(!credits.user.is_empty());
        assert_eq!(credits.organization, "");
        assert_eq!(credits.email, "");
    }

    #[test]
    fn test_contact_block_format() {
        let credits = Credits {
            user: "POC".to_string(),
            organization: "Org".to_string(),
            email: "e@x".to_string(),
        };
        let block = credits.contact_block();
        assert!(block.contains("Point of Contact (POC): POC"));
        assert!(block.contains("Organization: Org"));
        assert!(block.contains("Email: e@x"));
        assert_eq!(block.matches("<br></br>").count(), 2);
    }
}
