//! Session and user types

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::app::routes;

/// Role tag on the authenticated user. The server sends free-form strings;
/// anything that is not `admin` (case-insensitive) is a regular customer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UserRole {
    Admin,
    Pelanggan,
}

impl UserRole {
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("admin") {
            UserRole::Admin
        } else {
            UserRole::Pelanggan
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Pelanggan => "pelanggan",
        }
    }

    /// Where the profile dropdown routes this role.
    pub fn destination(&self) -> &'static str {
        match self {
            UserRole::Admin => routes::ADMIN,
            UserRole::Pelanggan => routes::PROFILE,
        }
    }

    /// Label of the dropdown entry leading to `destination`.
    pub fn menu_label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Dashboard Admin",
            UserRole::Pelanggan => "Lihat Profil",
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        if tag.trim().is_empty() {
            return Err(D::Error::custom("empty role tag"));
        }
        Ok(UserRole::from_tag(&tag))
    }
}

/// What the UI knows about the signed-in user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub nama: String,
    #[serde(rename = "role_pengguna")]
    pub role: UserRole,
}

impl UserSummary {
    /// First word of the display name, shown on the navbar button.
    pub fn first_name(&self) -> &str {
        self.nama.split_whitespace().next().unwrap_or(&self.nama)
    }
}

/// The session as consumers see it: either anonymous or a user record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthSession {
    pub user: Option<UserSummary>,
}

impl AuthSession {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_mapping_is_case_insensitive() {
        assert_eq!(UserRole::from_tag("Admin"), UserRole::Admin);
        assert_eq!(UserRole::from_tag("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::from_tag("pelanggan"), UserRole::Pelanggan);
        assert_eq!(UserRole::from_tag("driver"), UserRole::Pelanggan);
    }

    #[test]
    fn roles_route_to_their_destinations() {
        assert_eq!(UserRole::Admin.destination(), "/admin");
        assert_eq!(UserRole::Pelanggan.destination(), "/profile");
        assert_eq!(UserRole::Admin.menu_label(), "Dashboard Admin");
        assert_eq!(UserRole::Pelanggan.menu_label(), "Lihat Profil");
    }

    #[test]
    fn user_summary_round_trips_through_json() {
        let user: UserSummary =
            serde_json::from_str(r#"{"nama":"Budi Santoso","role_pengguna":"ADMIN"}"#).unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.first_name(), "Budi");
        let json = serde_json::to_string(&user).unwrap();
        let back: UserSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn anonymous_session_is_not_authenticated() {
        assert!(!AuthSession::default().is_authenticated());
        let session = AuthSession {
            user: Some(UserSummary {
                nama: "Siti".to_string(),
                role: UserRole::Pelanggan,
            }),
        };
        assert!(session.is_authenticated());
    }
}
