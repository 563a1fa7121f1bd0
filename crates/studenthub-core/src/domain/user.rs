use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ItemId, Listable};

/// User record as returned by `/api/users/*`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "user_id")]
    pub id: ItemId,
    #[serde(default, alias = "name")]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub banned: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| role.eq_ignore_ascii_case("admin"))
    }
}

impl Listable for User {
    fn item_id(&self) -> ItemId {
        self.id.clone()
    }
}

/// Authenticated session: an opaque bearer token plus the logged-in user.
///
/// There is no expiry tracking and no refresh; a rejected token surfaces
/// as `ApiError::Unauthorized` and the caller logs in again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: Option<User>) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// An empty token means nobody is logged in.
    pub fn is_authenticated(&self) -> bool {
        !self.token.trim().is_empty()
    }

    pub fn user_id(&self) -> Option<&ItemId> {
        self.user.as_ref().map(|user| &user.id)
    }
}
