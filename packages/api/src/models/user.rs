//! # Recipe owner reference
//!
//! Recipes returned by the backend may carry a `user` naming their author.
//! Populated responses embed an object, unpopulated ones only the owner's id.
//! The client only ever displays it, so [`Owner`] keeps the two fields the UI
//! needs and tolerates either being absent.
//!
//! | Wire `user` | Decodes to |
//! |-------------|------------|
//! | `{ "_id" / "id", "username" }` | `Some(Owner { id, username })` |
//! | `"64f0…"` or a number | `Some(Owner { id, username: None })` |
//! | `null`, missing, anything else | `None` |

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::RawId;

/// The user a recipe belongs to, as embedded in recipe responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "OwnerFields")]
pub struct Owner {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub username: Option<String>,
}

impl Owner {
    /// Name to show under a recipe card, if the backend sent a usable one.
    pub fn display_name(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }
}

#[derive(Deserialize)]
struct OwnerFields {
    #[serde(rename = "_id", default)]
    underscore_id: Option<RawId>,
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    username: Option<String>,
}

impl From<OwnerFields> for Owner {
    fn from(raw: OwnerFields) -> Self {
        Self {
            id: raw.underscore_id.or(raw.id).map(String::from),
            username: raw.username,
        }
    }
}

/// Any shape the `user` field of a recipe comes in.
#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum RawOwner {
    Populated(Owner),
    Reference(RawId),
    Other(IgnoredAny),
}

impl RawOwner {
    pub(super) fn into_owner(self) -> Option<Owner> {
        match self {
            Self::Populated(owner) => Some(owner),
            Self::Reference(id) => Some(Owner {
                id: Some(id.into()),
                username: None,
            }),
            Self::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let owner: Owner = serde_json::from_str(r#"{"_id":"u1","username":"ana"}"#).unwrap();
        assert_eq!(owner.id.as_deref(), Some("u1"));
        assert_eq!(owner.display_name(), Some("ana"));

        let blank: Owner = serde_json::from_str(r#"{"username":""}"#).unwrap();
        assert_eq!(blank.display_name(), None);

        let bare: Owner = serde_json::from_str("{}").unwrap();
        assert_eq!(bare, Owner::default());
    }

    #[test]
    fn test_both_id_spellings() {
        let owner: Owner =
            serde_json::from_str(r#"{"_id":"u1","id":"u1","username":"ana"}"#).unwrap();
        assert_eq!(owner.id.as_deref(), Some("u1"));
        assert_eq!(owner.display_name(), Some("ana"));

        let numeric: Owner = serde_json::from_str(r#"{"id":9}"#).unwrap();
        assert_eq!(numeric.id.as_deref(), Some("9"));
    }

    #[test]
    fn test_raw_owner_shapes() {
        let decode = |json: &str| serde_json::from_str::<RawOwner>(json).unwrap().into_owner();

        let reference = decode(r#""64f0c0ffee""#).unwrap();
        assert_eq!(reference.id.as_deref(), Some("64f0c0ffee"));
        assert_eq!(reference.display_name(), None);

        assert_eq!(decode("true"), None);
        assert_eq!(decode("[1,2]"), None);
    }
}
