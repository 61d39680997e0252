use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Per-activity body of `GET /activities`, keyed by name in the outer object.
#[derive(Debug, Clone, Deserialize, PartialEq)]
struct ActivityDetails {
    description: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Signed so an over-full roster from the backend shows up as negative.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Activities in the order the server listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityCatalog(pub Vec<Activity>);

impl ActivityCatalog {
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|a| a.name.clone()).collect()
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut activities = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    activities.push(Activity {
                        name,
                        description: details.description,
                        max_participants: details.max_participants,
                        participants: details.participants,
                    });
                }
                Ok(ActivityCatalog(activities))
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// One participant row, addressable for removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantRef {
    pub activity: String,
    pub email: String,
}

impl ParticipantRef {
    /// `None` when either half is blank; such a control does nothing.
    pub fn new(activity: &str, email: &str) -> Option<Self> {
        if activity.is_empty() || email.is_empty() {
            return None;
        }
        Some(Self {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }
}

/// Body of the signup/removal responses: `{message}` on success, `{detail}` on error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiMessage {
    /// Lenient parse: anything that isn't the expected object counts as empty.
    pub fn parse_lenient(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}
