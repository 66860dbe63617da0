use serde::{Deserialize, Serialize};

/// The persisted part of a session: the two entry sequences, nothing else.
/// Hosts pick the encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub entries: Vec<String>,
    #[serde(default)]
    pub eliminated: Vec<String>,
}

impl SessionSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.eliminated.is_empty()
    }
}
