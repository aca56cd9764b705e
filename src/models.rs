use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full activity snapshot as returned by `GET /activities`, keyed by
/// activity name. Replaced wholesale on every fetch, never patched in place.
pub type Directory = BTreeMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Email addresses in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    /// Spots remaining as the server reports the roster. Not floored: a
    /// negative value is more useful than a silent clamp if the server
    /// ever hands back an over-full roster.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailBody {
    pub detail: String,
}
