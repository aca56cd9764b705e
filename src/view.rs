use crate::models::{Activity, Directory};
use std::collections::BTreeMap;

/// One visible participant line on an activity card.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub email: String,
    /// Optimistic insertion not yet confirmed by the server.
    pub pending: bool,
    /// Whether the row's unregister control accepts input.
    pub enabled: bool,
}

impl ParticipantRow {
    fn confirmed(email: &str) -> Self {
        Self {
            email: email.to_string(),
            pending: false,
            enabled: true,
        }
    }
}

/// Displayed state for one activity. Disposable: rebuilt from every fresh
/// directory snapshot, speculatively mutated only by the controller between
/// a user action and its network resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Displayed participant count; runs ahead of the server while a
    /// signup is pending.
    pub count: u32,
    /// Displayed spots left. Signed: rendering shows the raw difference,
    /// only speculative updates floor it at zero.
    pub availability: i64,
    pub rows: Vec<ParticipantRow>,
}

impl ActivityCard {
    fn from_snapshot(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            count: activity.participants.len() as u32,
            availability: activity.spots_left(),
            rows: activity
                .participants
                .iter()
                .map(|email| ParticipantRow::confirmed(email))
                .collect(),
        }
    }

    /// Apply the optimistic half of a signup: bump the count, recompute
    /// availability (floored at zero), append a pending row. Returns the
    /// previous count for a later rollback.
    pub fn speculate_signup(&mut self, email: &str) -> u32 {
        let previous = self.count;
        self.count = previous + 1;
        self.availability = floored_availability(self.max_participants, self.count);
        self.rows.push(ParticipantRow {
            email: email.to_string(),
            pending: true,
            enabled: false,
        });
        previous
    }

    /// Undo `speculate_signup` after a failed attempt. The pending row may
    /// already be gone if a refresh raced the failure; that is fine.
    pub fn rollback_signup(&mut self, email: &str, previous_count: u32) {
        if let Some(pos) = self
            .rows
            .iter()
            .rposition(|row| row.pending && row.email == email)
        {
            self.rows.remove(pos);
        }
        self.count = previous_count;
        self.availability = floored_availability(self.max_participants, previous_count);
    }

    pub fn row_mut(&mut self, email: &str) -> Option<&mut ParticipantRow> {
        self.rows.iter_mut().find(|row| row.email == email)
    }
}

fn floored_availability(max_participants: u32, count: u32) -> i64 {
    (i64::from(max_participants) - i64::from(count)).max(0)
}

/// The whole visible surface: one card per activity plus the selection
/// control's options. A projection of the latest directory snapshot, fully
/// replaced on every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub cards: BTreeMap<String, ActivityCard>,
    /// Selection options: a leading empty placeholder, then activity names.
    pub options: Vec<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild everything from a directory snapshot. Old cards are
    /// discarded, not merged, so rendering the same snapshot twice yields
    /// the same state.
    pub fn render(&mut self, directory: &Directory) {
        self.cards = directory
            .iter()
            .map(|(name, activity)| (name.clone(), ActivityCard::from_snapshot(activity)))
            .collect();
        self.options = std::iter::once(String::new())
            .chain(directory.keys().cloned())
            .collect();
    }

    pub fn is_populated(&self) -> bool {
        !self.cards.is_empty()
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards.get(name)
    }

    pub fn card_mut(&mut self, name: &str) -> Option<&mut ActivityCard> {
        self.cards.get_mut(name)
    }
}
