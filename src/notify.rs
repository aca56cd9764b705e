use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Where a notice is shown: the page-level banner or one activity's
/// message slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    Activity(String),
}

/// Styling only; hide delays are chosen per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: Kind,
    pub visible: bool,
}

pub const SUCCESS_HIDE_UNITS: u32 = 3;
pub const VALIDATION_HIDE_UNITS: u32 = 4;
pub const ERROR_HIDE_UNITS: u32 = 5;

/// Transient scoped notices with one-shot auto-hide timers.
///
/// A later notification to the same scope overwrites the text but does not
/// cancel an earlier hide timer, so the earlier timer can hide the newer
/// message ahead of its own schedule. That matches the source behavior and
/// is left as-is.
#[derive(Clone)]
pub struct Notifier {
    slots: Arc<Mutex<HashMap<Scope, Notice>>>,
    unit: Duration,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_unit(Duration::from_secs(1))
    }

    /// The hide delays are expressed in units of `unit`; tests shrink it
    /// or run it on a paused clock.
    pub fn with_unit(unit: Duration) -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            unit,
        }
    }

    /// Show `text` in `scope` with the default hide delay for `kind`
    /// (3 units for success, 5 for error).
    pub async fn notify(&self, scope: Scope, kind: Kind, text: impl Into<String>) {
        let units = match kind {
            Kind::Success => SUCCESS_HIDE_UNITS,
            Kind::Error => ERROR_HIDE_UNITS,
        };
        self.notify_for(scope, kind, text, units).await;
    }

    /// Show `text` in `scope` and schedule a one-shot hide after
    /// `hide_after_units` time-units.
    pub async fn notify_for(
        &self,
        scope: Scope,
        kind: Kind,
        text: impl Into<String>,
        hide_after_units: u32,
    ) {
        {
            let mut slots = self.slots.lock().await;
            slots.insert(
                scope.clone(),
                Notice {
                    text: text.into(),
                    kind,
                    visible: true,
                },
            );
        }

        let slots = Arc::clone(&self.slots);
        let delay = self.unit * hide_after_units;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(notice) = slots.lock().await.get_mut(&scope) {
                notice.visible = false;
            }
        });
    }

    pub async fn notice(&self, scope: &Scope) -> Option<Notice> {
        self.slots.lock().await.get(scope).cloned()
    }

    /// The notice for `scope` if it is currently visible.
    pub async fn visible(&self, scope: &Scope) -> Option<Notice> {
        self.slots
            .lock()
            .await
            .get(scope)
            .filter(|notice| notice.visible)
            .cloned()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
