use crate::client::DirectoryClient;
use crate::errors::{ClientError, SignupError};
use crate::notify::{Kind, Notifier, Scope, VALIDATION_HIDE_UNITS};
use crate::view::ViewState;
use tracing::{error, info};

pub const FETCH_FAILED: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister participant";
pub const VALIDATION_MESSAGE: &str = "Please provide an email and select an activity.";

/// Drives every user-initiated mutation through the three-phase optimistic
/// protocol: speculative view update, network call, reconciliation.
///
/// All mutations go through `&mut self`, so two mutations on one controller
/// can never interleave; the `submit_enabled` flag still mirrors the submit
/// control's disabled window for observers.
pub struct MutationController {
    pub client: DirectoryClient,
    pub view: ViewState,
    pub notices: Notifier,
    pub submit_enabled: bool,
}

impl MutationController {
    pub fn new(client: DirectoryClient) -> Self {
        Self::with_notifier(client, Notifier::new())
    }

    pub fn with_notifier(client: DirectoryClient, notices: Notifier) -> Self {
        Self {
            client,
            view: ViewState::new(),
            notices,
            submit_enabled: true,
        }
    }

    /// Fetch a fresh directory snapshot and rebuild the view from it. On
    /// fetch failure the previously rendered view is left untouched; only
    /// a global load-failure notice is shown.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.client.fetch_directory().await {
            Ok(directory) => {
                self.view.render(&directory);
                Ok(())
            }
            Err(err) => {
                error!("failed to fetch activities: {err}");
                self.notices
                    .notify(Scope::Global, Kind::Error, FETCH_FAILED)
                    .await;
                Err(err)
            }
        }
    }

    /// One signup attempt: validate, speculate, call, reconcile.
    pub async fn signup(&mut self, email: &str, activity: &str) -> Result<(), SignupError> {
        let email = email.trim();
        if email.is_empty() || activity.is_empty() {
            self.notices
                .notify_for(
                    Scope::Global,
                    Kind::Error,
                    VALIDATION_MESSAGE,
                    VALIDATION_HIDE_UNITS,
                )
                .await;
            return Err(SignupError::Validation("missing email or activity"));
        }

        self.submit_enabled = false;

        // The card must exist before we can speculate on it. A failed
        // refresh just means no optimistic update and a global notice scope.
        if self.view.card(activity).is_none() {
            let _ = self.refresh().await;
        }

        let speculation = self
            .view
            .card_mut(activity)
            .map(|card| card.speculate_signup(email));

        let scope = if self.view.card(activity).is_some() {
            Scope::Activity(activity.to_string())
        } else {
            Scope::Global
        };

        let outcome = match self.client.signup(activity, email).await {
            Ok(message) => {
                info!("signed up {email} for {activity}");
                self.notices.notify(scope, Kind::Success, message).await;
                // The authoritative snapshot supersedes the pending row.
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                error!("signup of {email} for {activity} failed: {err}");
                if let (Some(previous), Some(card)) = (speculation, self.view.card_mut(activity)) {
                    card.rollback_signup(email, previous);
                }
                let text = err.detail_or(SIGNUP_FAILED).to_string();
                self.notices.notify(scope, Kind::Error, text).await;
                Err(err.into())
            }
        };

        self.submit_enabled = true;
        outcome
    }

    /// One unregister attempt for a rendered row. No eager view change:
    /// the row stays visible with its control disabled until resolution.
    pub async fn unregister(&mut self, activity: &str, email: &str) -> Result<String, ClientError> {
        if let Some(row) = self.view.card_mut(activity).and_then(|card| card.row_mut(email)) {
            row.enabled = false;
        }

        let scope = Scope::Activity(activity.to_string());
        match self.client.unregister(activity, email).await {
            Ok(message) => {
                info!("unregistered {email} from {activity}");
                self.notices
                    .notify(scope, Kind::Success, message.clone())
                    .await;
                let _ = self.refresh().await;
                Ok(message)
            }
            Err(err) => {
                error!("unregister of {email} from {activity} failed: {err}");
                let text = err.detail_or(UNREGISTER_FAILED).to_string();
                self.notices.notify(scope, Kind::Error, text).await;
                if let Some(row) = self.view.card_mut(activity).and_then(|card| card.row_mut(email))
                {
                    row.enabled = true;
                }
                Err(err)
            }
        }
    }
}
