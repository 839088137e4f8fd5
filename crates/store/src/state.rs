use serde::{Deserialize, Serialize};
use waitline_api::{AggregateSetting, CharacterId, ProfileAggregate};

/// Lifecycle of the most recent fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// The store envelope: the profile aggregate plus fetch bookkeeping.
///
/// `data` stays `None` until the first successful fetch and keeps its last
/// good value across failed refreshes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileState {
    pub data: Option<ProfileAggregate>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

/// Transition commands. Every mutation of a [`ProfileState`] goes through
/// [`ProfileState::apply`] with one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    // ====== FETCH LIFECYCLE ======
    FetchStarted,
    FetchSucceeded(ProfileAggregate),
    FetchFailed(String),
    StatusReset,

    // ====== OPTIMISTIC UPDATES ======
    SettingToggled {
        character_id: CharacterId,
        setting: AggregateSetting,
        value: bool,
    },
    AllSettingsToggled {
        setting: AggregateSetting,
        value: bool,
    },
}

impl ProfileState {
    /// Applies one transition. Pure state manipulation: no IO, no failure.
    pub fn apply(&mut self, action: StoreAction) {
        match action {
            StoreAction::FetchStarted => {
                // Stale data stays visible while the refresh is in flight.
                self.status = FetchStatus::Loading;
                self.error = None;
            }
            StoreAction::FetchSucceeded(profile) => {
                self.status = FetchStatus::Succeeded;
                self.data = Some(profile);
            }
            StoreAction::FetchFailed(message) => {
                self.status = FetchStatus::Failed;
                self.error = Some(message);
            }
            StoreAction::StatusReset => {
                self.status = FetchStatus::Idle;
            }
            StoreAction::SettingToggled {
                character_id,
                setting,
                value,
            } => {
                let Some(data) = self.data.as_mut() else {
                    return;
                };
                if let Some(character) = data
                    .characters
                    .iter_mut()
                    .find(|c| c.character_id == character_id)
                {
                    character.set_inclusion(setting, value);
                }
                // The active character is a second copy, not a reference;
                // a matching id gets the identical update.
                if let Some(active) = data.active_char.as_mut()
                    && active.character_id == character_id
                {
                    active.set_inclusion(setting, value);
                }
            }
            StoreAction::AllSettingsToggled { setting, value } => {
                let Some(data) = self.data.as_mut() else {
                    return;
                };
                for character in &mut data.characters {
                    character.set_inclusion(setting, value);
                }
                // Bulk means everyone, whether or not the active character
                // also appears in the list.
                if let Some(active) = data.active_char.as_mut() {
                    active.set_inclusion(setting, value);
                }
            }
        }
    }
}
