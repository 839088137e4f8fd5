use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::watch;
use waitline_api::{
    AggregateSetting, ApiConfig, CharacterId, FetchSelector, FetchTarget, ProfileAggregate,
    ProfileClient,
};

use crate::state::{FetchStatus, ProfileState, StoreAction};

/// Owns the profile envelope and serializes every mutation through the
/// action layer. State leaves the store only as clones, via the accessors or
/// the watch channel.
///
/// Cloning the store is cheap; clones share the same envelope.
#[derive(Clone)]
pub struct ProfileStore {
    client: ProfileClient,
    state: Arc<RwLock<ProfileState>>,
    snapshot_tx: Arc<watch::Sender<ProfileState>>,
    fetch_seq: Arc<AtomicU64>,
}

impl ProfileStore {
    pub fn new(client: ProfileClient) -> Self {
        let (snapshot_tx, _) = watch::channel(ProfileState::default());
        Self {
            client,
            state: Arc::new(RwLock::new(ProfileState::default())),
            snapshot_tx: Arc::new(snapshot_tx),
            fetch_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self::new(ProfileClient::new(config))
    }

    /// Fetches the profile selected by `selector` and drives the envelope
    /// through loading into succeeded or failed. Errors never surface here;
    /// they are recorded on the envelope.
    ///
    /// Concurrent fetches are resolved last-request-wins: a resolution that
    /// is no longer the newest is discarded.
    pub async fn fetch(&self, selector: FetchSelector) {
        let target = FetchTarget::from(selector);
        let seq = self.begin_fetch();

        // No lock is held across the request.
        match self.client.fetch_profile(&target).await {
            Ok(profile) => {
                tracing::info!(
                    "Profile fetch resolved with {} characters",
                    profile.characters.len()
                );
                self.resolve_fetch(seq, StoreAction::FetchSucceeded(profile));
            }
            Err(error) => {
                tracing::warn!("Profile fetch failed: {error}");
                self.resolve_fetch(seq, StoreAction::FetchFailed(error.to_string()));
            }
        }
    }

    /// Fetches the session's own profile.
    pub async fn fetch_own(&self) {
        self.fetch(FetchSelector::own()).await;
    }

    /// Puts the status back to idle. Data and error are left as they are.
    pub fn reset_status(&self) {
        self.dispatch(StoreAction::StatusReset);
    }

    /// Optimistically sets one inclusion flag on one character, mirroring
    /// the change onto the active character when the ids match. Unknown ids
    /// and unloaded state are no-ops.
    pub fn toggle_setting(&self, character_id: CharacterId, setting: AggregateSetting, value: bool) {
        self.dispatch(StoreAction::SettingToggled {
            character_id,
            setting,
            value,
        });
    }

    /// Optimistically sets one inclusion flag on every character, the active
    /// character included.
    pub fn bulk_toggle_setting(&self, setting: AggregateSetting, value: bool) {
        self.dispatch(StoreAction::AllSettingsToggled { setting, value });
    }

    /// Name-based variant of [`Self::toggle_setting`] for callers holding a
    /// wire name. Unknown names are ignored.
    pub fn toggle_setting_by_name(&self, character_id: CharacterId, name: &str, value: bool) {
        if let Some(setting) = AggregateSetting::from_name(name) {
            self.toggle_setting(character_id, setting, value);
        } else {
            tracing::debug!("Ignoring unknown aggregate setting {name:?}");
        }
    }

    /// Name-based variant of [`Self::bulk_toggle_setting`].
    pub fn bulk_toggle_setting_by_name(&self, name: &str, value: bool) {
        if let Some(setting) = AggregateSetting::from_name(name) {
            self.bulk_toggle_setting(setting, value);
        } else {
            tracing::debug!("Ignoring unknown aggregate setting {name:?}");
        }
    }

    pub fn data(&self) -> Option<ProfileAggregate> {
        self.read_state().data.clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.read_state().status
    }

    pub fn error(&self) -> Option<String> {
        self.read_state().error.clone()
    }

    pub fn snapshot(&self) -> ProfileState {
        self.read_state().clone()
    }

    /// Subscribes to envelope snapshots, one per applied action.
    pub fn subscribe(&self) -> watch::Receiver<ProfileState> {
        self.snapshot_tx.subscribe()
    }

    fn dispatch(&self, action: StoreAction) {
        let mut state = self.write_state();
        state.apply(action);
        self.snapshot_tx.send_replace(state.clone());
    }

    /// Takes the next fetch ticket and applies the loading transition under
    /// one lock, so no resolution can slip in between.
    fn begin_fetch(&self) -> u64 {
        let mut state = self.write_state();
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        state.apply(StoreAction::FetchStarted);
        self.snapshot_tx.send_replace(state.clone());
        seq
    }

    /// Applies a fetch resolution only while `seq` is still the newest
    /// ticket. A superseded resolution is dropped.
    fn resolve_fetch(&self, seq: u64, action: StoreAction) {
        let mut state = self.write_state();
        if self.fetch_seq.load(Ordering::SeqCst) != seq {
            tracing::debug!("Discarding superseded fetch resolution (ticket {seq})");
            return;
        }
        state.apply(action);
        self.snapshot_tx.send_replace(state.clone());
    }

    // The reducer never panics, so a poisoned lock still holds a consistent
    // envelope.
    fn read_state(&self) -> RwLockReadGuard<'_, ProfileState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ProfileState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
