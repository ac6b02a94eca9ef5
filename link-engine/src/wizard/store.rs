use dashmap::DashMap;
use linkbot_core::Message;

/// Identifies one wizard: a user in a chat.
///
/// Updates from one chat arrive in order, so a state taken out of the store for the duration of a
/// step (including a document download) is never looked up by another update of the same wizard.
/// The same user in a different chat gets an independent wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WizardKey {
    pub user_id: i64,
    pub chat_id: i64,
}

impl WizardKey {
    pub fn new(user_id: i64, chat_id: i64) -> Self {
        Self { user_id, chat_id }
    }

    pub fn of(message: &Message) -> Self {
        Self::new(message.user.id, message.chat.id)
    }
}

/// Wizard progress keyed by [`WizardKey`]; at most one state per user and chat.
///
/// Handlers `take` the state, advance it, and `put` it back unless the wizard finished, so a
/// cancelled or completed flow leaves nothing behind.
#[derive(Debug)]
pub struct WizardStore<S> {
    states: DashMap<WizardKey, S>,
}

impl<S> Default for WizardStore<S> {
    fn default() -> Self {
        Self {
            states: DashMap::new(),
        }
    }
}

impl<S> WizardStore<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) a wizard. Returns true when an earlier one was replaced.
    pub fn begin(&self, key: WizardKey, state: S) -> bool {
        self.states.insert(key, state).is_some()
    }

    pub fn take(&self, key: WizardKey) -> Option<S> {
        self.states.remove(&key).map(|(_, state)| state)
    }

    pub fn put(&self, key: WizardKey, state: S) {
        self.states.insert(key, state);
    }

    /// Discards the wizard. Returns true when one was in progress.
    pub fn cancel(&self, key: WizardKey) -> bool {
        self.states.remove(&key).is_some()
    }

    pub fn is_active(&self, key: WizardKey) -> bool {
        self.states.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
