use link_engine::{HtmlWizard, PwWizard, WizardKey, WizardStore};

/// Wizard progress of every user and chat, one store per wizard.
///
/// A user is in at most one wizard per chat: starting one discards the other.
#[derive(Debug, Default)]
pub struct Wizards {
    pub pw: WizardStore<PwWizard>,
    pub html: WizardStore<HtmlWizard>,
}

impl Wizards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_pw(&self, key: WizardKey, state: PwWizard) {
        self.html.cancel(key);
        self.pw.begin(key, state);
    }

    pub fn begin_html(&self, key: WizardKey, state: HtmlWizard) {
        self.pw.cancel(key);
        self.html.begin(key, state);
    }

    /// Discards any wizard under `key`. Returns true when one was in progress.
    pub fn cancel(&self, key: WizardKey) -> bool {
        let pw = self.pw.cancel(key);
        let html = self.html.cancel(key);
        pw || html
    }

    pub fn is_active(&self, key: WizardKey) -> bool {
        self.pw.is_active(key) || self.html.is_active(key)
    }
}
