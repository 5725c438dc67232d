
use std::sync::Arc;

use tracing::{debug, error};

use crate::engine::DashboardConfig;
use crate::models::Section;
use crate::storage::Storage;

/// Store key holding the id of the last section shown.
pub const ACTIVE_SECTION_KEY: &str = "activeSection";

/// Everything a run needs besides the data: which section is active, the dashboard
/// configuration and the session store the selection is written back to.
pub struct AppState {
    section: Section,
    config: DashboardConfig,
    store: Arc<dyn Storage>
}

impl AppState {
    /// Picks the active section and records it in `store`.
    ///
    /// The path argument wins, then the saved selection, then `Section::FraudInsights`.
    /// An unknown id is logged and skipped rather than failing the run.
    pub fn initialize(path: Option<&str>, store: Arc<dyn Storage>, config: DashboardConfig) -> Self {
        let from_path = path.and_then(|path| {
            Section::from_path(path).inspect_err(|unknown| error!("{unknown}")).ok().flatten()
        });

        let from_store = || {
            let saved = store.load(ACTIVE_SECTION_KEY)?;
            saved.parse::<Section>().inspect_err(|unknown| error!("{unknown}")).ok()
        };

        let section = from_path.or_else(from_store).unwrap_or(Section::FraudInsights);

        let mut state = Self { section, config, store };
        state.select(section);
        state
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Switches to `section` and saves it as the active one.
    pub fn select(&mut self, section: Section) {
        debug!("Active section: {section}");

        self.section = section;
        self.store.save(ACTIVE_SECTION_KEY, section.id().to_string());
    }
}
