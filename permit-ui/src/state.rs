//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Collaborators that are not reactive (geocoder,
//! jurisdiction store, translations, site config) travel in `Services`.
//! Child components retrieve both with `use_context`.

use dioxus::prelude::*;
use permit_core::config::SiteConfig;
use permit_core::i18n::Translations;
use permit_core::session::Session;
use permit_core::{AddressSelection, Geocoder, Jurisdiction, JurisdictionStore, ResolutionState};
use std::rc::Rc;

/// Shared reactive state for the landing page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Signed-in user, if any
    pub session: Signal<Session>,
    /// Current value of the address field (None until something is picked)
    pub site: Signal<Option<AddressSelection>>,
    /// Mirror of the resolver state, written by the resolver's observer
    pub resolution: Signal<ResolutionState>,
    /// First page of jurisdictions accepting applications
    pub table_jurisdictions: Signal<Vec<Jurisdiction>>,
    /// Total pages of enabled jurisdictions
    pub total_pages: Signal<u32>,
    /// Error message if the enabled jurisdictions search failed
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new(session: Session) -> Self {
        Self {
            session: Signal::new(session),
            site: Signal::new(None),
            resolution: Signal::new(ResolutionState::Idle),
            table_jurisdictions: Signal::new(Vec::new()),
            total_pages: Signal::new(0),
            error_msg: Signal::new(None),
        }
    }

    pub fn logged_in(&self) -> bool {
        self.session.read().logged_in
    }

    /// True while a geocoding lookup for the current address is outstanding.
    pub fn fetching_jurisdiction(&self) -> bool {
        self.resolution.read().is_loading()
    }
}

/// Non-reactive collaborators shared with every component.
#[derive(Clone)]
pub struct Services {
    pub geocoder: Rc<dyn Geocoder>,
    pub store: Rc<dyn JurisdictionStore>,
    pub translations: Translations,
    pub site_config: SiteConfig,
}

impl Services {
    /// Translated string for `key`.
    pub fn t(&self, key: &str) -> String {
        self.translations.t(key)
    }
}
