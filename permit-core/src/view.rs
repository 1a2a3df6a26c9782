//! View models: what the landing page shows for a given state.
//!
//! These are pure functions of state so the rendering rules can be tested
//! without a DOM. The Dioxus components in `permit-ui` only translate them
//! into markup.

use crate::jurisdiction::{Jurisdiction, JurisdictionPage};
use crate::resolution::ResolutionState;
use crate::session::CurrentUser;

/// The right-hand panel of the resolver widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionPanel {
    /// Placeholder icon plus the "requirements vary" hint.
    Placeholder,
    /// Loading indicator plus the hint.
    Loading,
    /// Resolved jurisdiction card.
    Card {
        name: String,
        qualifier: String,
        href: String,
    },
}

/// Everything the resolver widget renders for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionView {
    pub panel: ResolutionPanel,
    /// Show the manual jurisdiction picker.
    pub manual_picker: bool,
    /// Label preselected in the manual picker.
    pub picker_selection: Option<String>,
}

impl ResolutionView {
    pub fn from_state(state: &ResolutionState) -> Self {
        let panel = match state {
            ResolutionState::Idle | ResolutionState::Manual => ResolutionPanel::Placeholder,
            ResolutionState::Loading => ResolutionPanel::Loading,
            ResolutionState::Resolved { jurisdiction, .. } => ResolutionPanel::Card {
                name: jurisdiction.name.clone(),
                qualifier: jurisdiction.qualifier.clone(),
                href: jurisdiction.detail_path(),
            },
        };
        let manual_picker = state.manual_picker_visible();
        let picker_selection = if manual_picker {
            state
                .jurisdiction()
                .map(|j| j.picker_label().to_string())
        } else {
            None
        };
        Self {
            panel,
            manual_picker,
            picker_selection,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.panel, ResolutionPanel::Card { .. })
    }
}

/// Target and label key of the main call to action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub href: &'static str,
    /// Translation key substituted into `landing.goTo`.
    pub location_key: &'static str,
}

impl CallToAction {
    pub fn for_user(user: Option<&CurrentUser>) -> Self {
        let href = if user.is_some() { "/" } else { "/login" };
        let location_key = match user {
            Some(user) if !user.is_submitter() => "landing.adminPanel",
            _ => "landing.permitApp",
        };
        Self { href, location_key }
    }
}

/// One link in the available jurisdictions panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JurisdictionLink {
    pub id: String,
    pub label: String,
    pub href: String,
}

impl From<&Jurisdiction> for JurisdictionLink {
    fn from(jurisdiction: &Jurisdiction) -> Self {
        Self {
            id: jurisdiction.id.clone(),
            label: jurisdiction.listing_label().to_string(),
            href: jurisdiction.detail_path(),
        }
    }
}

/// Links plus the footer key for the available jurisdictions panel.
pub fn available_jurisdictions(page: &JurisdictionPage) -> (Vec<JurisdictionLink>, &'static str) {
    let links = page.jurisdictions.iter().map(JurisdictionLink::from).collect();
    let footer = if page.has_more() {
        "landing.andMore"
    } else {
        "landing.moreComingSoon"
    };
    (links, footer)
}
