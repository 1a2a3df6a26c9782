//! Reusable Dioxus RSX components for the permit landing page.

mod address_select;
mod available_jurisdictions;
mod error_display;
mod icon;
mod info_boxes;
mod jurisdiction_search;
mod jurisdiction_select;
mod landing_screen;
mod loading_spinner;
mod resolution_panel;

pub use address_select::AddressSelect;
pub use available_jurisdictions::AvailableJurisdictions;
pub use error_display::ErrorDisplay;
pub use icon::{Icon, IconKind};
pub use info_boxes::{BareBox, IconBox};
pub use jurisdiction_search::{JurisdictionSearch, SEARCH_SECTION_ID};
pub use jurisdiction_select::JurisdictionSelect;
pub use landing_screen::LandingScreen;
pub use loading_spinner::LoadingSpinner;
pub use resolution_panel::ResolutionPanel;
