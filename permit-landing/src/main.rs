//! Permit Landing Page
//!
//! Renders the landing page of the permit application, including the
//! "where is your project?" jurisdiction lookup.
//!
//! Data flow:
//! 1. `build.rs` copies `jurisdictions.json` and `site.json` into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On start, the jurisdictions are loaded into an in-memory catalog that
//!    serves as both the geocoder and the jurisdiction store.
//! 4. `LandingScreen` resolves addresses against that catalog.

use dioxus::prelude::*;
use permit_core::config::SiteConfig;
use permit_core::i18n::Translations;
use permit_core::memory::InMemoryJurisdictions;
use permit_core::session::Session;
use permit_ui::components::{ErrorDisplay, LandingScreen};
use permit_ui::state::{AppState, Services};
use std::rc::Rc;

/// Jurisdiction catalog with the addresses each one covers.
const JURISDICTIONS_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/jurisdictions.json"));
/// Site configuration overrides.
const SITE_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/site.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("permit-landing-root"))
        .launch(App);
}

/// Build the collaborators from the embedded documents.
fn load_services() -> Result<Services, String> {
    let translations =
        Translations::english().map_err(|e| format!("Failed to load translations: {}", e))?;

    let site_config = SiteConfig::from_json(SITE_JSON).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed site config: {}", e);
        SiteConfig::default()
    });

    let catalog = InMemoryJurisdictions::new();
    catalog
        .load_json(JURISDICTIONS_JSON)
        .map_err(|e| format!("Failed to load jurisdictions: {}", e))?;

    Ok(Services {
        geocoder: Rc::new(catalog.clone()),
        store: Rc::new(catalog),
        translations,
        site_config,
    })
}

#[component]
fn App() -> Element {
    use_context_provider(|| AppState::new(Session::default()));
    let services = use_hook(|| {
        load_services().inspect_err(|e| log::error!("{}", e))
    });

    match services {
        Ok(services) => rsx! {
            ServicesProvider { services }
        },
        Err(err) => rsx! {
            div {
                style: "padding: 16px;",
                ErrorDisplay { message: err }
            }
        },
    }
}

#[derive(Props, Clone)]
struct ServicesProviderProps {
    services: Services,
}

impl PartialEq for ServicesProviderProps {
    fn eq(&self, _other: &Self) -> bool {
        // Services are created once per app and never replaced.
        true
    }
}

#[component]
fn ServicesProvider(props: ServicesProviderProps) -> Element {
    use_context_provider(|| props.services.clone());
    rsx! {
        LandingScreen {}
    }
}
