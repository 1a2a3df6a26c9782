//! Panel listing the jurisdictions that currently accept applications.

use super::error_display::ErrorDisplay;
use super::icon::{Icon, IconKind};
use crate::state::{AppState, Services};
use dioxus::prelude::*;
use permit_core::view::available_jurisdictions;
use permit_core::JurisdictionPage;

#[component]
pub fn AvailableJurisdictions() -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<Services>();

    // Load the first page once on mount
    let store = services.store.clone();
    let page_size = services.site_config.enabled_jurisdictions_page_size;
    use_effect(move || {
        let search = store.search_enabled_jurisdictions(page_size);
        spawn(async move {
            match search.await {
                Ok(page) => {
                    log::info!(
                        "Loaded {} enabled jurisdictions ({} pages)",
                        page.jurisdictions.len(),
                        page.total_pages
                    );
                    state.table_jurisdictions.set(page.jurisdictions);
                    state.total_pages.set(page.total_pages);
                }
                Err(e) => {
                    log::error!("Failed to load enabled jurisdictions: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load jurisdictions: {}", e)));
                }
            }
        });
    });

    let page = JurisdictionPage {
        jurisdictions: state.table_jurisdictions.read().clone(),
        current_page: 1,
        total_pages: (state.total_pages)(),
    };
    let (links, footer_key) = available_jurisdictions(&page);
    let footer_style = if page.has_more() {
        "font-weight: bold;"
    } else {
        "font-weight: normal;"
    };
    let description = services.t("landing.enabledCommunitiesDescription");
    let footer = services.t(footer_key);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; padding: 16px; border-radius: 8px; border: 1px solid #2D5CA8; background: #D9EAF7;",
            div {
                style: "display: flex; align-items: flex-start; gap: 8px;",
                span { style: "color: #2D5CA8;", Icon { kind: IconKind::Info, size: 24 } }
                div {
                    style: "display: flex; flex-direction: column; gap: 8px;",
                    p {
                        style: "margin: 0; font-weight: bold;",
                        "{description} "
                        for link in links {
                            span {
                                key: "{link.id}",
                                style: "font-weight: normal; margin-right: 8px;",
                                a { href: "{link.href}", style: "color: black;", "{link.label}" }
                            }
                        }
                        br {}
                        span { style: footer_style, "{footer}" }
                    }
                    if let Some(err) = (state.error_msg)() {
                        ErrorDisplay { message: err }
                    }
                }
            }
        }
    }
}
