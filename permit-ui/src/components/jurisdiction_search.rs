//! Jurisdiction search: the address field, the resolver and its result panel.
//!
//! The component owns one `AddressWatcher` (and through it one
//! `JurisdictionResolver`) for its lifetime. An observer mirrors every
//! resolver state change into `AppState::resolution`; an effect feeds the
//! address signal to the watcher and spawns the resulting lookup.

use super::address_select::AddressSelect;
use super::jurisdiction_select::JurisdictionSelect;
use super::resolution_panel::ResolutionPanel;
use crate::state::{AppState, Services};
use dioxus::prelude::*;
use permit_core::resolution::ResolutionObserver;
use permit_core::view::ResolutionView;
use permit_core::{
    AddressSelection, AddressWatcher, Jurisdiction, JurisdictionResolver, ResolutionState,
};
use std::rc::Rc;

/// DOM id of the search section, used as a scroll target.
pub const SEARCH_SECTION_ID: &str = "jurisdiction-search";

/// Writes resolver states into a signal.
struct SignalObserver(Signal<ResolutionState>);

impl ResolutionObserver for SignalObserver {
    fn on_state_change(&self, state: &ResolutionState) {
        let mut signal = self.0;
        signal.set(state.clone());
    }
}

#[component]
pub fn JurisdictionSearch() -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<Services>();

    let watcher = use_hook(|| {
        let resolver =
            JurisdictionResolver::new(services.geocoder.clone(), services.store.clone());
        Rc::new(AddressWatcher::new(resolver))
    });

    let subscription = use_hook({
        let watcher = watcher.clone();
        move || {
            watcher
                .resolver()
                .subscribe(Rc::new(SignalObserver(state.resolution)))
        }
    });

    use_drop({
        let watcher = watcher.clone();
        move || {
            watcher.resolver().unsubscribe(subscription);
        }
    });

    // Input watcher: every change of the address field may start a lookup
    use_effect({
        let watcher = watcher.clone();
        move || {
            let selection = (state.site)();
            if let Some(pending) = watcher.observe(selection) {
                spawn(async move {
                    let outcome = pending.await;
                    log::debug!("Jurisdiction resolution finished: {:?}", outcome);
                });
            }
        }
    });

    let on_manual_select = {
        let watcher = watcher.clone();
        move |choice: Option<Jurisdiction>| {
            if let Err(e) = watcher.resolver().select_manual(choice) {
                log::warn!("Ignoring manual jurisdiction pick: {}", e);
            }
        }
    };

    let view = ResolutionView::from_state(&state.resolution.read());
    let heading = services.t("landing.where");
    let find_your_auth = services.t("landing.findYourAuth");

    rsx! {
        div {
            id: SEARCH_SECTION_ID,
            style: "display: flex; flex-wrap: wrap; gap: 24px; width: 100%;",
            div {
                style: "flex: 1; min-width: 280px; display: flex; flex-direction: column; gap: 24px; padding: 24px; border-radius: 6px; background: white;",
                div {
                    h2 { style: "margin: 0 0 8px 0; border-bottom: 4px solid #FCBA19; display: inline-block;", "{heading}" }
                    p { style: "margin: 0;", "{find_your_auth}" }
                }
                AddressSelect {
                    value: (state.site)(),
                    on_change: move |selection: Option<AddressSelection>| state.site.set(selection),
                }
                if view.manual_picker {
                    JurisdictionSelect {
                        selected: view.picker_selection.clone(),
                        on_select: on_manual_select,
                    }
                }
            }
            div {
                style: "flex: 1; min-width: 280px;",
                ResolutionPanel { panel: view.panel.clone() }
            }
        }
    }
}
