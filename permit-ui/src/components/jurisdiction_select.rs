//! Manual jurisdiction picker shown when geocoding finds nothing.

use crate::state::Services;
use dioxus::prelude::*;
use permit_core::Jurisdiction;

#[derive(Props, Clone, PartialEq)]
pub struct JurisdictionSelectProps {
    /// Label of the jurisdiction currently picked, if any
    pub selected: Option<String>,
    /// Called with the picked jurisdiction, or `None` when cleared
    pub on_select: EventHandler<Option<Jurisdiction>>,
}

#[component]
pub fn JurisdictionSelect(props: JurisdictionSelectProps) -> Element {
    let services = use_context::<Services>();
    let mut filter = use_signal(String::new);
    let mut results = use_signal(Vec::<Jurisdiction>::new);
    let on_select = props.on_select;

    // Reload options whenever the filter text changes
    let store = services.store.clone();
    use_effect(move || {
        let search = store.search_jurisdictions(&filter());
        spawn(async move {
            match search.await {
                Ok(found) => results.set(found),
                Err(e) => {
                    log::warn!("Failed to search jurisdictions: {}", e);
                    results.set(Vec::new());
                }
            }
        });
    });

    let on_change = move |evt: Event<FormData>| {
        let id = evt.value();
        if id.is_empty() {
            on_select.call(None);
            return;
        }
        let picked = results.read().iter().find(|j| j.id == id).cloned();
        match picked {
            Some(jurisdiction) => on_select.call(Some(jurisdiction)),
            None => log::warn!("Picked jurisdiction {} is no longer listed", id),
        }
    };

    let title = services.t("jurisdiction.index.title");
    let selected = props.selected.unwrap_or_default();
    let choices: Vec<(String, String)> = results
        .read()
        .iter()
        .map(|j| (j.id.clone(), j.picker_label().to_string()))
        .collect();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; width: 100%;",
            label {
                r#for: "jurisdiction-select",
                style: "font-weight: bold;",
                "{title}"
            }
            input {
                r#type: "search",
                aria_label: "Filter jurisdictions",
                placeholder: "Filter by name",
                value: "{filter}",
                style: "padding: 6px;",
                oninput: move |evt: Event<FormData>| filter.set(evt.value()),
            }
            select {
                id: "jurisdiction-select",
                style: "padding: 6px;",
                onchange: on_change,
                option { value: "", selected: selected.is_empty(), "" }
                for (id, label) in choices {
                    option {
                        key: "{id}",
                        value: "{id}",
                        selected: label == selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
