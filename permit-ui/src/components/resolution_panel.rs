//! Right-hand panel of the jurisdiction search: placeholder, spinner or card.

use super::icon::{Icon, IconKind};
use super::loading_spinner::LoadingSpinner;
use crate::state::Services;
use dioxus::prelude::*;
use permit_core::view::ResolutionPanel as Panel;

#[derive(Props, Clone, PartialEq)]
pub struct ResolutionPanelProps {
    pub panel: Panel,
}

#[component]
pub fn ResolutionPanel(props: ResolutionPanelProps) -> Element {
    let services = use_context::<Services>();
    let hint = services.t("landing.reqsVary");
    let learn = services.t("landing.learnRequirements");
    let loading = matches!(props.panel, Panel::Loading);

    match props.panel {
        Panel::Card {
            name,
            qualifier,
            href,
        } => rsx! {
            div {
                class: "jumbo-buttons",
                style: "display: flex; flex-direction: column; gap: 32px; align-items: center; justify-content: center; width: 100%; min-height: 243px; padding: 24px; border-radius: 6px; background: #1F4E79; color: white;",
                p {
                    style: "margin: 0; text-transform: uppercase; font-weight: 300; font-size: 14px;",
                    "{qualifier}"
                }
                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    p {
                        style: "margin: 0; font-size: 24px; font-weight: bold; text-align: center;",
                        "{name}"
                    }
                    span { style: "color: #FCBA19;", Icon { kind: IconKind::CheckCircle, size: 32 } }
                }
                a {
                    href: "{href}",
                    style: "color: white; text-decoration: underline;",
                    "{learn} "
                    Icon { kind: IconKind::CaretRight }
                }
            }
        },
        Panel::Loading | Panel::Placeholder => {
            rsx! {
                div {
                    style: "display: flex; flex-direction: column; gap: 24px; align-items: center; justify-content: center; width: 100%; min-height: 243px; padding: 24px; border-radius: 6px; background: white; color: #606060;",
                    div {
                        style: "height: 50px; display: flex; align-items: center;",
                        if loading {
                            LoadingSpinner {}
                        } else {
                            Icon { kind: IconKind::MapPin, size: 40 }
                        }
                    }
                    p { style: "margin: 0; font-style: italic; text-align: center;", "{hint}" }
                }
            }
        }
    }
}
