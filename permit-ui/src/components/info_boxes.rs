//! Highlight boxes for the landing page feature and "other ways" rows.

use super::icon::{Icon, IconKind};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct IconBoxProps {
    pub icon: IconKind,
    pub children: Element,
}

/// Light box with a leading icon and bold text.
#[component]
pub fn IconBox(props: IconBoxProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; padding: 16px; border-radius: 8px; background: #E8F1FB; color: #1A3A5F;",
            div {
                style: "display: flex; gap: 16px; align-items: center; height: 100%;",
                Icon { kind: props.icon, size: 32 }
                p { style: "margin: 0; font-weight: bold;", {props.children} }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct BareBoxProps {
    /// Step number shown in the circle
    pub n: String,
    pub children: Element,
}

/// Light box with a numbered circle.
#[component]
pub fn BareBox(props: BareBoxProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; padding: 16px; border-radius: 8px; background: #E8F1FB; color: #1F4E79;",
            div {
                style: "display: flex; gap: 24px; align-items: center; height: 100%;",
                div {
                    style: "display: flex; align-items: center; justify-content: center; min-width: 35px; height: 35px; border-radius: 50%; background: #1F4E79; color: white; font-size: 20px; font-weight: bold;",
                    "{props.n}"
                }
                div { style: "font-weight: bold; text-align: left;", {props.children} }
            }
        }
    }
}
