//! Loading spinner component.

use dioxus::prelude::*;

/// Simple loading indicator shown while a jurisdiction lookup is outstanding.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            role: "status",
            aria_live: "polite",
            style: "display: flex; justify-content: center; align-items: center; height: 50px; color: #666;",
            "Loading..."
        }
    }
}
