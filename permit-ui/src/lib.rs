//! Shared Dioxus components for the permit landing page.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals, plus the `Services` context
//! - `components`: RSX components (landing screen, jurisdiction search, panels)
//! - `dom`: small browser helpers via `web-sys`

pub mod components;
pub mod dom;
pub mod state;
