//! Jurisdiction resolution for the permit landing page.
//!
//! This crate provides:
//! - `jurisdiction`: `Jurisdiction`, `AddressSelection` and page types
//! - `collaborator`: object-safe traits for the geocoder and jurisdiction store
//! - `resolution`: the `JurisdictionResolver` state holder and its observers
//! - `watcher`: `AddressWatcher`, which starts resolutions on address changes
//! - `view`: pure view models for the resolver widget and landing panels
//! - `i18n`: translated strings by dotted key
//! - `memory`: a JSON-loaded in-memory catalog implementing both collaborators
//! - `client` (feature `api`): the same collaborators over the permit HTTP API
//!
//! # Usage
//!
//! ```rust
//! use permit_core::memory::InMemoryJurisdictions;
//! use permit_core::resolution::JurisdictionResolver;
//! use permit_core::watcher::AddressWatcher;
//! use std::rc::Rc;
//!
//! let catalog = InMemoryJurisdictions::new();
//! catalog.load_json(r#"{"jurisdictions": [{"id": "1", "name": "Springfield",
//!     "slug": "springfield", "enabled": true, "addresses": ["123 Main St"]}]}"#).unwrap();
//!
//! let resolver = JurisdictionResolver::new(Rc::new(catalog.clone()), Rc::new(catalog));
//! let watcher = AddressWatcher::new(resolver.clone());
//!
//! let pending = watcher.observe(Some("123 Main St".into())).unwrap();
//! assert!(resolver.state().is_loading());
//! futures::executor::block_on(pending);
//! assert_eq!(resolver.state().jurisdiction().unwrap().slug, "springfield");
//! ```

pub mod collaborator;
pub mod config;
pub mod error;
pub mod i18n;
pub mod jurisdiction;
pub mod memory;
pub mod resolution;
pub mod session;
pub mod view;
pub mod watcher;

#[cfg(feature = "api")]
pub mod client;

pub use collaborator::{Geocoder, JurisdictionStore};
pub use error::{LookupError, ResolverError};
pub use jurisdiction::{AddressSelection, Jurisdiction, JurisdictionPage};
pub use resolution::{JurisdictionResolver, ResolutionState, ResolveOutcome};
pub use watcher::AddressWatcher;
