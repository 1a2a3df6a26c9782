//! In-memory jurisdiction catalog implementing both collaborator traits.
//!
//! The catalog is loaded from a JSON document (typically embedded with
//! `include_str!` by the consuming crate):
//!
//! ```json
//! { "jurisdictions": [
//!     { "id": "1", "name": "Springfield", "qualifier": "City", "slug": "springfield",
//!       "reverseQualifiedName": "Springfield, City of", "qualifiedName": "City of Springfield",
//!       "enabled": true, "addresses": ["123 Main St"] }
//! ] }
//! ```
//!
//! Like the HTTP client, it is cheaply cloneable via `Rc` and meant for a
//! single thread.

use crate::collaborator::{Geocoder, JurisdictionStore, LookupResult};
use crate::error::DocumentError;
use crate::jurisdiction::{AddressOption, Jurisdiction, JurisdictionPage};
use futures::future::{ready, FutureExt, LocalBoxFuture};
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    #[serde(flatten)]
    jurisdiction: Jurisdiction,
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    addresses: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    jurisdictions: Vec<CatalogEntry>,
}

#[derive(Debug, Default)]
struct Catalog {
    entries: Vec<CatalogEntry>,
    registered: Vec<Jurisdiction>,
}

fn normalize(address: &str) -> String {
    address.trim().to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryJurisdictions {
    catalog: Rc<RefCell<Catalog>>,
}

impl InMemoryJurisdictions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load catalog entries from JSON, appending to what is already loaded.
    ///
    /// Entries that fail validation are skipped with a warning. Returns the
    /// number of entries loaded.
    pub fn load_json(&self, json: &str) -> Result<usize, DocumentError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let mut catalog = self.catalog.borrow_mut();
        let mut loaded = 0;
        for entry in document.jurisdictions {
            if let Err(e) = entry.jurisdiction.validate() {
                log::warn!("skipping catalog entry {:?}: {}", entry.jurisdiction.id, e);
                continue;
            }
            catalog.entries.push(entry);
            loaded += 1;
        }
        log::info!("loaded {} jurisdictions into catalog", loaded);
        Ok(loaded)
    }

    pub fn len(&self) -> usize {
        self.catalog.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Jurisdictions registered through [`JurisdictionStore::add_jurisdiction`].
    pub fn registered(&self) -> Vec<Jurisdiction> {
        self.catalog.borrow().registered.clone()
    }

    fn geocode(&self, address: &str) -> Option<Jurisdiction> {
        let needle = normalize(address);
        if needle.is_empty() {
            return None;
        }
        self.catalog
            .borrow()
            .entries
            .iter()
            .find(|entry| entry.addresses.iter().any(|a| normalize(a) == needle))
            .map(|entry| entry.jurisdiction.clone())
    }

    fn site_options(&self, query: &str) -> Vec<AddressOption> {
        let needle = normalize(query);
        if needle.is_empty() {
            return Vec::new();
        }
        self.catalog
            .borrow()
            .entries
            .iter()
            .flat_map(|entry| entry.addresses.iter())
            .filter(|a| normalize(a).contains(&needle))
            .map(|a| AddressOption {
                label: a.clone(),
                value: a.clone(),
            })
            .collect()
    }

    fn enabled_page(&self, page_size: usize) -> JurisdictionPage {
        let page_size = page_size.max(1);
        let mut enabled: Vec<Jurisdiction> = self
            .catalog
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| entry.jurisdiction.clone())
            .collect();
        enabled.sort_by(|a, b| a.name.cmp(&b.name));

        let total_pages = enabled.len().div_ceil(page_size) as u32;
        enabled.truncate(page_size);
        JurisdictionPage {
            jurisdictions: enabled,
            current_page: 1,
            total_pages,
        }
    }

    fn search(&self, query: &str) -> Vec<Jurisdiction> {
        let needle = normalize(query);
        let mut matches: Vec<Jurisdiction> = self
            .catalog
            .borrow()
            .entries
            .iter()
            .map(|entry| &entry.jurisdiction)
            .filter(|j| {
                needle.is_empty()
                    || j.name.to_lowercase().contains(&needle)
                    || j.qualified_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.picker_label().cmp(b.picker_label()));
        matches
    }
}

impl Geocoder for InMemoryJurisdictions {
    fn fetch_geocoded_jurisdiction(
        &self,
        address: &str,
    ) -> LocalBoxFuture<'static, LookupResult<Option<Jurisdiction>>> {
        ready(Ok(self.geocode(address))).boxed_local()
    }

    fn fetch_site_options(
        &self,
        query: &str,
    ) -> LocalBoxFuture<'static, LookupResult<Vec<AddressOption>>> {
        ready(Ok(self.site_options(query))).boxed_local()
    }
}

impl JurisdictionStore for InMemoryJurisdictions {
    fn add_jurisdiction(&self, jurisdiction: Jurisdiction) {
        let mut catalog = self.catalog.borrow_mut();
        catalog.registered.retain(|j| j.id != jurisdiction.id);
        catalog.registered.push(jurisdiction);
    }

    fn search_enabled_jurisdictions(
        &self,
        page_size: usize,
    ) -> LocalBoxFuture<'static, LookupResult<JurisdictionPage>> {
        ready(Ok(self.enabled_page(page_size))).boxed_local()
    }

    fn search_jurisdictions(
        &self,
        query: &str,
    ) -> LocalBoxFuture<'static, LookupResult<Vec<Jurisdiction>>> {
        ready(Ok(self.search(query))).boxed_local()
    }
}
