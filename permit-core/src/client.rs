//! HTTP collaborator backed by the permit application's JSON API.
//!
//! Endpoints:
//! - `GET  /api/geocoder/jurisdiction?site_id=..` -> `{"data": Jurisdiction | null}` (404 = no match)
//! - `GET  /api/geocoder/site_options?address=..` -> `{"data": [AddressOption]}`
//! - `POST /api/jurisdictions/search`             -> `{"data": [Jurisdiction], "meta": {..}}`
//!
//! `add_jurisdiction` only records into a client-side registry; the server
//! already knows every jurisdiction it can return.

use crate::collaborator::{Geocoder, JurisdictionStore, LookupResult};
use crate::error::LookupError;
use crate::jurisdiction::{AddressOption, Jurisdiction, JurisdictionPage};
use futures::future::{FutureExt, LocalBoxFuture};
use log::{debug, warn};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    current_page: u32,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    data: Vec<Jurisdiction>,
    #[serde(default)]
    meta: PageMeta,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    page: u32,
    per_page: usize,
    filters: SearchFilters,
}

/// Client for the permit API, cheaply cloneable.
#[derive(Debug, Clone)]
pub struct PermitApiClient {
    client: Client,
    base_url: String,
    registry: Rc<RefCell<Vec<Jurisdiction>>>,
}

impl PermitApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            registry: Rc::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Jurisdictions registered through [`JurisdictionStore::add_jurisdiction`].
    pub fn registered(&self) -> Vec<Jurisdiction> {
        self.registry.borrow().clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn search(
        client: Client,
        url: String,
        query: String,
        per_page: usize,
        enabled: Option<bool>,
    ) -> LookupResult<SearchEnvelope> {
        let body = SearchRequest {
            query: &query,
            page: 1,
            per_page,
            filters: SearchFilters { enabled },
        };
        let response = client.post(&url).json(&body).send().await?;
        let envelope: SearchEnvelope = read_json(response).await?;
        Ok(envelope)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> LookupResult<T> {
    let status = response.status();
    if !status.is_success() {
        warn!("permit API answered {} for {}", status, response.url());
        return Err(LookupError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| LookupError::InvalidPayload(e.to_string()))
}

fn valid_only(jurisdictions: Vec<Jurisdiction>) -> Vec<Jurisdiction> {
    jurisdictions
        .into_iter()
        .filter(|j| match j.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("dropping jurisdiction {:?} from search results: {}", j.id, e);
                false
            }
        })
        .collect()
}

impl Geocoder for PermitApiClient {
    fn fetch_geocoded_jurisdiction(
        &self,
        address: &str,
    ) -> LocalBoxFuture<'static, LookupResult<Option<Jurisdiction>>> {
        let request = self
            .client
            .get(self.url("/api/geocoder/jurisdiction"))
            .query(&[("site_id", address)]);
        async move {
            let response = request.send().await?;
            if response.status() == StatusCode::NOT_FOUND {
                debug!("geocoder found no jurisdiction (404)");
                return Ok(None);
            }
            let envelope: DataEnvelope<Option<Jurisdiction>> = read_json(response).await?;
            match envelope.data {
                Some(jurisdiction) => {
                    jurisdiction.validate()?;
                    Ok(Some(jurisdiction))
                }
                None => Ok(None),
            }
        }
        .boxed_local()
    }

    fn fetch_site_options(
        &self,
        query: &str,
    ) -> LocalBoxFuture<'static, LookupResult<Vec<AddressOption>>> {
        let request = self
            .client
            .get(self.url("/api/geocoder/site_options"))
            .query(&[("address", query)]);
        async move {
            let response = request.send().await?;
            let envelope: DataEnvelope<Vec<AddressOption>> = read_json(response).await?;
            Ok(envelope.data)
        }
        .boxed_local()
    }
}

impl JurisdictionStore for PermitApiClient {
    fn add_jurisdiction(&self, jurisdiction: Jurisdiction) {
        let mut registry = self.registry.borrow_mut();
        registry.retain(|j| j.id != jurisdiction.id);
        registry.push(jurisdiction);
    }

    fn search_enabled_jurisdictions(
        &self,
        page_size: usize,
    ) -> LocalBoxFuture<'static, LookupResult<JurisdictionPage>> {
        let search = Self::search(
            self.client.clone(),
            self.url("/api/jurisdictions/search"),
            String::new(),
            page_size.max(1),
            Some(true),
        );
        async move {
            let envelope = search.await?;
            Ok(JurisdictionPage {
                jurisdictions: valid_only(envelope.data),
                current_page: envelope.meta.current_page.max(1),
                total_pages: envelope.meta.total_pages,
            })
        }
        .boxed_local()
    }

    fn search_jurisdictions(
        &self,
        query: &str,
    ) -> LocalBoxFuture<'static, LookupResult<Vec<Jurisdiction>>> {
        let search = Self::search(
            self.client.clone(),
            self.url("/api/jurisdictions/search"),
            query.to_string(),
            crate::config::DEFAULT_ENABLED_PAGE_SIZE,
            None,
        );
        async move { Ok(valid_only(search.await?.data)) }.boxed_local()
    }
}
