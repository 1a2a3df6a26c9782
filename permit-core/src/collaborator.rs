//! Traits for the services the resolver widget talks to.
//!
//! Futures are boxed and `'static` so the traits stay object safe and UI code
//! can hold collaborators as `Rc<dyn _>` inside Dioxus context. Nothing here
//! requires `Send`: everything runs on the single browser thread (or a
//! current-thread runtime natively).

use crate::error::LookupError;
use crate::jurisdiction::{AddressOption, Jurisdiction, JurisdictionPage};
use futures::future::LocalBoxFuture;

/// Result type for collaborator lookups.
pub type LookupResult<T> = Result<T, LookupError>;

/// Turns addresses into jurisdictions.
pub trait Geocoder {
    /// Look up the jurisdiction for an address.
    ///
    /// `Ok(None)` means the service answered but found no jurisdiction.
    fn fetch_geocoded_jurisdiction(
        &self,
        address: &str,
    ) -> LocalBoxFuture<'static, LookupResult<Option<Jurisdiction>>>;

    /// Address suggestions for a partially typed query.
    fn fetch_site_options(&self, query: &str)
        -> LocalBoxFuture<'static, LookupResult<Vec<AddressOption>>>;
}

/// Client-side registry and search over known jurisdictions.
pub trait JurisdictionStore {
    /// Register a jurisdiction picked by the user so other views can find it.
    fn add_jurisdiction(&self, jurisdiction: Jurisdiction);

    /// First page of jurisdictions currently accepting applications.
    fn search_enabled_jurisdictions(
        &self,
        page_size: usize,
    ) -> LocalBoxFuture<'static, LookupResult<JurisdictionPage>>;

    /// Free-text search backing the manual jurisdiction picker.
    fn search_jurisdictions(
        &self,
        query: &str,
    ) -> LocalBoxFuture<'static, LookupResult<Vec<Jurisdiction>>>;
}
