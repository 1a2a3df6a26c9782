//! Resolution controller: maps an address selection to a jurisdiction.
//!
//! `JurisdictionResolver` is an explicit state holder. Each call to
//! [`JurisdictionResolver::resolve`] bumps a generation counter and switches
//! to [`ResolutionState::Loading`] immediately; the returned future performs
//! the geocoding lookup and only writes its result if no newer resolution has
//! started in the meantime. Observers are notified on every state change.
//!
//! The resolver is cheaply cloneable (via `Rc`) and intended for a single
//! thread, matching the browser event loop.

use crate::collaborator::{Geocoder, JurisdictionStore};
use crate::error::ResolverError;
use crate::jurisdiction::{AddressSelection, Jurisdiction};
use futures::future::{FutureExt, LocalBoxFuture};
use std::cell::RefCell;
use std::rc::Rc;

/// How a jurisdiction came to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Found by the geocoding lookup.
    Geocoded,
    /// Picked by the user from the manual picker.
    Manual,
}

/// Displayed state of the resolver widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResolutionState {
    /// No address has been looked up yet.
    #[default]
    Idle,
    /// A lookup for the current address is outstanding.
    Loading,
    /// A jurisdiction is known for the current address.
    Resolved {
        jurisdiction: Jurisdiction,
        source: ResolutionSource,
    },
    /// The lookup found nothing (or failed); the user picks a jurisdiction.
    Manual,
}

impl ResolutionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResolutionState::Loading)
    }

    pub fn jurisdiction(&self) -> Option<&Jurisdiction> {
        match self {
            ResolutionState::Resolved { jurisdiction, .. } => Some(jurisdiction),
            _ => None,
        }
    }

    /// The manual picker stays visible after a manual pick so it can be changed.
    pub fn manual_picker_visible(&self) -> bool {
        matches!(
            self,
            ResolutionState::Manual
                | ResolutionState::Resolved {
                    source: ResolutionSource::Manual,
                    ..
                }
        )
    }
}

/// What happened to one resolution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    Resolved,
    NoMatch,
    LookupFailed,
    /// A newer resolution started before this one settled; its result was dropped.
    Superseded,
}

/// Receives every state change of a resolver.
pub trait ResolutionObserver {
    fn on_state_change(&self, state: &ResolutionState);
}

impl<F> ResolutionObserver for F
where
    F: Fn(&ResolutionState),
{
    fn on_state_change(&self, state: &ResolutionState) {
        self(state)
    }
}

/// Handle returned by [`JurisdictionResolver::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct ResolverInner {
    state: ResolutionState,
    generation: u64,
    next_subscription: u64,
    observers: Vec<(SubscriptionId, Rc<dyn ResolutionObserver>)>,
}

/// Drives [`ResolutionState`] from address lookups and manual picks.
#[derive(Clone)]
pub struct JurisdictionResolver {
    geocoder: Rc<dyn Geocoder>,
    store: Rc<dyn JurisdictionStore>,
    inner: Rc<RefCell<ResolverInner>>,
}

impl JurisdictionResolver {
    pub fn new(geocoder: Rc<dyn Geocoder>, store: Rc<dyn JurisdictionStore>) -> Self {
        Self {
            geocoder,
            store,
            inner: Rc::new(RefCell::new(ResolverInner {
                state: ResolutionState::Idle,
                generation: 0,
                next_subscription: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ResolutionState {
        self.inner.borrow().state.clone()
    }

    /// Number of resolutions started so far.
    pub fn generation(&self) -> u64 {
        self.inner.borrow().generation
    }

    pub fn subscribe(&self, observer: Rc<dyn ResolutionObserver>) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.observers.push((id, observer));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.observers.len();
        inner.observers.retain(|(existing, _)| *existing != id);
        inner.observers.len() != before
    }

    /// Start resolving `address`.
    ///
    /// The switch to `Loading` happens before this returns; the lookup itself
    /// runs when the returned future is polled.
    pub fn resolve(&self, address: AddressSelection) -> LocalBoxFuture<'static, ResolveOutcome> {
        let token = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.generation
        };
        log::debug!("resolving jurisdiction for {:?} (generation {})", address.as_str(), token);
        self.set_state(ResolutionState::Loading);

        let lookup = self.geocoder.fetch_geocoded_jurisdiction(address.as_str());
        let resolver = self.clone();
        async move {
            let result = lookup.await;
            if resolver.generation() != token {
                log::debug!(
                    "dropping stale lookup for {:?} (generation {} superseded)",
                    address.as_str(),
                    token
                );
                return ResolveOutcome::Superseded;
            }

            match result {
                Ok(Some(jurisdiction)) => {
                    log::info!(
                        "resolved {:?} to jurisdiction {}",
                        address.as_str(),
                        jurisdiction.slug
                    );
                    resolver.set_state(ResolutionState::Resolved {
                        jurisdiction,
                        source: ResolutionSource::Geocoded,
                    });
                    ResolveOutcome::Resolved
                }
                Ok(None) => {
                    log::info!("no jurisdiction matched {:?}, switching to manual mode", address.as_str());
                    resolver.set_state(ResolutionState::Manual);
                    ResolveOutcome::NoMatch
                }
                Err(e) => {
                    log::warn!(
                        "jurisdiction lookup failed for {:?}: {}; switching to manual mode",
                        address.as_str(),
                        e
                    );
                    resolver.set_state(ResolutionState::Manual);
                    ResolveOutcome::LookupFailed
                }
            }
        }
        .boxed_local()
    }

    /// Apply a pick from the manual picker. `None` clears the pick.
    pub fn select_manual(&self, jurisdiction: Option<Jurisdiction>) -> Result<(), ResolverError> {
        if !self.inner.borrow().state.manual_picker_visible() {
            return Err(ResolverError::NotInManualMode);
        }

        match jurisdiction {
            Some(jurisdiction) => {
                log::info!("jurisdiction {} selected manually", jurisdiction.slug);
                self.store.add_jurisdiction(jurisdiction.clone());
                self.set_state(ResolutionState::Resolved {
                    jurisdiction,
                    source: ResolutionSource::Manual,
                });
            }
            None => {
                log::debug!("manual jurisdiction selection cleared");
                self.set_state(ResolutionState::Manual);
            }
        }
        Ok(())
    }

    fn set_state(&self, state: ResolutionState) {
        let observers: Vec<Rc<dyn ResolutionObserver>> = {
            let mut inner = self.inner.borrow_mut();
            inner.state = state.clone();
            inner.observers.iter().map(|(_, o)| Rc::clone(o)).collect()
        };
        for observer in observers {
            observer.on_state_change(&state);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::collaborator::LookupResult;
    use crate::error::LookupError;
    use crate::jurisdiction::{springfield, AddressOption, JurisdictionPage};
    use futures::channel::oneshot;
    use std::collections::HashMap;

    /// Geocoder whose answers are handed in by the test through oneshot channels.
    #[derive(Default)]
    pub(crate) struct ScriptedGeocoder {
        pending: RefCell<HashMap<String, oneshot::Receiver<LookupResult<Option<Jurisdiction>>>>>,
        pub(crate) calls: RefCell<Vec<String>>,
    }

    impl ScriptedGeocoder {
        pub(crate) fn expect(
            &self,
            address: &str,
        ) -> oneshot::Sender<LookupResult<Option<Jurisdiction>>> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().insert(address.to_string(), rx);
            tx
        }
    }

    impl Geocoder for ScriptedGeocoder {
        fn fetch_geocoded_jurisdiction(
            &self,
            address: &str,
        ) -> LocalBoxFuture<'static, LookupResult<Option<Jurisdiction>>> {
            self.calls.borrow_mut().push(address.to_string());
            let rx = self.pending.borrow_mut().remove(address);
            async move {
                match rx {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(LookupError::Unavailable("dropped".to_string()))),
                    None => Ok(None),
                }
            }
            .boxed_local()
        }

        fn fetch_site_options(
            &self,
            _query: &str,
        ) -> LocalBoxFuture<'static, LookupResult<Vec<AddressOption>>> {
            async { Ok(Vec::new()) }.boxed_local()
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingStore {
        pub(crate) added: RefCell<Vec<Jurisdiction>>,
    }

    impl JurisdictionStore for RecordingStore {
        fn add_jurisdiction(&self, jurisdiction: Jurisdiction) {
            self.added.borrow_mut().push(jurisdiction);
        }

        fn search_enabled_jurisdictions(
            &self,
            _page_size: usize,
        ) -> LocalBoxFuture<'static, LookupResult<JurisdictionPage>> {
            async { Ok(JurisdictionPage::default()) }.boxed_local()
        }

        fn search_jurisdictions(
            &self,
            _query: &str,
        ) -> LocalBoxFuture<'static, LookupResult<Vec<Jurisdiction>>> {
            async { Ok(Vec::new()) }.boxed_local()
        }
    }

    pub(crate) fn resolver() -> (JurisdictionResolver, Rc<ScriptedGeocoder>, Rc<RecordingStore>) {
        let geocoder = Rc::new(ScriptedGeocoder::default());
        let store = Rc::new(RecordingStore::default());
        let resolver = JurisdictionResolver::new(geocoder.clone(), store.clone());
        (resolver, geocoder, store)
    }

    fn shelbyville() -> Jurisdiction {
        Jurisdiction {
            id: "7".to_string(),
            name: "Shelbyville".to_string(),
            qualifier: "Town".to_string(),
            slug: "shelbyville".to_string(),
            reverse_qualified_name: "Shelbyville, Town of".to_string(),
            qualified_name: "Town of Shelbyville".to_string(),
        }
    }

    #[test]
    fn starts_idle() {
        let (resolver, _, _) = resolver();
        assert_eq!(resolver.state(), ResolutionState::Idle);
        assert_eq!(resolver.generation(), 0);
    }

    #[tokio::test]
    async fn match_resolves_to_geocoded_jurisdiction() {
        let (resolver, geocoder, _) = resolver();
        let tx = geocoder.expect("123 Main St");

        let pending = resolver.resolve("123 Main St".into());
        assert_eq!(resolver.state(), ResolutionState::Loading);

        tx.send(Ok(Some(springfield()))).unwrap();
        assert_eq!(pending.await, ResolveOutcome::Resolved);
        assert_eq!(
            resolver.state(),
            ResolutionState::Resolved {
                jurisdiction: springfield(),
                source: ResolutionSource::Geocoded,
            }
        );
        assert!(!resolver.state().manual_picker_visible());
    }

    #[tokio::test]
    async fn no_match_enters_manual_mode() {
        let (resolver, geocoder, _) = resolver();
        let tx = geocoder.expect("999 Nowhere");
        let pending = resolver.resolve("999 Nowhere".into());
        tx.send(Ok(None)).unwrap();

        assert_eq!(pending.await, ResolveOutcome::NoMatch);
        assert_eq!(resolver.state(), ResolutionState::Manual);
        assert!(resolver.state().manual_picker_visible());
    }

    #[tokio::test]
    async fn lookup_failure_is_shown_as_manual_mode() {
        let (resolver, geocoder, _) = resolver();
        let tx = geocoder.expect("1 Error Way");
        let pending = resolver.resolve("1 Error Way".into());
        tx.send(Err(LookupError::Status(502))).unwrap();

        assert_eq!(pending.await, ResolveOutcome::LookupFailed);
        assert_eq!(resolver.state(), ResolutionState::Manual);
    }

    #[tokio::test]
    async fn empty_address_is_looked_up() {
        let (resolver, geocoder, _) = resolver();
        let outcome = resolver.resolve("".into()).await;

        assert_eq!(outcome, ResolveOutcome::NoMatch);
        assert_eq!(geocoder.calls.borrow().as_slice(), [""]);
        assert_eq!(resolver.state(), ResolutionState::Manual);
    }

    #[tokio::test]
    async fn stale_lookup_does_not_overwrite_newer_result() {
        let (resolver, geocoder, _) = resolver();
        let tx1 = geocoder.expect("a1");
        let tx2 = geocoder.expect("a2");

        let first = resolver.resolve("a1".into());
        let second = resolver.resolve("a2".into());

        tx2.send(Ok(Some(shelbyville()))).unwrap();
        assert_eq!(second.await, ResolveOutcome::Resolved);

        tx1.send(Ok(Some(springfield()))).unwrap();
        assert_eq!(first.await, ResolveOutcome::Superseded);

        assert_eq!(resolver.state().jurisdiction(), Some(&shelbyville()));
    }

    #[tokio::test]
    async fn stale_lookup_settling_first_leaves_loading_in_place() {
        let (resolver, geocoder, _) = resolver();
        let tx1 = geocoder.expect("a1");
        let tx2 = geocoder.expect("a2");

        let first = resolver.resolve("a1".into());
        let second = resolver.resolve("a2".into());

        tx1.send(Ok(None)).unwrap();
        assert_eq!(first.await, ResolveOutcome::Superseded);
        assert_eq!(resolver.state(), ResolutionState::Loading);

        tx2.send(Ok(Some(springfield()))).unwrap();
        assert_eq!(second.await, ResolveOutcome::Resolved);
        assert_eq!(resolver.state().jurisdiction(), Some(&springfield()));
    }

    #[tokio::test]
    async fn manual_pick_registers_once_and_resolves() {
        let (resolver, geocoder, store) = resolver();
        let tx = geocoder.expect("999 Nowhere");
        let pending = resolver.resolve("999 Nowhere".into());
        tx.send(Ok(None)).unwrap();
        pending.await;

        resolver.select_manual(Some(shelbyville())).unwrap();

        let added = store.added.borrow();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].id, "7");
        assert_eq!(
            resolver.state(),
            ResolutionState::Resolved {
                jurisdiction: shelbyville(),
                source: ResolutionSource::Manual,
            }
        );
        assert!(resolver.state().manual_picker_visible());
    }

    #[tokio::test]
    async fn clearing_manual_pick_drops_resolved_jurisdiction() {
        let (resolver, _, store) = resolver();
        resolver.resolve("nowhere".into()).await;
        resolver.select_manual(Some(shelbyville())).unwrap();

        resolver.select_manual(None).unwrap();

        assert_eq!(resolver.state(), ResolutionState::Manual);
        assert!(resolver.state().jurisdiction().is_none());
        assert_eq!(store.added.borrow().len(), 1);
    }

    #[test]
    fn manual_pick_outside_manual_mode_is_rejected() {
        let (resolver, _, store) = resolver();
        assert_eq!(
            resolver.select_manual(Some(shelbyville())),
            Err(ResolverError::NotInManualMode)
        );
        assert_eq!(resolver.state(), ResolutionState::Idle);
        assert!(store.added.borrow().is_empty());
    }

    #[tokio::test]
    async fn new_address_after_manual_pick_restarts_resolution() {
        let (resolver, geocoder, _) = resolver();
        resolver.resolve("nowhere".into()).await;
        resolver.select_manual(Some(shelbyville())).unwrap();

        let tx = geocoder.expect("123 Main St");
        let pending = resolver.resolve("123 Main St".into());
        assert_eq!(resolver.state(), ResolutionState::Loading);
        tx.send(Ok(Some(springfield()))).unwrap();
        pending.await;

        assert_eq!(resolver.state().jurisdiction(), Some(&springfield()));
        assert!(!resolver.state().manual_picker_visible());
    }

    #[tokio::test]
    async fn observers_see_each_transition() {
        let (resolver, geocoder, _) = resolver();
        let seen: Rc<RefCell<Vec<ResolutionState>>> = Rc::default();
        let sink = seen.clone();
        resolver.subscribe(Rc::new(move |state: &ResolutionState| {
            sink.borrow_mut().push(state.clone())
        }));

        let tx = geocoder.expect("123 Main St");
        let pending = resolver.resolve("123 Main St".into());
        tx.send(Ok(Some(springfield()))).unwrap();
        pending.await;

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ResolutionState::Loading);
        assert_eq!(seen[1].jurisdiction(), Some(&springfield()));
    }

    #[tokio::test]
    async fn observer_may_read_resolver_during_notification() {
        let (resolver, _, _) = resolver();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let reader = resolver.clone();
        resolver.subscribe(Rc::new(move |_: &ResolutionState| {
            sink.borrow_mut().push(reader.state())
        }));

        resolver.resolve("anywhere".into()).await;

        assert_eq!(
            seen.borrow().as_slice(),
            [ResolutionState::Loading, ResolutionState::Manual]
        );
    }

    #[tokio::test]
    async fn unsubscribed_observer_is_not_notified() {
        let (resolver, _, _) = resolver();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = resolver.subscribe(Rc::new(move |_: &ResolutionState| {
            *sink.borrow_mut() += 1
        }));

        assert!(resolver.unsubscribe(id));
        assert!(!resolver.unsubscribe(id));
        resolver.resolve("anywhere".into()).await;

        assert_eq!(*count.borrow(), 0);
    }
}
