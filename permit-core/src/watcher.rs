//! Input watcher: turns address field changes into resolutions.

use crate::jurisdiction::AddressSelection;
use crate::resolution::{JurisdictionResolver, ResolveOutcome};
use futures::future::LocalBoxFuture;
use std::cell::RefCell;

/// Watches the address field and starts a resolution when it changes to a
/// present value.
///
/// Reactive frameworks re-run effects for reasons unrelated to the address,
/// so the watcher remembers the last value it saw and ignores repeats.
pub struct AddressWatcher {
    resolver: JurisdictionResolver,
    last: RefCell<Option<AddressSelection>>,
}

impl AddressWatcher {
    pub fn new(resolver: JurisdictionResolver) -> Self {
        Self {
            resolver,
            last: RefCell::new(None),
        }
    }

    pub fn resolver(&self) -> &JurisdictionResolver {
        &self.resolver
    }

    /// Feed the current field value.
    ///
    /// Returns the pending resolution when one was started. The caller must
    /// drive it to completion (e.g. `spawn` it on the UI runtime).
    pub fn observe(
        &self,
        selection: Option<AddressSelection>,
    ) -> Option<LocalBoxFuture<'static, ResolveOutcome>> {
        {
            let mut last = self.last.borrow_mut();
            if *last == selection {
                return None;
            }
            last.clone_from(&selection);
        }

        let address = selection?;
        Some(self.resolver.resolve(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jurisdiction::springfield;
    use crate::resolution::tests::resolver;
    use crate::resolution::ResolutionState;

    #[test]
    fn absent_value_triggers_nothing() {
        let (resolver, geocoder, _) = resolver();
        let watcher = AddressWatcher::new(resolver.clone());

        assert!(watcher.observe(None).is_none());
        assert!(geocoder.calls.borrow().is_empty());
        assert_eq!(resolver.state(), ResolutionState::Idle);
    }

    #[tokio::test]
    async fn present_value_resolves() {
        let (resolver, geocoder, _) = resolver();
        let watcher = AddressWatcher::new(resolver.clone());
        let tx = geocoder.expect("123 Main St");

        let pending = watcher.observe(Some("123 Main St".into())).unwrap();
        assert_eq!(resolver.state(), ResolutionState::Loading);
        tx.send(Ok(Some(springfield()))).unwrap();
        assert_eq!(pending.await, ResolveOutcome::Resolved);
    }

    #[tokio::test]
    async fn empty_string_is_a_change() {
        let (resolver, geocoder, _) = resolver();
        let watcher = AddressWatcher::new(resolver.clone());

        let pending = watcher.observe(Some("".into())).unwrap();
        assert_eq!(pending.await, ResolveOutcome::NoMatch);
        assert_eq!(geocoder.calls.borrow().len(), 1);
        assert_eq!(resolver.state(), ResolutionState::Manual);
    }

    #[tokio::test]
    async fn repeated_value_is_not_a_change() {
        let (resolver, geocoder, _) = resolver();
        let watcher = AddressWatcher::new(resolver);

        watcher.observe(Some("a1".into())).unwrap().await;
        assert!(watcher.observe(Some("a1".into())).is_none());
        assert_eq!(geocoder.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn clearing_the_field_keeps_current_state() {
        let (resolver, geocoder, _) = resolver();
        let watcher = AddressWatcher::new(resolver.clone());
        let tx = geocoder.expect("123 Main St");
        let pending = watcher.observe(Some("123 Main St".into())).unwrap();
        tx.send(Ok(Some(springfield()))).unwrap();
        pending.await;

        assert!(watcher.observe(None).is_none());
        assert_eq!(resolver.state().jurisdiction(), Some(&springfield()));

        // Picking the same address again after clearing counts as a change.
        assert!(watcher.observe(Some("123 Main St".into())).is_some());
        assert_eq!(geocoder.calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn second_address_supersedes_first() {
        let (resolver, geocoder, _) = resolver();
        let watcher = AddressWatcher::new(resolver.clone());
        let tx1 = geocoder.expect("a1");
        let tx2 = geocoder.expect("a2");

        let first = watcher.observe(Some("a1".into())).unwrap();
        let second = watcher.observe(Some("a2".into())).unwrap();
        tx2.send(Ok(None)).unwrap();
        second.await;
        tx1.send(Ok(Some(springfield()))).unwrap();

        assert_eq!(first.await, ResolveOutcome::Superseded);
        assert_eq!(resolver.state(), ResolutionState::Manual);
    }
}
