//! `resolve`: run one address through the watcher and resolver.

use anyhow::anyhow;
use log::{info, warn};
use permit_core::client::PermitApiClient;
use permit_core::view::{ResolutionPanel, ResolutionView};
use permit_core::{
    AddressSelection, AddressWatcher, Jurisdiction, JurisdictionResolver, JurisdictionStore,
    ResolutionState, ResolveOutcome,
};
use std::rc::Rc;

/// Result of resolving one address.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveReport {
    pub outcome: ResolveOutcome,
    /// Final resolver state, after any manual fallback pick
    pub state: ResolutionState,
    /// Jurisdictions registered with the store by a manual pick
    pub registered: Vec<Jurisdiction>,
}

/// Resolve `address`; in manual mode, optionally pick the first jurisdiction
/// matching `fallback`.
pub async fn resolve_address(
    client: &PermitApiClient,
    address: &str,
    fallback: Option<&str>,
) -> anyhow::Result<ResolveReport> {
    let resolver = JurisdictionResolver::new(Rc::new(client.clone()), Rc::new(client.clone()));
    let watcher = AddressWatcher::new(resolver.clone());

    let pending = watcher
        .observe(Some(AddressSelection::new(address)))
        .ok_or_else(|| anyhow!("address {:?} did not start a lookup", address))?;
    let outcome = pending.await;
    info!("Lookup for {:?} finished with {:?}", address, outcome);

    if let (true, Some(query)) = (resolver.state().manual_picker_visible(), fallback) {
        let candidates = client.search_jurisdictions(query).await?;
        match candidates.into_iter().next() {
            Some(jurisdiction) => resolver.select_manual(Some(jurisdiction))?,
            None => warn!("No jurisdiction matches fallback search {:?}", query),
        }
    }

    Ok(ResolveReport {
        outcome,
        state: resolver.state(),
        registered: client.registered(),
    })
}

pub async fn run_resolve(
    client: &PermitApiClient,
    address: &str,
    fallback: Option<&str>,
) -> anyhow::Result<()> {
    let report = resolve_address(client, address, fallback).await?;
    let view = ResolutionView::from_state(&report.state);

    match view.panel {
        ResolutionPanel::Card {
            name,
            qualifier,
            href,
        } => {
            println!("{} ({})", name, qualifier);
            println!("{}{}", client.base_url(), href);
        }
        ResolutionPanel::Loading | ResolutionPanel::Placeholder => {
            println!("No jurisdiction found for {:?}.", address);
            println!("Pick one manually with --fallback <NAME>.");
        }
    }
    if report.outcome == ResolveOutcome::LookupFailed {
        warn!("The geocoder could not be reached; the result above may be incomplete");
    }
    Ok(())
}
