//! `jurisdictions`: list the jurisdictions accepting applications.

use permit_core::client::PermitApiClient;
use permit_core::i18n::Translations;
use permit_core::view::available_jurisdictions;
use permit_core::{JurisdictionPage, JurisdictionStore};

pub async fn list_enabled(
    client: &PermitApiClient,
    page_size: usize,
) -> anyhow::Result<JurisdictionPage> {
    let page = client.search_enabled_jurisdictions(page_size).await?;
    log::info!(
        "Fetched {} enabled jurisdictions ({} pages)",
        page.jurisdictions.len(),
        page.total_pages
    );
    Ok(page)
}

pub async fn run_jurisdictions(client: &PermitApiClient, page_size: usize) -> anyhow::Result<()> {
    let translations = Translations::english()?;
    let page = list_enabled(client, page_size).await?;
    let (links, footer_key) = available_jurisdictions(&page);

    println!("{}", translations.t("landing.enabledCommunitiesDescription"));
    for link in links {
        println!("  {:<40} {}{}", link.label, client.base_url(), link.href);
    }
    println!("{}", translations.t(footer_key));
    Ok(())
}
