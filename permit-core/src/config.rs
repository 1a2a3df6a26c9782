//! Site configuration for the landing page.

use crate::error::DocumentError;
use serde::{Deserialize, Serialize};

/// Default page size of the available jurisdictions panel.
pub const DEFAULT_ENABLED_PAGE_SIZE: usize = 12;

fn default_page_size() -> usize {
    DEFAULT_ENABLED_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Overrides `site.contactEmail` from the locale when set.
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default = "default_page_size")]
    pub enabled_jurisdictions_page_size: usize,
    /// Requirement template linked from the "view template" box.
    #[serde(default)]
    pub small_scale_requirement_template_id: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: None,
            enabled_jurisdictions_page_size: DEFAULT_ENABLED_PAGE_SIZE,
            small_scale_requirement_template_id: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Link target of the "view template" box, if a template is configured.
    pub fn template_path(&self) -> Option<String> {
        self.small_scale_requirement_template_id
            .as_ref()
            .map(|id| format!("/requirement-templates/{}", id))
    }
}
