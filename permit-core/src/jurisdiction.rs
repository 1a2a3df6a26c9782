//! Jurisdiction records and the address values that resolve to them.
//!
//! All structs use camelCase keys on the wire so payloads from the permit
//! API deserialize without renaming.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An administrative authority that issues permits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jurisdiction {
    pub id: String,
    pub name: String,
    /// Display grouping label, e.g. "City" or "Regional District".
    #[serde(default)]
    pub qualifier: String,
    /// Routing key for the jurisdiction detail page.
    pub slug: String,
    /// Label used by the manual picker, e.g. "Springfield, City of".
    #[serde(default)]
    pub reverse_qualified_name: String,
    /// Label used by the available jurisdictions panel, e.g. "City of Springfield".
    #[serde(default)]
    pub qualified_name: String,
}

impl Jurisdiction {
    /// Check the fields the landing page needs to render and link.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.slug.trim().is_empty() {
            return Err(ValidationError::MissingField("slug"));
        }
        Ok(())
    }

    /// Path of the jurisdiction detail page.
    pub fn detail_path(&self) -> String {
        format!("/jurisdictions/{}", self.slug)
    }

    /// Label for the manual picker, falling back to the plain name.
    pub fn picker_label(&self) -> &str {
        if self.reverse_qualified_name.is_empty() {
            &self.name
        } else {
            &self.reverse_qualified_name
        }
    }

    /// Label for listings, falling back to the plain name.
    pub fn listing_label(&self) -> &str {
        if self.qualified_name.is_empty() {
            &self.name
        } else {
            &self.qualified_name
        }
    }
}

/// The value chosen in the address input.
///
/// An absent selection is modelled as `Option::None`; a present selection may
/// still hold an empty string, which is a valid input to the geocoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressSelection(String);

impl AddressSelection {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AddressSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AddressSelection {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AddressSelection {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One suggestion offered by the address input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressOption {
    pub label: String,
    pub value: String,
}

impl AddressOption {
    pub fn selection(&self) -> AddressSelection {
        AddressSelection::new(self.value.clone())
    }
}

/// One page of enabled jurisdictions for the landing page listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionPage {
    pub jurisdictions: Vec<Jurisdiction>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl JurisdictionPage {
    /// True when more jurisdictions exist beyond this page.
    pub fn has_more(&self) -> bool {
        self.total_pages > 1
    }
}

#[cfg(test)]
pub(crate) fn springfield() -> Jurisdiction {
    Jurisdiction {
        id: "1".to_string(),
        name: "Springfield".to_string(),
        qualifier: "City".to_string(),
        slug: "springfield".to_string(),
        reverse_qualified_name: "Springfield, City of".to_string(),
        qualified_name: "City of Springfield".to_string(),
    }
}
