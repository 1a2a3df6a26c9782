//! Signed-in user as seen by the landing page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Submitter,
    ReviewManager,
    Reviewer,
    SuperAdmin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn is_submitter(&self) -> bool {
        self.role == UserRole::Submitter
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub logged_in: bool,
    pub current_user: Option<CurrentUser>,
}

impl Session {
    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            logged_in: true,
            current_user: Some(user),
        }
    }
}
