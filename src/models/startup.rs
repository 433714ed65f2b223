//! Startup resource model matching the frontend StartupResource interface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

closed_enum! {
    /// Kind of support a startup resource offers.
    StartupCategory {
        Funding => "Funding",
        Incubator => "Incubator",
        Accelerator => "Accelerator",
        Mentorship => "Mentorship",
        Legal => "Legal",
        Technical => "Technical",
        Guide => "Guide",
    }
}

/// A program, fund or guide for founders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StartupResource {
    pub id: String,
    pub title: String,
    pub category: StartupCategory,
    pub description: String,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: NaiveDate,
}

impl Record for StartupResource {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> String {
        self.title.clone()
    }

    fn lead_text(&self) -> &str {
        &self.description
    }
}
