//! Scholarship model matching the frontend Scholarship interface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

closed_enum! {
    /// Study level a scholarship funds.
    ScholarshipLevel {
        Undergraduate => "Undergraduate",
        Graduate => "Graduate",
        Doctoral => "Doctoral",
        Postdoctoral => "Postdoctoral",
    }
}

closed_enum! {
    /// How much of the study cost a scholarship covers.
    FundingStatus {
        FullyFunded => "Fully Funded",
        PartiallyFunded => "Partially Funded",
    }
}

/// A scholarship or fellowship open to engineering students.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub country: String,
    pub level: ScholarshipLevel,
    #[serde(default)]
    pub disciplines: Vec<String>,
    pub amount: String,
    pub deadline: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub eligibility: Vec<String>,
    pub application_url: String,
    pub funded: FundingStatus,
}

impl Record for Scholarship {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> String {
        self.name.clone()
    }

    fn lead_text(&self) -> &str {
        &self.description
    }
}
