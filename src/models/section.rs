use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::models::errors::UnknownSection;

/// One tab of the dashboard.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    FraudInsights,
    Transactions,
    Model,
    Documentation
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::FraudInsights,
        Section::Transactions,
        Section::Model,
        Section::Documentation
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Section::FraudInsights => "fraud",
            Section::Transactions => "transactions",
            Section::Model => "model",
            Section::Documentation => "documentation"
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Section::FraudInsights => "Fraud Insights",
            Section::Transactions => "Transactions",
            Section::Model => "Model",
            Section::Documentation => "Documentation"
        }
    }

    /// Whether the section is driven by the date-range filter.
    pub const fn is_filterable(self) -> bool {
        matches!(self, Section::FraudInsights | Section::Transactions)
    }

    /// Resolves a URL-style path such as `/transactions` by its first segment.
    ///
    /// Returns `Ok(None)` when the path has no segments.
    pub fn from_path(path: &str) -> Result<Option<Section>, UnknownSection> {
        match path.split('/').find(|segment| !segment.is_empty()) {
            Some(segment) => segment.parse().map(Some),
            None => Ok(None)
        }
    }
}

impl Display for Section {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        //NOTE: `dashboard` was the landing section id before the tabs were split
        if value == "dashboard" {
            return Ok(Section::FraudInsights);
        }

        Section::ALL.into_iter()
            .find(|section| section.id() == value)
            .ok_or_else(|| UnknownSection(value.to_string()))
    }
}
