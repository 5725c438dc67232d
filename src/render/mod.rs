mod text;
#[cfg(test)]
mod tests;

use clap::ValueEnum;
use serde::Serialize;

use crate::engine::{DashboardConfig, DashboardSnapshot};
use crate::models::Section;

pub const TITLE: &str = "Transaction Dashboard";
pub const SUBSET_NOTE: &str = "A subset of the transactions is used to reduce compute costs";
pub const MODEL_PLACEHOLDER: &str = "Model will be integrated here soon. More on the model in the Documentation.";

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json
}

#[derive(Serialize)]
struct SectionView<'a> {
    section: &'static str,
    title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot: Option<&'a DashboardSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<&'a str>
}

/// Renders one dashboard section.
///
/// `snapshot` is only read for the filterable sections; a missing snapshot renders as an
/// empty one would.
///
/// # Errors
/// Returns `serde_json::Error` if JSON encoding fails. Text rendering cannot fail.
pub fn render(
    format: OutputFormat,
    section: Section,
    snapshot: Option<&DashboardSnapshot>,
    config: &DashboardConfig
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(text::render(section, snapshot, config)),
        OutputFormat::Json => {
            let view = SectionView {
                section: section.id(),
                title: section.title(),
                snapshot: snapshot.filter(|_| section.is_filterable()),
                message: (section == Section::Model).then_some(MODEL_PLACEHOLDER),
                document: (section == Section::Documentation).then_some(config.documentation_path.as_str())
            };

            serde_json::to_string_pretty(&view)
        }
    }
}
