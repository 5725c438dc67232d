use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const SAMPLE: &str = "sample";

/// Where the session's records come from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RecordSource {
    /// The built-in two-record sample.
    Sample,
    File(PathBuf),
    /// A CSV fetched once with an HTTP GET.
    Http(String)
}

impl RecordSource {
    /// Whether an unbounded view should cover every record instead of the default window.
    ///
    /// The built-in sample is dated well before the default window and would otherwise
    /// render empty.
    pub fn spans_whole_dataset(&self) -> bool {
        matches!(self, RecordSource::Sample)
    }
}

impl From<&str> for RecordSource {
    fn from(value: &str) -> Self {
        let value = value.trim();

        if value == SAMPLE {
            RecordSource::Sample
        } else if value.starts_with("http://") || value.starts_with("https://") {
            RecordSource::Http(value.to_string())
        } else {
            RecordSource::File(PathBuf::from(value))
        }
    }
}

impl Display for RecordSource {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::Sample => formatter.write_str(SAMPLE),
            RecordSource::File(path) => write!(formatter, "{}", path.display()),
            RecordSource::Http(url) => formatter.write_str(url)
        }
    }
}
