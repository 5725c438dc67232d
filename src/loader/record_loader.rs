use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use csv::{ReaderBuilder, Trim};
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{info, warn};

use crate::loader::errors::LoadError;
use crate::loader::{sample, RecordSource};
use crate::models::{Dataset, TransactionRecord};

/// Fetches and parses the record source once per session.
///
/// Parsing runs on a blocking task that streams validated records through a bounded channel
/// to the collector; rows that fail validation are logged and dropped.
pub struct RecordLoader {
    backpressure: usize,
    timeout: Duration
}

impl RecordLoader {
    pub fn new() -> Self {
        Self {
            backpressure: 256,
            timeout: Duration::from_secs(30)
        }
    }

    /// Loads every valid record from `source`.
    ///
    /// # Errors
    /// Returns `LoadError` if the file cannot be opened, the request fails or the header row is
    /// unreadable. Individual bad rows are not errors.
    pub async fn run(&self, source: &RecordSource) -> Result<Dataset, LoadError> {
        let (sender, receiver) = mpsc::channel::<TransactionRecord>(self.backpressure);

        let reader_handle = match source {
            RecordSource::Sample => {
                let records = sample::records();
                info!("Loaded {} sample records", records.len());
                return Ok(Dataset::new(records));
            }
            RecordSource::File(path) => self.spawn_file_reader(path.clone(), sender),
            RecordSource::Http(url) => {
                let body = self.fetch(url).await?;
                spawn_blocking(move || read_rows(body.as_bytes(), sender))
            }
        };

        let records = collect(receiver).await;

        reader_handle.await??;

        info!("Loaded {} records from {source}", records.len());

        Ok(Dataset::new(records))
    }

    fn spawn_file_reader(&self, path: PathBuf, sender: mpsc::Sender<TransactionRecord>) -> JoinHandle<Result<(), LoadError>> {
        spawn_blocking(move || {
            let file = open(&path)?;
            read_rows(BufReader::new(file), sender)
        })
    }

    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|error| LoadError::http(url, error))?;

        let response = client.get(url).send().await.map_err(|error| LoadError::http(url, error))?;

        if !response.status().is_success() {
            return Err(LoadError::Status { url: url.to_string(), status: response.status() });
        }

        response.text().await.map_err(|error| LoadError::http(url, error))
    }
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|error| LoadError::open(path.to_path_buf(), error))
}

fn read_rows<R: Read>(input: R, sender: mpsc::Sender<TransactionRecord>) -> Result<(), LoadError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();

    for (index, result) in reader.records().enumerate() {
        let row = index + 1;

        let values = match result {
            Ok(values) => values,
            Err(error) => {
                warn!("CSV read error at row [{row}]: {error}");
                continue;
            }
        };

        match TransactionRecord::from_row(row, &headers, &values) {
            Ok(record) => {
                if sender.blocking_send(record).is_err() {
                    break;
                }
            }
            Err(error) => {
                warn!("Dropping row: {error}");
            }
        }
    }

    Ok(())
}

async fn collect(mut receiver: mpsc::Receiver<TransactionRecord>) -> Vec<TransactionRecord> {
    let mut records = Vec::new();

    while let Some(record) = receiver.recv().await {
        records.push(record);
    }

    records
}
