use super::errors::LoadError;
use super::{sample, RecordLoader, RecordSource};

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::spawn;

const HEADER: &str = "id,amount,type,country,creation_date,last_activity_date,is_fraud";

fn create_temporary_csv(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "{HEADER}")?;

    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

/// Serves exactly one HTTP response on a local port and returns its base URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;

    spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut buffer = [0u8; 4096];
            let _ = stream.read(&mut buffer).await;

            let response = format!(
                "{status_line}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );

            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    Ok(format!("http://{address}/transactions.csv"))
}

#[test]
fn test_record_source_parsing() {
    assert_eq!(RecordSource::from("sample"), RecordSource::Sample);
    assert_eq!(RecordSource::from("https://example.com/t.csv"), RecordSource::Http("https://example.com/t.csv".to_string()));
    assert_eq!(RecordSource::from("http://localhost/t.csv"), RecordSource::Http("http://localhost/t.csv".to_string()));
    assert_eq!(RecordSource::from("samples/transactions.csv"), RecordSource::File(PathBuf::from("samples/transactions.csv")));
}

#[test]
fn test_only_built_in_sample_spans_whole_dataset() {
    assert!(RecordSource::Sample.spans_whole_dataset());
    assert!(!RecordSource::from("samples/transactions.csv").spans_whole_dataset());
    assert!(!RecordSource::from("https://example.com/t.csv").spans_whole_dataset());
}

#[tokio::test]
async fn test_loader_reads_valid_csv_file() -> Result<()> {
    let file = create_temporary_csv(&[
        "1,100.5,PAYMENT,USA,2024-08-01,2024-08-30T10:00:00,False",
        "2,200,TRANSFER,UK,2024-08-02,2024-08-30T11:30:00,True",
    ])?;

    let dataset = RecordLoader::new().run(&RecordSource::File(file.path().to_path_buf())).await?;

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records()[0].id, "1");
    assert_eq!(dataset.records()[0].amount, 100.5);
    assert!(dataset.records()[1].is_fraud);

    Ok(())
}

#[tokio::test]
async fn test_loader_drops_malformed_rows() -> Result<()> {
    let file = create_temporary_csv(&[
        "1,10,PAYMENT,USA,2024-08-01,2024-08-30T10:00:00,False",
        "2,10,PAYMENT,USA,2024-08-01,,False",
        "3,10,PAYMENT,USA,not-a-date,2024-08-30T10:00:00,False",
        "4,ten,PAYMENT,USA,2024-08-01,2024-08-30T10:00:00,False",
        "5,10,PAYMENT",
        "6,20,CASH_OUT,FR,2024-08-01,2024-08-31T10:00:00,True",
    ])?;

    let dataset = RecordLoader::new().run(&RecordSource::File(file.path().to_path_buf())).await?;
    let ids: Vec<&str> = dataset.records().iter().map(|record| record.id.as_str()).collect();

    assert_eq!(ids, vec!["1", "6"]);

    Ok(())
}

#[tokio::test]
async fn test_loader_reports_missing_file() {
    let result = RecordLoader::new().run(&RecordSource::File(PathBuf::from("missing.csv"))).await;

    assert!(matches!(result, Err(LoadError::Open { .. })));
}

#[tokio::test]
async fn test_loader_returns_built_in_sample() -> Result<()> {
    let dataset = RecordLoader::new().run(&RecordSource::Sample).await?;

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.records(), sample::records().as_slice());

    Ok(())
}

#[test]
fn test_sample_records_match_fixed_dataset() {
    let records = sample::records();

    assert_eq!(records[0].transaction_type, "PAYMENT");
    assert_eq!(records[0].country, "USA");
    assert!(!records[0].is_fraud);
    assert_eq!(records[0].origin_balance_difference(), Some(3398.73));
    assert_eq!(records[1].transaction_type, "TRANSFER");
    assert_eq!(records[1].amount, 50000.0);
    assert!(records[1].is_fraud);
    assert_eq!(records[1].destination_balance_difference(), Some(50000.0));
}

#[tokio::test]
async fn test_loader_fetches_csv_over_http() -> Result<()> {
    let body = "id,amount,type,country,creation_date,last_activity_date,is_fraud\n\
                1,42,PAYMENT,USA,2024-08-01,2024-08-30T10:00:00,True\n";
    let url = serve_once("HTTP/1.1 200 OK", body).await?;

    let dataset = RecordLoader::new().run(&RecordSource::Http(url)).await?;

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].amount, 42.0);
    assert!(dataset.records()[0].is_fraud);

    Ok(())
}

#[tokio::test]
async fn test_loader_rejects_unsuccessful_http_status() -> Result<()> {
    let url = serve_once("HTTP/1.1 404 Not Found", "missing").await?;

    let result = RecordLoader::new().run(&RecordSource::Http(url)).await;

    assert!(matches!(result, Err(LoadError::Status { .. })));

    Ok(())
}
