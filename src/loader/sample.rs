use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{FieldValue, TransactionRecord};

/// The fixed two-record dataset used when no CSV is supplied.
pub fn records() -> Vec<TransactionRecord> {
    let first = TransactionRecord::new("1", 3398.73, "PAYMENT", "USA", day(2023, 1, 1), day(2023, 7, 8), false);
    let second = TransactionRecord::new("2", 50000.00, "TRANSFER", "UK", day(2022, 6, 15), day(2023, 7, 9), true);

    vec![
        enrich(first, &[
            ("customer_id", text("C001")),
            ("isUnauthorizedOverdraft", number(0.0)),
            ("nameDest", text("DestUser1")),
            ("nameOrig", text("OrigUser1")),
            ("newBalanceDest", number(10000.0)),
            ("newBalanceOrig", number(5000.0)),
            ("oldBalanceDest", number(9000.0)),
            ("oldBalanceOrig", number(8398.73)),
            ("step", number(1.0)),
            ("diffOrig", number(3398.73)),
            ("diffDest", number(1000.0)),
            ("firstname", text("John")),
            ("lastname", text("Doe")),
            ("email", text("john@example.com")),
            ("address", text("123 Main St")),
            ("last_country_logged", text("USA")),
            ("age_group", number(2.0)),
            ("countryOrig", text("US")),
            ("countryOrig_name", text("United States")),
            ("countryLongOrig_long", number(-95.7129)),
            ("countryLatOrig_lat", number(37.0902)),
            ("countryDest", text("CA")),
            ("countryDest_name", text("Canada")),
            ("countryLongDest_long", number(-106.3468)),
            ("countryLatDest_lat", number(56.1304)),
        ]),
        enrich(second, &[
            ("customer_id", text("C002")),
            ("isUnauthorizedOverdraft", number(1.0)),
            ("nameDest", text("DestUser2")),
            ("nameOrig", text("OrigUser2")),
            ("newBalanceDest", number(75000.0)),
            ("newBalanceOrig", number(0.0)),
            ("oldBalanceDest", number(25000.0)),
            ("oldBalanceOrig", number(50000.0)),
            ("step", number(2.0)),
            ("diffOrig", number(50000.0)),
            ("diffDest", number(50000.0)),
            ("firstname", text("Jane")),
            ("lastname", text("Smith")),
            ("email", text("jane@example.com")),
            ("address", text("456 Elm St")),
            ("last_country_logged", text("FR")),
            ("age_group", number(3.0)),
            ("countryOrig", text("GB")),
            ("countryOrig_name", text("United Kingdom")),
            ("countryLongOrig_long", number(-3.4359)),
            ("countryLatOrig_lat", number(55.3781)),
            ("countryDest", text("FR")),
            ("countryDest_name", text("France")),
            ("countryLongDest_long", number(2.2137)),
            ("countryLatDest_lat", number(46.2276)),
        ]),
    ]
}

fn enrich(record: TransactionRecord, fields: &[(&str, FieldValue)]) -> TransactionRecord {
    fields.iter().fold(record, |record, (name, value)| record.with_field(*name, value.clone()))
}

fn day(year: i32, month: u32, day_of_month: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day_of_month)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn number(value: f64) -> FieldValue {
    FieldValue::Number(value)
}

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}
