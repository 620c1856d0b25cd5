//! Integration tests for reading product files from disk.

use std::fs;

use listing_ingest::{IngestError, read_rows};
use listing_model::CsvDialect;
use tempfile::TempDir;

const PRODUCTS: &str = "\"Product Name\";\"Link\";\"SKU\";\"Selling-Price\";\"description\"\n\
\"Widget\";\"http://x.com\";\"SKU1\";\"1,000.00\";\"see 3.4.2020\"\n\
\"Gadget; deluxe\";\"http://y.com\";\"SKU2\";\"15\";\"Posted on 12-31-2016\"\n";

#[test]
fn reads_header_and_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.csv");
    fs::write(&path, PRODUCTS).unwrap();

    let rows = read_rows(&path, &CsvDialect::input()).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        vec!["Product Name", "Link", "SKU", "Selling-Price", "description"]
    );
    assert_eq!(rows[2][0], "Gadget; deluxe");
    assert_eq!(rows[2][4], "Posted on 12-31-2016");
}

#[test]
fn reads_file_with_utf8_bom() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.csv");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("Name;Link\nZażółć;http://z.pl\n".as_bytes());
    fs::write(&path, bytes).unwrap();

    let rows = read_rows(&path, &CsvDialect::input()).unwrap();

    assert_eq!(rows[0][0], "Name");
    assert_eq!(rows[1][0], "Zażółć");
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.csv");

    let err = read_rows(&path, &CsvDialect::input()).unwrap_err();

    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.to_string().contains("missing.csv"));
}

#[test]
fn directory_is_unreadable() {
    let dir = TempDir::new().unwrap();

    let err = read_rows(dir.path(), &CsvDialect::input()).unwrap_err();

    assert!(matches!(err, IngestError::FileRead { .. }));
}

#[test]
fn utf16_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.csv");
    let mut bytes = vec![0xFE, 0xFF];
    for unit in "a;b".encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    fs::write(&path, bytes).unwrap();

    let err = read_rows(&path, &CsvDialect::input()).unwrap_err();

    assert!(matches!(
        err,
        IngestError::UnsupportedEncoding {
            encoding: "UTF-16BE",
            ..
        }
    ));
}

#[test]
fn empty_file_has_no_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.csv");
    fs::write(&path, "").unwrap();

    let rows = read_rows(&path, &CsvDialect::input()).unwrap();

    assert!(rows.is_empty());
}
