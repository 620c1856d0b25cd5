//! Integration tests for writing offer files.

use std::fs;

use listing_model::{CsvDialect, Row, output_header};
use csv::ReaderBuilder;
use listing_output::{OutputError, render_rows, write_rows};
use tempfile::TempDir;

fn row(values: &[&str]) -> Row {
    values.iter().copied().map(String::from).collect()
}

fn offer_rows() -> Vec<Row> {
    vec![
        output_header(),
        row(&[
            "Widget",
            "http://x.com?id=SKU1",
            "1000.00",
            "03.04.2020",
            "see 3.4.2020",
        ]),
        row(&[
            "Kid's kettle",
            "http://y.com?id=SKU2",
            "",
            "",
            "no date",
        ]),
    ]
}

#[test]
fn writes_offer_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.csv");

    let summary = write_rows(&path, &offer_rows(), &CsvDialect::output()).unwrap();

    let written = fs::read(&path).unwrap();
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.bytes, written.len());
    assert_eq!(summary.replaced_chars, 0);
    insta::assert_snapshot!(String::from_utf8(written).unwrap(), @r###"
    'name'|'offerurl'|'price'|'published'|'description'
    'Widget'|'http://x.com?id=SKU1'|'1000.00'|'03.04.2020'|'see 3.4.2020'
    'Kid\'s kettle'|'http://y.com?id=SKU2'|''|''|'no date'
    "###);
}

#[test]
fn writes_latin1_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.csv");
    let rows = vec![row(&["Crème brûlée", "Łódź"])];

    let summary = write_rows(&path, &rows, &CsvDialect::output()).unwrap();

    let written = fs::read(&path).unwrap();
    assert_eq!(written, b"'Cr\xE8me br\xFBl\xE9e'|'?\xF3d?'\n");
    assert_eq!(summary.replaced_chars, 2);
}

#[test]
fn replaces_characters_outside_latin1() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.csv");
    let rows = vec![row(&["Cœur", "12,50 €", "a — b"])];

    let summary = write_rows(&path, &rows, &CsvDialect::output()).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"'C?ur'|'12,50 ?'|'a ? b'\n");
    assert_eq!(summary.replaced_chars, 3);
}

#[test]
fn rendered_rows_read_back_with_output_dialect() {
    let dialect = CsvDialect::output();
    let rows = vec![
        row(&["C:\\dir\\", "x"]),
        row(&["it's", "back\\slash 'quoted'", ""]),
        row(&["trailing\\", "a|b"]),
    ];

    let text = render_rows(&rows, &dialect).unwrap();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(dialect.delimiter)
        .quote(dialect.quote)
        .escape(Some(dialect.escape))
        .double_quote(false)
        .from_reader(text.as_bytes());
    let parsed: Vec<Row> = reader
        .records()
        .map(|record| record.unwrap().iter().map(String::from).collect())
        .collect();

    assert_eq!(parsed, rows);
}

#[test]
fn overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.csv");
    fs::write(&path, "old content that is longer than the new one\n").unwrap();

    write_rows(&path, &[row(&["x"])], &CsvDialect::output()).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"'x'\n");
}

#[test]
fn missing_directory_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("result.csv");

    let err = write_rows(&path, &offer_rows(), &CsvDialect::output()).unwrap_err();

    assert!(matches!(err, OutputError::FileWrite { .. }));
    assert!(err.to_string().contains("result.csv"));
}
