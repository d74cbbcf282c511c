//! Loading catalogs from disk.

use std::io::Write;

use rusty_money::iso;
use tempfile::NamedTempFile;
use testresult::TestResult;

use sundae::prelude::*;

fn write_catalog(contents: &str) -> Result<NamedTempFile, std::io::Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;

    Ok(file)
}

#[test]
fn loads_storage_encodings() -> TestResult {
    let file = write_catalog(
        r#"
currency: ARS
presentations:
  - id: 7
    name: Vasito
    price_local: 1500
    price_delivery: 1500
promotions:
  - id: 1
    name: Vasito doble
    presentation_id: 7
    min_quantity: 2
    discount_type: percentage
    discount_value: "12.5"
    active_days: "6, 0"
    start_date: ""
    end_date: null
    channel: ""
    is_active: true
"#,
    )?;

    let catalog = Catalog::load(file.path())?;
    let promotion = catalog
        .promotions_for(PresentationId(7))
        .next()
        .ok_or("missing promotion")?;

    assert_eq!(catalog.currency(), iso::ARS);
    assert_eq!(promotion.channel, ChannelScope::All);
    assert!(promotion.is_active);
    assert!(!promotion.schedule.is_date_bounded());
    assert_eq!(promotion.discount.to_string(), "12.5% off");
    assert_eq!(promotion.schedule.to_string(), "Sun, Sat");

    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let result = Catalog::load("/nonexistent/sundae/catalog.yml");

    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn malformed_yaml_is_reported() -> TestResult {
    let file = write_catalog("currency: [ARS\n")?;

    let result = Catalog::load(file.path());

    assert!(matches!(result, Err(CatalogError::Yaml(_))));

    Ok(())
}

#[test]
fn bad_dates_name_the_record() -> TestResult {
    let file = write_catalog(
        r"
currency: ARS
promotions:
  - id: 4
    name: Semana del Kilo
    presentation_id: 1
    discount_type: percentage
    discount_value: 10
    start_date: 2024-13-01
",
    )?;

    let result = Catalog::load(file.path());

    assert!(matches!(
        result,
        Err(CatalogError::Record {
            id: 4,
            source: RecordError::InvalidDate {
                field: "start_date",
                ..
            }
        })
    ));

    Ok(())
}
