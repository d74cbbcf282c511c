//! Worked pricing examples against the bundled sample catalog.
//!
//! `fixtures/catalog.yml` carries three promotions:
//!
//! - "Martes de 1/4": 2 x 1/4 Kilo for 4500, Tuesdays, in store only
//! - "Semana del Kilo": 10% off 1 Kilo, 2024-05-06 to 2024-05-13, any channel
//! - "Pack Delivery 3x2": 5200 off every 3 x 1/2 Kilo, delivery only
//!
//! 2024-05-07 is a Tuesday inside the "Semana del Kilo" window.

use std::path::PathBuf;

use jiff::civil::{Date, date};
use rusty_money::iso;
use testresult::TestResult;

use sundae::prelude::*;

const TUESDAY: Date = date(2024, 5, 7);

fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::load(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/catalog.yml"))
}

fn quote<'p>(
    catalog: &'p Catalog,
    on: Date,
    presentation: u64,
    quantity: u32,
    channel: Channel,
) -> PricingResult<'p, 'static> {
    let engine = PricingEngine::new(FixedClock::new(on), catalog.currency());

    engine.compute_price(
        catalog.presentation(PresentationId(presentation)),
        catalog.promotions(),
        quantity,
        channel,
    )
}

#[test]
fn sample_catalog_loads() -> TestResult {
    let catalog = catalog()?;

    assert_eq!(catalog.currency(), iso::ARS);
    assert_eq!(catalog.presentations().len(), 6);
    assert_eq!(catalog.promotions().len(), 3);

    Ok(())
}

#[test]
fn tuesday_quarter_kilo_pairs_keep_the_odd_unit_at_list_price() -> TestResult {
    let catalog = catalog()?;

    let result = quote(&catalog, TUESDAY, 3, 5, Channel::Local);

    assert_eq!(result.base_total.to_minor_units(), 1_250_000);
    assert_eq!(result.total.to_minor_units(), 1_150_000);
    assert_eq!(
        result.applied.map(|promotion| promotion.name.as_str()),
        Some("Martes de 1/4")
    );

    Ok(())
}

#[test]
fn kilo_week_takes_ten_percent_off_every_unit() -> TestResult {
    let catalog = catalog()?;

    let result = quote(&catalog, TUESDAY, 1, 3, Channel::Local);

    assert_eq!(result.base_total.to_minor_units(), 2_400_000);
    assert_eq!(result.total.to_minor_units(), 2_160_000);
    assert_eq!(
        result.applied.map(|promotion| promotion.name.as_str()),
        Some("Semana del Kilo")
    );

    Ok(())
}

#[test]
fn delivery_three_for_two_on_half_kilos() -> TestResult {
    let catalog = catalog()?;

    let result = quote(&catalog, TUESDAY, 2, 3, Channel::PedidosYa);

    assert_eq!(result.base_total.to_minor_units(), 1_560_000);
    assert_eq!(result.total.to_minor_units(), 1_040_000);
    assert_eq!(
        result.applied.map(|promotion| promotion.name.as_str()),
        Some("Pack Delivery 3x2")
    );

    Ok(())
}

#[test]
fn zero_quantity_is_free_and_unpromoted() -> TestResult {
    let catalog = catalog()?;

    for presentation in 1..=6 {
        for channel in [Channel::Local, Channel::PedidosYa] {
            let result = quote(&catalog, TUESDAY, presentation, 0, channel);

            assert_eq!(result.base_total.to_minor_units(), 0);
            assert_eq!(result.total.to_minor_units(), 0);
            assert!(result.applied.is_none());
        }
    }

    Ok(())
}

#[test]
fn tuesday_pairs_do_not_apply_on_delivery_or_other_days() -> TestResult {
    let catalog = catalog()?;

    let delivery = quote(&catalog, TUESDAY, 3, 4, Channel::PedidosYa);
    assert!(delivery.applied.is_none());
    assert_eq!(delivery.total.to_minor_units(), 1_200_000);

    let wednesday = quote(&catalog, date(2024, 5, 8), 3, 4, Channel::Local);
    assert!(wednesday.applied.is_none());
    assert_eq!(wednesday.total.to_minor_units(), 1_000_000);

    Ok(())
}

#[test]
fn kilo_week_ends_after_its_last_day() -> TestResult {
    let catalog = catalog()?;

    let last_day = quote(&catalog, date(2024, 5, 13), 1, 1, Channel::PedidosYa);
    assert_eq!(last_day.total.to_minor_units(), 855_000);

    let after = quote(&catalog, date(2024, 5, 14), 1, 1, Channel::PedidosYa);
    assert!(after.applied.is_none());
    assert_eq!(after.total.to_minor_units(), 950_000);

    Ok(())
}

#[test]
fn unknown_presentation_prices_to_zero() -> TestResult {
    let catalog = catalog()?;

    let result = quote(&catalog, TUESDAY, 42, 3, Channel::Local);

    assert_eq!(result, PricingResult::zero(iso::ARS));

    Ok(())
}

#[test]
fn priced_line_becomes_a_sale_row() -> TestResult {
    let catalog = catalog()?;
    let presentation = catalog
        .presentation(PresentationId(2))
        .ok_or("missing 1/2 Kilo")?;

    let result = quote(&catalog, TUESDAY, 2, 3, Channel::PedidosYa);
    let sale = NewSale::from_pricing(
        presentation,
        Channel::PedidosYa,
        &result,
        PaymentMethod::Cash,
        jiff::Timestamp::UNIX_EPOCH,
    )?;

    assert_eq!(sale.total, 10_400);
    assert_eq!(sale.price_base, 3467);
    assert_eq!(sale.presentation_name, "1/2 Kilo");

    Ok(())
}

#[test]
fn quote_receipt_renders() -> TestResult {
    let catalog = catalog()?;
    let presentation = catalog
        .presentation(PresentationId(3))
        .ok_or("missing 1/4 Kilo")?;
    let result = quote(&catalog, TUESDAY, 3, 5, Channel::Local);

    let mut out = Vec::new();
    write_quote(&mut out, presentation, Channel::Local, &result)?;
    let text = String::from_utf8(out)?;

    assert!(text.contains("Martes de 1/4"), "missing promotion");
    assert!(text.contains("Savings:"), "missing savings line");

    Ok(())
}
