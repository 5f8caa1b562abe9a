//! 선형 환산 엔진 회귀 테스트.
use quantity_converter::catalog::{catalog, Language, Unit};
use quantity_converter::conversion::{convert, ConversionError};

fn unit(name: &str) -> &'static Unit {
    catalog()
        .find_unit(Language::En, name)
        .expect("known unit")
}

#[test]
fn kilometer_to_meter() {
    assert_eq!(convert(1.0, unit("kilometer"), unit("meter")).unwrap(), 1000.0);
}

#[test]
fn centimeter_to_meter_is_exact() {
    // 100 * 0.01은 IEEE 754에서도 정확히 1이다
    assert_eq!(convert(100.0, unit("centimeter"), unit("meter")).unwrap(), 1.0);
}

#[test]
fn hour_to_second() {
    assert_eq!(convert(1.0, unit("hour"), unit("second")).unwrap(), 3600.0);
}

#[test]
fn sixty_minutes_make_one_hour() {
    assert_eq!(convert(60.0, unit("minute"), unit("hour")).unwrap(), 1.0);
}

#[test]
fn two_hours_in_minutes() {
    assert_eq!(convert(2.0, unit("hour"), unit("minute")).unwrap(), 120.0);
}

#[test]
fn mile_to_kilometer() {
    let got = convert(1.0, unit("mile"), unit("kilometer")).unwrap();
    assert!((got - 1.60934).abs() < 1e-9, "got {got}");
}

#[test]
fn meters_per_second_to_kmh() {
    let got = convert(
        10.0,
        unit("meter per second"),
        unit("kilometer per hour"),
    )
    .unwrap();
    assert!((got - 36.0).abs() < 1e-3, "got {got}");
}

#[test]
fn kwh_converts_with_first_declared_factor() {
    assert_eq!(
        convert(1.0, unit("quilowatt-hour"), unit("joule")).unwrap(),
        3.6e3
    );
}

#[test]
fn zero_converts_to_zero() {
    assert_eq!(convert(0.0, unit("inch"), unit("mile")).unwrap(), 0.0);
}

#[test]
fn negative_values_pass_through_linearly() {
    let got = convert(-2.0, unit("foot"), unit("inch")).unwrap();
    assert!((got + 24.0).abs() < 1e-9, "got {got}");
}

#[test]
fn same_unit_round_trips_value() {
    for u in catalog().units() {
        let got = convert(12.5, u, u).unwrap();
        let rel = ((got - 12.5) / 12.5).abs();
        assert!(rel < 1e-12, "{}: got {got}", u.en_name);
    }
}

#[test]
fn there_and_back_is_stable() {
    let lb = unit("pound");
    let kg = unit("kilogram");
    let there = convert(3.0, lb, kg).unwrap();
    let back = convert(there, kg, lb).unwrap();
    assert!((back - 3.0).abs() < 1e-12, "got {back}");
}

#[test]
fn conversion_is_linear_in_value() {
    let km = unit("kilometer");
    let m = unit("meter");
    let five = convert(5.0, km, m).unwrap();
    let one = convert(1.0, km, m).unwrap();
    assert_eq!(five, 5.0 * one);
}

#[test]
fn cross_category_conversion_is_rejected() {
    let err = convert(1.0, unit("meter"), unit("kilogram")).unwrap_err();
    assert!(matches!(err, ConversionError::IncompatibleUnits { .. }));
}

#[test]
fn cross_category_error_names_both_categories() {
    let err = convert(1.0, unit("meter"), unit("kilogram")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("comprimento"), "{msg}");
    assert!(msg.contains("massa"), "{msg}");
}
