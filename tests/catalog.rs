//! 단위 카탈로그 데이터 회귀 테스트. 표는 고정 데이터라서 값 자체를 검증한다.
use quantity_converter::catalog::{catalog, Category, CatalogError, Language};

#[test]
fn twelve_categories_in_declared_order() {
    let cats = catalog().categories();
    assert_eq!(cats.len(), 12);
    assert_eq!(cats.first(), Some(&Category::Length));
    assert_eq!(cats.last(), Some(&Category::Power));
}

#[test]
fn seventy_nine_units_total() {
    assert_eq!(catalog().units().len(), 79);
}

#[test]
fn per_category_row_counts() {
    let counts = [
        (Category::Length, 14),
        (Category::Area, 7),
        (Category::Volume, 10),
        (Category::Time, 4),
        (Category::Velocity, 5),
        (Category::Acceleration, 4),
        (Category::Mass, 13),
        (Category::Density, 2),
        (Category::Force, 3),
        (Category::Pressure, 5),
        (Category::Energy, 8),
        (Category::Power, 4),
    ];
    for (category, expected) in counts {
        let got = catalog().units_of(category).count();
        assert_eq!(got, expected, "{}", category.name(Language::En));
    }
}

#[test]
fn every_category_has_exactly_one_base_unit() {
    for category in catalog().categories() {
        let bases = catalog()
            .units_of(*category)
            .filter(|u| u.is_base())
            .count();
        assert_eq!(bases, 1, "{}", category.name(Language::En));
    }
}

#[test]
fn category_names_resolve_in_both_languages() {
    let cat = catalog();
    assert_eq!(cat.display_name(Category::Length, "en").unwrap(), "length");
    assert_eq!(
        cat.display_name(Category::Length, "pt").unwrap(),
        "comprimento"
    );
    assert_eq!(cat.display_name(Category::Power, "pt-BR").unwrap(), "potência");
    assert!(matches!(
        cat.display_name(Category::Length, "fr"),
        Err(CatalogError::UnknownLanguage(_))
    ));
}

#[test]
fn category_lookup_by_name_accepts_either_language() {
    assert_eq!(Category::from_name("mass"), Some(Category::Mass));
    assert_eq!(Category::from_name("massa"), Some(Category::Mass));
    // 대소문자까지 정확히 일치해야 한다
    assert_eq!(Category::from_name("Massa"), None);
    assert!(matches!(
        catalog().units_of_named("volumen"),
        Err(CatalogError::UnknownCategory(_))
    ));
}

#[test]
fn units_of_named_lists_time_units() {
    let names: Vec<&str> = catalog()
        .units_of_named("tempo")
        .expect("known category")
        .map(|u| u.pt_name)
        .collect();
    assert_eq!(names, ["segundo", "minuto", "hora", "dia"]);
}

#[test]
fn find_unit_matches_exact_name_per_language() {
    let cat = catalog();
    let m_en = cat.find_unit(Language::En, "meter").unwrap();
    let m_pt = cat.find_unit(Language::Pt, "metro").unwrap();
    assert_eq!(m_en.symbol, "m");
    assert_eq!(m_en.factor, 1.0);
    assert_eq!(m_en, m_pt);
    // 이름은 언어별 표에서만 찾는다
    assert!(matches!(
        cat.find_unit(Language::En, "metro"),
        Err(CatalogError::UnitNotFound { .. })
    ));
}

#[test]
fn duplicate_kwh_rows_resolve_to_first_declared() {
    let cat = catalog();
    let kwh = cat.find_unit(Language::En, "quilowatt-hour").unwrap();
    assert_eq!(kwh.factor, 3.6e3);
    let rows = cat
        .units_of(Category::Energy)
        .filter(|u| u.symbol == "kWh")
        .count();
    assert_eq!(rows, 4);
}

#[test]
fn symbol_collisions_are_preserved() {
    let cat = catalog();
    // 질량: centigrama와 miligrama가 모두 mg
    let mg_rows = cat
        .units_of(Category::Mass)
        .filter(|u| u.symbol == "mg")
        .count();
    assert_eq!(mg_rows, 2);
    // g 기호는 질량(grama)과 가속도(g) 양쪽에 있다
    let g_mass = cat.find_unit(Language::Pt, "grama").unwrap();
    let g_accel = cat.find_unit(Language::En, "g").unwrap();
    assert_eq!(g_mass.symbol, "g");
    assert_eq!(g_mass.category, Category::Mass);
    assert_eq!(g_accel.category, Category::Acceleration);
    // 부피 기호는 ²로 기재되어 있다
    let m3 = cat.find_unit(Language::En, "cubic meter").unwrap();
    assert_eq!(m3.symbol, "m²");
}

#[test]
fn quirky_reference_factors_pinned() {
    let cat = catalog();
    let factor = |name: &str| cat.find_unit(Language::En, name).unwrap().factor;
    assert_eq!(factor("ounce"), 10.028349);
    assert_eq!(factor("astronomic unit"), 6.6846e-12);
    assert_eq!(factor("light-year"), 1.057e-16);
    assert_eq!(factor("parsec"), 3.24078e-17);
    assert_eq!(factor("Mach"), 0.002915);
}

#[test]
fn length_units_keep_declared_order() {
    let names: Vec<&str> = catalog()
        .units_of(Category::Length)
        .map(|u| u.en_name)
        .collect();
    assert_eq!(
        names,
        [
            "meter",
            "decimeter",
            "centimeter",
            "milimeter",
            "decameter",
            "hectometer",
            "kilometer",
            "inch",
            "foot",
            "yard",
            "mile",
            "astronomic unit",
            "light-year",
            "parsec",
        ]
    );
}
