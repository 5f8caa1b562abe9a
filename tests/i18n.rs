//! 언어 결정 체인과 번역 폴백 테스트.
use quantity_converter::catalog::Language;
use quantity_converter::i18n::{keys, resolve_language, Translator};

#[test]
fn cli_argument_wins_over_config() {
    assert_eq!(resolve_language("en", Some("pt")), Language::En);
    assert_eq!(resolve_language("pt", Some("en")), Language::Pt);
}

#[test]
fn config_is_used_when_cli_says_auto() {
    assert_eq!(resolve_language("auto", Some("en")), Language::En);
    assert_eq!(resolve_language("", Some("pt")), Language::Pt);
}

#[test]
fn regional_codes_are_accepted() {
    assert_eq!(Language::from_code("pt-BR"), Some(Language::Pt));
    assert_eq!(Language::from_code("pt_PT"), Some(Language::Pt));
    assert_eq!(Language::from_code("en_US.UTF-8"), Some(Language::En));
    assert_eq!(Language::from_code("EN"), Some(Language::En));
    assert_eq!(Language::from_code("fr"), None);
    assert_eq!(Language::from_code(""), None);
}

#[test]
fn portuguese_is_the_primary_table() {
    let tr = Translator::new(Language::Pt);
    assert_eq!(tr.language(), Language::Pt);
    assert_eq!(tr.t(keys::GUI_CONVERT), "Converter");
    assert_eq!(tr.t(keys::ERROR_INVALID_NUMBER), "Digite um número válido.");
}

#[test]
fn english_table_translates_gui_labels() {
    let tr = Translator::new(Language::En);
    assert_eq!(tr.t(keys::GUI_CONVERT), "Convert");
    assert_eq!(tr.t(keys::GUI_NAV_CATALOG), "Catalog");
    // 언어 선택 안내문은 양쪽 표에 같은 문구로 들어 있다
    assert_eq!(
        tr.t(keys::GUI_LANGUAGE_CAPTION),
        "Escolha seu idioma / Choose your language:"
    );
}

#[test]
fn unknown_key_falls_back_to_primary_marker() {
    let en = Translator::new(Language::En);
    let pt = Translator::new(Language::Pt);
    assert_eq!(en.t("nonexistent.key"), "[missing translation]");
    assert_eq!(pt.t("nonexistent.key"), "[missing translation]");
}
