use sys_locale::get_locale;

use crate::catalog::Language;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_LANGUAGE: &str = "main_menu.language";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CONVERTER_HEADING: &str = "converter.heading";
    pub const CONVERTER_PROMPT_CATEGORY: &str = "converter.prompt_category";
    pub const CONVERTER_PROMPT_VALUE: &str = "converter.prompt_value";
    pub const CONVERTER_PROMPT_FROM_UNIT: &str = "converter.prompt_from_unit";
    pub const CONVERTER_PROMPT_TO_UNIT: &str = "converter.prompt_to_unit";
    pub const CONVERTER_RESULT: &str = "converter.result";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_PROMPT_NAME: &str = "catalog.prompt_name";
    pub const CATALOG_COL_EN: &str = "catalog.col_en";
    pub const CATALOG_COL_PT: &str = "catalog.col_pt";
    pub const CATALOG_COL_SYMBOL: &str = "catalog.col_symbol";
    pub const CATALOG_COL_FACTOR: &str = "catalog.col_factor";
    pub const CATALOG_BASE_MARK: &str = "catalog.base_mark";

    pub const LANGUAGE_HEADING: &str = "language.heading";
    pub const LANGUAGE_OPTIONS: &str = "language.options";
    pub const LANGUAGE_CHANGED: &str = "language.changed";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const GUI_TITLE: &str = "gui.title";
    pub const GUI_LANGUAGE_CAPTION: &str = "gui.language_caption";
    pub const GUI_NAV_CONVERTER: &str = "gui.nav.converter";
    pub const GUI_NAV_CATALOG: &str = "gui.nav.catalog";
    pub const GUI_UNIT_TYPE: &str = "gui.unit_type";
    pub const GUI_FROM: &str = "gui.from";
    pub const GUI_TO: &str = "gui.to";
    pub const GUI_VALUE: &str = "gui.value";
    pub const GUI_CONVERT: &str = "gui.convert";

    pub const GUI_SETTINGS_TITLE: &str = "gui.settings.title";
    pub const GUI_SETTINGS_GENERAL: &str = "gui.settings.general";
    pub const GUI_SETTINGS_NOTE: &str = "gui.settings.note";
    pub const GUI_SETTINGS_UI_SCALE: &str = "gui.settings.ui_scale";
    pub const GUI_SETTINGS_ALPHA: &str = "gui.settings.alpha";
    pub const GUI_SETTINGS_ALWAYS_ON_TOP: &str = "gui.settings.always_on_top";
    pub const GUI_SETTINGS_FONT: &str = "gui.settings.font";
    pub const GUI_SETTINGS_FONT_PICK: &str = "gui.settings.font_pick";
    pub const GUI_SETTINGS_FONT_APPLIED: &str = "gui.settings.font_applied";

    pub const GUI_ABOUT_TITLE: &str = "gui.about.title";
    pub const GUI_ABOUT_APP: &str = "gui.about.app";
    pub const GUI_ABOUT_VERSION: &str = "gui.about.version";
    pub const GUI_ABOUT_HINT: &str = "gui.about.hint";
}

/// 내장 문자열 번들을 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 포르투갈어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| pt(key)),
            Language::Pt => pt(key),
        }
    }
}

/// CLI 플래그/설정/시스템 로케일 순으로 언어를 결정한다. 기본값은 포르투갈어.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> Language {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or(Language::Pt)
}

fn normalize_lang(code: &str) -> Option<Language> {
    match code.trim().to_lowercase().as_str() {
        "auto" | "" => None,
        other => Language::from_code(other),
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<Language> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = Language::from_code(&loc) {
            return Some(lang);
        }
    }
    if let Ok(loc) = std::env::var("LANG") {
        if let Some(lang) = Language::from_code(&loc) {
            return Some(lang);
        }
    }
    if let Ok(loc) = std::env::var("LC_ALL") {
        if let Some(lang) = Language::from_code(&loc) {
            return Some(lang);
        }
    }
    None
}

fn pt(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erro",
        APP_EXIT => "Encerrando o programa.",
        MAIN_MENU_TITLE => "\n=== Gheowin Unit Converter ===",
        MAIN_MENU_CONVERT => "1) Converter medidas",
        MAIN_MENU_CATALOG => "2) Catálogo de unidades",
        MAIN_MENU_LANGUAGE => "3) Idioma",
        MAIN_MENU_EXIT => "0) Sair",
        PROMPT_MENU_SELECT => "Opção: ",
        INVALID_SELECTION_RETRY => "Entrada inválida. Tente novamente.",
        CONVERTER_HEADING => "\n-- Conversor de medidas --",
        CONVERTER_PROMPT_CATEGORY => "Número do tipo de unidade: ",
        CONVERTER_PROMPT_VALUE => "Valor: ",
        CONVERTER_PROMPT_FROM_UNIT => "Número da unidade de origem: ",
        CONVERTER_PROMPT_TO_UNIT => "Número da unidade de destino: ",
        CONVERTER_RESULT => "Resultado:",
        CATALOG_HEADING => "\n-- Catálogo de unidades --",
        CATALOG_PROMPT_NAME => "Nome do tipo de unidade: ",
        CATALOG_COL_EN => "Nome (EN)",
        CATALOG_COL_PT => "Nome (PT)",
        CATALOG_COL_SYMBOL => "Símbolo",
        CATALOG_COL_FACTOR => "Fator",
        CATALOG_BASE_MARK => "base",
        LANGUAGE_HEADING => "\n-- Idioma --",
        LANGUAGE_OPTIONS => "1) Português  2) English",
        LANGUAGE_CHANGED => "Idioma alterado:",
        ERROR_INVALID_NUMBER => "Digite um número válido.",
        GUI_TITLE => "Conversor de medidas",
        GUI_LANGUAGE_CAPTION => "Escolha seu idioma / Choose your language:",
        GUI_NAV_CONVERTER => "Conversor",
        GUI_NAV_CATALOG => "Catálogo",
        GUI_UNIT_TYPE => "Tipo de unidade",
        GUI_FROM => "Converter de ",
        GUI_TO => " para ",
        GUI_VALUE => "Valor",
        GUI_CONVERT => "Converter",
        GUI_SETTINGS_TITLE => "Configurações",
        GUI_SETTINGS_GENERAL => "Geral",
        GUI_SETTINGS_NOTE => "As alterações valem apenas para esta sessão.",
        GUI_SETTINGS_UI_SCALE => "Escala da interface",
        GUI_SETTINGS_ALPHA => "Transparência da janela",
        GUI_SETTINGS_ALWAYS_ON_TOP => "Sempre visível",
        GUI_SETTINGS_FONT => "Fonte personalizada",
        GUI_SETTINGS_FONT_PICK => "Escolher arquivo…",
        GUI_SETTINGS_FONT_APPLIED => "Fonte aplicada.",
        GUI_ABOUT_TITLE => "Ajuda / Sobre",
        GUI_ABOUT_APP => "Conversor de medidas com catálogo bilíngue (PT/EN).",
        GUI_ABOUT_VERSION => "Versão: 0.7.0",
        GUI_ABOUT_HINT => {
            "Se símbolos como M⊕/M⊙ não aparecerem, defina uma fonte nas configurações."
        }
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Gheowin Unit Converter ===",
        MAIN_MENU_CONVERT => "1) Convert quantities",
        MAIN_MENU_CATALOG => "2) Unit catalog",
        MAIN_MENU_LANGUAGE => "3) Language",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CONVERTER_HEADING => "\n-- Quantity Converter --",
        CONVERTER_PROMPT_CATEGORY => "Unit type number: ",
        CONVERTER_PROMPT_VALUE => "Value: ",
        CONVERTER_PROMPT_FROM_UNIT => "From-unit number: ",
        CONVERTER_PROMPT_TO_UNIT => "To-unit number: ",
        CONVERTER_RESULT => "Result:",
        CATALOG_HEADING => "\n-- Unit catalog --",
        CATALOG_PROMPT_NAME => "Unit type name: ",
        CATALOG_COL_EN => "Name (EN)",
        CATALOG_COL_PT => "Name (PT)",
        CATALOG_COL_SYMBOL => "Symbol",
        CATALOG_COL_FACTOR => "Factor",
        CATALOG_BASE_MARK => "base",
        LANGUAGE_HEADING => "\n-- Language --",
        LANGUAGE_OPTIONS => "1) Português  2) English",
        LANGUAGE_CHANGED => "Language changed:",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        GUI_TITLE => "Quantity Converter",
        GUI_LANGUAGE_CAPTION => "Escolha seu idioma / Choose your language:",
        GUI_NAV_CONVERTER => "Converter",
        GUI_NAV_CATALOG => "Catalog",
        GUI_UNIT_TYPE => "Unit type",
        GUI_FROM => "Convert from ",
        GUI_TO => " to ",
        GUI_VALUE => "Value",
        GUI_CONVERT => "Convert",
        GUI_SETTINGS_TITLE => "Settings",
        GUI_SETTINGS_GENERAL => "General",
        GUI_SETTINGS_NOTE => "Changes apply to this session only.",
        GUI_SETTINGS_UI_SCALE => "UI scale",
        GUI_SETTINGS_ALPHA => "Window transparency",
        GUI_SETTINGS_ALWAYS_ON_TOP => "Always on top",
        GUI_SETTINGS_FONT => "Custom font",
        GUI_SETTINGS_FONT_PICK => "Choose file…",
        GUI_SETTINGS_FONT_APPLIED => "Font applied.",
        GUI_ABOUT_TITLE => "Help / About",
        GUI_ABOUT_APP => "Quantity converter with a bilingual (PT/EN) unit catalog.",
        GUI_ABOUT_VERSION => "Version: 0.7.0",
        GUI_ABOUT_HINT => "If symbols such as M⊕/M⊙ do not render, set a font in settings.",
        _ => return None,
    })
}
