use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog::{self, Language, Unit};
use crate::conversion;
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Catalog,
    Language,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_LANGUAGE));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Catalog),
            "3" => return Ok(MenuChoice::Language),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 변환 메뉴를 처리한다. 범주/단위는 번호로 고르므로 이름이 중복인
/// 항목도 개별 선택이 가능하다.
pub fn handle_convert(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERTER_HEADING));
    let lang = tr.language();
    let categories = catalog::catalog().categories();
    for (i, c) in categories.iter().enumerate() {
        println!("{:>2}) {}", i + 1, c.name(lang));
    }
    let category = *pick_index(tr, keys::CONVERTER_PROMPT_CATEGORY, categories)?;

    let units: Vec<&Unit> = catalog::catalog().units_of(category).collect();
    for (i, unit) in units.iter().enumerate() {
        println!("{:>2}) {} [{}]", i + 1, unit.name(lang), unit.symbol);
    }
    let from = *pick_index(tr, keys::CONVERTER_PROMPT_FROM_UNIT, &units)?;
    let to = *pick_index(tr, keys::CONVERTER_PROMPT_TO_UNIT, &units)?;
    let value = read_f64(tr, keys::CONVERTER_PROMPT_VALUE)?;

    let result = conversion::convert(value, from, to)?;
    println!("{} {result} {to}", tr.t(keys::CONVERTER_RESULT));
    Ok(())
}

/// 카탈로그 열람 메뉴를 처리한다. 범주는 표시 이름(EN/PT 무관)으로 받는다.
pub fn handle_catalog(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CATALOG_HEADING));
    for c in catalog::catalog().categories() {
        println!("- {} / {}", c.name(Language::En), c.name(Language::Pt));
    }
    let name = read_line(tr.t(keys::CATALOG_PROMPT_NAME))?;
    println!(
        "{} | {} | {} | {}",
        tr.t(keys::CATALOG_COL_EN),
        tr.t(keys::CATALOG_COL_PT),
        tr.t(keys::CATALOG_COL_SYMBOL),
        tr.t(keys::CATALOG_COL_FACTOR)
    );
    for unit in catalog::catalog().units_of_named(name.trim())? {
        let base_mark = if unit.is_base() {
            format!(" ({})", tr.t(keys::CATALOG_BASE_MARK))
        } else {
            String::new()
        };
        println!(
            "{} | {} | {} | {}{}",
            unit.en_name, unit.pt_name, unit.symbol, unit.factor, base_mark
        );
    }
    Ok(())
}

/// 언어 메뉴를 처리한다. 엔터만 입력하면 변경 없이 돌아간다.
pub fn handle_language(tr: &Translator) -> Result<Option<Language>, AppError> {
    println!("{}", tr.t(keys::LANGUAGE_HEADING));
    println!("{}", tr.t(keys::LANGUAGE_OPTIONS));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(Some(Language::Pt)),
            "2" => return Ok(Some(Language::En)),
            "" => return Ok(None),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 언어의 자기 표기 이름.
pub fn language_label(lang: Language) -> &'static str {
    match lang {
        Language::Pt => "Português",
        Language::En => "English",
    }
}

fn pick_index<'a, T>(tr: &Translator, prompt_key: &str, items: &'a [T]) -> Result<&'a T, AppError> {
    loop {
        let sel = read_line(tr.t(prompt_key))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if n >= 1 && n <= items.len() {
                return Ok(&items[n - 1]);
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
