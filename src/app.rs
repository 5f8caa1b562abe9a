use crate::catalog;
use crate::conversion;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 카탈로그 조회 오류
    Catalog(catalog::CatalogError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Catalog(e) => write!(f, "카탈로그 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<catalog::CatalogError> for AppError {
    fn from(value: catalog::CatalogError) -> Self {
        AppError::Catalog(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Convert => ui_cli::handle_convert(tr)?,
            MenuChoice::Catalog => ui_cli::handle_catalog(tr)?,
            MenuChoice::Language => {
                if let Some(lang) = ui_cli::handle_language(tr)? {
                    *tr = Translator::new(lang);
                    println!(
                        "{} {}",
                        tr.t(i18n::keys::LANGUAGE_CHANGED),
                        ui_cli::language_label(lang)
                    );
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
