//! 카탈로그/변환 핵심 로직을 라이브러리로 분리하여 CLI 뿐 아니라 GUI도 함께 쓴다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod ui_cli;
