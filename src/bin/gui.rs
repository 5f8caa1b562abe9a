#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 변환기와 카탈로그 두 탭을 제공한다.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use quantity_converter::{
    catalog::{self, Category, Language},
    config, conversion,
    i18n::{self, keys, Translator},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/pt/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved.as_code().to_string();
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1000.0, 700.0))
        .with_transparent(true);
    if app_cfg.always_on_top {
        viewport = viewport.with_always_on_top();
    }
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Gheowin Unit Converter",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            if let Some(path) = app_cfg.custom_font_path.as_deref() {
                if let Err(e) = load_custom_font(&cc.egui_ctx, path) {
                    eprintln!("Font error: {e}");
                }
            }
            cc.egui_ctx.set_pixels_per_point(app_cfg.ui_scale);
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 카탈로그의 기호(⊕, ⊙, ∙ 등)까지 덮는 폰트를 우선 적용한다.
/// 1) assets/fonts/NotoSans-Regular.ttf
/// 2) 시스템 폰트(Linux DejaVu/Noto, Windows Segoe UI 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_path = Path::new("assets/fonts/NotoSans-Regular.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "bundled_font");
        return Ok(());
    }

    // 2) 시스템 폰트 탐색
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    ];
    for cand in candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "system_font");
            return Ok(());
        }
    }
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["segoeui.ttf", "arial.ttf", "calibri.ttf"] {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "system_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

/// 범주의 첫 단위 이름을 양쪽 콤보박스의 초기 선택으로 쓴다.
fn default_unit_names(category: Category, lang: Language) -> (String, String) {
    let first = catalog::catalog()
        .units_of(category)
        .next()
        .map(|u| u.name(lang).to_string())
        .unwrap_or_default();
    (first.clone(), first)
}

struct GuiApp {
    tr: Translator,
    tab: Tab,
    // 변환 탭
    category: Category,
    from_name: String,
    to_name: String,
    value_input: String,
    result: Option<String>,
    // 카탈로그 탭
    browse_category: Category,
    // 설정 (이번 세션에만 적용, 파일에 쓰지 않음)
    ui_scale: f32,
    window_alpha: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    custom_font_path: String,
    font_status: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Converter,
    Catalog,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang = i18n::resolve_language("auto", Some(config.language.as_str()));
        let (from_name, to_name) = default_unit_names(config.default_category, lang);
        Self {
            tr: Translator::new(lang),
            tab: Tab::Converter,
            category: config.default_category,
            from_name,
            to_name,
            value_input: "0".to_string(),
            result: None,
            browse_category: config.default_category,
            ui_scale: config.ui_scale,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            always_on_top: config.always_on_top,
            show_settings_modal: false,
            show_help_modal: false,
            custom_font_path: config.custom_font_path.unwrap_or_default(),
            font_status: None,
        }
    }

    /// 언어를 바꾸면 단위 목록이 새 언어로 다시 그려지므로 선택을 초기화한다.
    fn set_language(&mut self, lang: Language) {
        self.tr = Translator::new(lang);
        let (from, to) = default_unit_names(self.category, lang);
        self.from_name = from;
        self.to_name = to;
        self.result = None;
    }

    fn run_conversion(&mut self) {
        let tr = self.tr;
        let lang = tr.language();
        let value = match self.value_input.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                self.result = Some(format!(
                    "{}: {}",
                    tr.t(keys::ERROR_PREFIX),
                    tr.t(keys::ERROR_INVALID_NUMBER)
                ));
                return;
            }
        };
        let cat = catalog::catalog();
        let pair = cat
            .find_unit(lang, &self.from_name)
            .and_then(|from| cat.find_unit(lang, &self.to_name).map(|to| (from, to)));
        self.result = Some(match pair {
            Ok((from, to)) => match conversion::convert(value, from, to) {
                Ok(v) => format!("{v:.6} {}", to.symbol),
                Err(e) => format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
            },
            Err(e) => format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr;
        ui.style_mut().wrap = Some(false);
        ui.add_space(8.0);
        for (tab, label) in [
            (Tab::Converter, tr.t(keys::GUI_NAV_CONVERTER)),
            (Tab::Catalog, tr.t(keys::GUI_NAV_CATALOG)),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr;
        let lang = tr.language();
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("conv_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(tr.t(keys::GUI_UNIT_TYPE));
                        let before = self.category;
                        egui::ComboBox::from_id_source("conv_category")
                            .selected_text(before.name(lang))
                            .show_ui(ui, |ui| {
                                for c in catalog::catalog().categories() {
                                    ui.selectable_value(&mut self.category, *c, c.name(lang));
                                }
                            });
                        if before != self.category {
                            let (f, t) = default_unit_names(self.category, lang);
                            self.from_name = f;
                            self.to_name = t;
                            self.result = None;
                        }
                        ui.end_row();

                        ui.label(tr.t(keys::GUI_VALUE));
                        ui.text_edit_singleline(&mut self.value_input);
                        ui.end_row();

                        ui.label(tr.t(keys::GUI_FROM));
                        egui::ComboBox::from_id_source("conv_from")
                            .selected_text(self.from_name.clone())
                            .show_ui(ui, |ui| {
                                for u in catalog::catalog().units_of(self.category) {
                                    let name = u.name(lang);
                                    ui.selectable_value(
                                        &mut self.from_name,
                                        name.to_string(),
                                        name,
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label(tr.t(keys::GUI_TO));
                        egui::ComboBox::from_id_source("conv_to")
                            .selected_text(self.to_name.clone())
                            .show_ui(ui, |ui| {
                                for u in catalog::catalog().units_of(self.category) {
                                    let name = u.name(lang);
                                    ui.selectable_value(&mut self.to_name, name.to_string(), name);
                                }
                            });
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(tr.t(keys::GUI_CONVERT)).clicked() {
                    self.run_conversion();
                }
                if let Some(res) = &self.result {
                    ui.label(res);
                }
            });
        });
    }

    fn ui_catalog(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr;
        let lang = tr.language();
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::GUI_UNIT_TYPE));
            egui::ComboBox::from_id_source("catalog_category")
                .selected_text(self.browse_category.name(lang))
                .show_ui(ui, |ui| {
                    for c in catalog::catalog().categories() {
                        ui.selectable_value(&mut self.browse_category, *c, c.name(lang));
                    }
                });
        });
        ui.add_space(8.0);
        egui::Grid::new("catalog_grid")
            .num_columns(5)
            .spacing([12.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.strong(tr.t(keys::CATALOG_COL_EN));
                ui.strong(tr.t(keys::CATALOG_COL_PT));
                ui.strong(tr.t(keys::CATALOG_COL_SYMBOL));
                ui.strong(tr.t(keys::CATALOG_COL_FACTOR));
                ui.strong("");
                ui.end_row();
                for u in catalog::catalog().units_of(self.browse_category) {
                    ui.label(u.en_name);
                    ui.label(u.pt_name);
                    ui.label(u.symbol);
                    ui.label(u.factor.to_string());
                    ui.label(if u.is_base() {
                        tr.t(keys::CATALOG_BASE_MARK)
                    } else {
                        ""
                    });
                    ui.end_row();
                }
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr;

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::GUI_TITLE));
                ui.separator();
                ui.label(tr.t(keys::GUI_LANGUAGE_CAPTION));
                let before = tr.language();
                let mut lang = before;
                ui.selectable_value(&mut lang, Language::Pt, "Português");
                ui.selectable_value(&mut lang, Language::En, "English");
                if lang != before {
                    self.set_language(lang);
                }
                ui.separator();
                if ui.button(tr.t(keys::GUI_SETTINGS_TITLE)).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(tr.t(keys::GUI_ABOUT_TITLE)).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(tr.t(keys::GUI_SETTINGS_TITLE))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(tr.t(keys::GUI_SETTINGS_GENERAL));
                    ui.separator();
                    ui.label(tr.t(keys::GUI_SETTINGS_UI_SCALE));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        tr.t(keys::GUI_SETTINGS_ALWAYS_ON_TOP),
                    );
                    ui.separator();
                    ui.label(tr.t(keys::GUI_SETTINGS_ALPHA));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    ui.label(tr.t(keys::GUI_SETTINGS_FONT));
                    ui.horizontal(|ui| {
                        if ui.button(tr.t(keys::GUI_SETTINGS_FONT_PICK)).clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = path.display().to_string();
                                self.font_status =
                                    Some(match load_custom_font(ctx, &self.custom_font_path) {
                                        Ok(()) => {
                                            tr.t(keys::GUI_SETTINGS_FONT_APPLIED).to_string()
                                        }
                                        Err(e) => {
                                            format!("{}: {e}", tr.t(keys::ERROR_PREFIX))
                                        }
                                    });
                            }
                        }
                        if !self.custom_font_path.is_empty() {
                            ui.monospace(self.custom_font_path.clone());
                        }
                    });
                    if let Some(msg) = &self.font_status {
                        ui.label(msg);
                    }
                    ui.separator();
                    ui.small(tr.t(keys::GUI_SETTINGS_NOTE));
                });
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(tr.t(keys::GUI_ABOUT_TITLE))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(tr.t(keys::GUI_ABOUT_APP));
                    ui.label(tr.t(keys::GUI_ABOUT_VERSION));
                    ui.separator();
                    ui.label(tr.t(keys::GUI_ABOUT_HINT));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Converter => self.ui_converter(ui),
                    Tab::Catalog => self.ui_catalog(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_pt_app() -> GuiApp {
        let cfg = config::Config {
            language: "pt".to_string(),
            ..config::Config::default()
        };
        GuiApp::new(cfg)
    }

    #[test]
    fn seeds_first_unit_of_default_category() {
        let app = fixed_pt_app();
        assert_eq!(app.tr.language(), Language::Pt);
        assert_eq!(app.category, Category::Length);
        assert_eq!(app.from_name, "metro");
        assert_eq!(app.to_name, "metro");
        assert_eq!(app.value_input, "0");
        assert!(app.result.is_none());
    }

    #[test]
    fn language_switch_resets_unit_names() {
        let mut app = fixed_pt_app();
        app.set_language(Language::En);
        assert_eq!(app.tr.language(), Language::En);
        assert_eq!(app.from_name, "meter");
        assert_eq!(app.to_name, "meter");
        assert!(app.result.is_none());
    }

    #[test]
    fn conversion_result_carries_target_symbol() {
        let mut app = fixed_pt_app();
        app.value_input = "2.5".to_string();
        app.from_name = "quilômetro".to_string();
        app.to_name = "metro".to_string();
        app.run_conversion();
        assert_eq!(app.result.as_deref(), Some("2500.000000 m"));
    }

    #[test]
    fn english_names_resolve_after_switch() {
        let mut app = fixed_pt_app();
        app.set_language(Language::En);
        app.value_input = "1".to_string();
        app.from_name = "kilometer".to_string();
        app.to_name = "meter".to_string();
        app.run_conversion();
        assert_eq!(app.result.as_deref(), Some("1000.000000 m"));
    }

    #[test]
    fn invalid_number_shows_localized_error() {
        let mut app = fixed_pt_app();
        app.value_input = "abc".to_string();
        app.run_conversion();
        let msg = app.result.expect("error result expected");
        assert!(msg.contains("Erro"));
        assert!(msg.contains("Digite um número válido."));
    }
}
