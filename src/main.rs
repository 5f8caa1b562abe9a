use clap::Parser;

use quantity_converter::{app, config, i18n};

/// 대화형 CLI 실행 옵션.
#[derive(Parser)]
#[command(version, about = "Conversor de medidas (CLI)")]
struct Args {
    /// 언어 코드 (auto/pt/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&args.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new(lang);
    app::run(&mut tr)?;
    Ok(())
}
