//! 측정 범주/단위 카탈로그. 초기화 이후 불변이며 동시 읽기에 안전하다.

use std::fmt;

use serde::Deserialize;

/// 카탈로그가 이름을 제공하는 표시 언어. EN/PT 두 가지뿐이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Pt,
}

impl Language {
    /// 언어 코드를 해석한다. 지역 접미사(`pt-BR`, `en_US.UTF-8` 등)는 무시하고
    /// 알 수 없는 코드는 None을 돌려준다.
    pub fn from_code(code: &str) -> Option<Self> {
        let base = code
            .trim()
            .split(['.', '_', '-'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match base.as_str() {
            "en" => Some(Language::En),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

/// 측정 범주. 선언 순서가 카탈로그 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Area,
    Volume,
    Time,
    Velocity,
    Acceleration,
    Mass,
    Density,
    Force,
    Pressure,
    Energy,
    Power,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Length,
        Category::Area,
        Category::Volume,
        Category::Time,
        Category::Velocity,
        Category::Acceleration,
        Category::Mass,
        Category::Density,
        Category::Force,
        Category::Pressure,
        Category::Energy,
        Category::Power,
    ];

    /// 주어진 언어의 범주 표시 이름.
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en_name(),
            Language::Pt => self.pt_name(),
        }
    }

    /// 어느 언어든 표시 이름이 정확히 일치하는 범주를 찾는다.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.en_name() == name || c.pt_name() == name)
    }

    fn en_name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Area => "area",
            Category::Volume => "volume",
            Category::Time => "time",
            Category::Velocity => "velocity",
            Category::Acceleration => "acceleration",
            Category::Mass => "mass",
            Category::Density => "density",
            Category::Force => "force",
            Category::Pressure => "pressure",
            Category::Energy => "energy",
            Category::Power => "power",
        }
    }

    fn pt_name(&self) -> &'static str {
        match self {
            Category::Length => "comprimento",
            Category::Area => "área",
            Category::Volume => "volume",
            Category::Time => "tempo",
            Category::Velocity => "velocidade",
            Category::Acceleration => "aceleração",
            Category::Mass => "massa",
            Category::Density => "densidade",
            Category::Force => "força",
            Category::Pressure => "pressão",
            Category::Energy => "energia",
            Category::Power => "potência",
        }
    }
}

/// 단위 하나를 표현하는 불변 레코드.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub en_name: &'static str,
    pub pt_name: &'static str,
    pub symbol: &'static str,
    /// 범주 기준 단위에 대한 선형 환산 계수. 기준 단위는 1이다.
    pub factor: f64,
    pub category: Category,
}

impl Unit {
    pub const fn new(
        en_name: &'static str,
        pt_name: &'static str,
        symbol: &'static str,
        factor: f64,
        category: Category,
    ) -> Self {
        Self {
            en_name,
            pt_name,
            symbol,
            factor,
            category,
        }
    }

    /// 주어진 언어의 단위 표시 이름.
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en_name,
            Language::Pt => self.pt_name,
        }
    }

    /// 환산 계수가 1이면 해당 범주의 기준 단위다.
    pub fn is_base(&self) -> bool {
        self.factor == 1.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// 카탈로그 조회에서 발생 가능한 오류.
#[derive(Debug)]
pub enum CatalogError {
    /// 알 수 없는 언어 코드
    UnknownLanguage(String),
    /// 어느 언어에도 없는 범주 이름
    UnknownCategory(String),
    /// 해당 언어에서 이름이 일치하는 단위 없음
    UnitNotFound { language: Language, name: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownLanguage(code) => write!(f, "알 수 없는 언어 코드: {code}"),
            CatalogError::UnknownCategory(name) => write!(f, "알 수 없는 범주 이름: {name}"),
            CatalogError::UnitNotFound { language, name } => {
                write!(f, "단위를 찾을 수 없음({}): {name}", language.as_code())
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// 전체 단위 카탈로그. 읽기 전용 핸들(`catalog()`)로만 접근한다.
#[derive(Debug)]
pub struct Catalog {
    units: &'static [Unit],
}

/// 카탈로그 핸들을 반환한다.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    /// 모든 범주를 카탈로그 순서로 반환한다.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// 전체 단위를 선언 순서로 반환한다.
    pub fn units(&self) -> &'static [Unit] {
        self.units
    }

    /// 언어 코드 문자열로 범주 표시 이름을 조회한다.
    pub fn display_name(
        &self,
        category: Category,
        lang_code: &str,
    ) -> Result<&'static str, CatalogError> {
        let lang = Language::from_code(lang_code)
            .ok_or_else(|| CatalogError::UnknownLanguage(lang_code.to_string()))?;
        Ok(category.name(lang))
    }

    /// 범주에 속한 단위를 선언 순서 그대로 돌려준다.
    pub fn units_of(&self, category: Category) -> impl Iterator<Item = &'static Unit> + '_ {
        self.units.iter().filter(move |u| u.category == category)
    }

    /// 표시 이름(EN/PT 무관)으로 범주를 찾아 그 단위를 돌려준다.
    pub fn units_of_named(
        &self,
        category_name: &str,
    ) -> Result<impl Iterator<Item = &'static Unit> + '_, CatalogError> {
        let category = Category::from_name(category_name)
            .ok_or_else(|| CatalogError::UnknownCategory(category_name.to_string()))?;
        Ok(self.units_of(category))
    }

    /// 주어진 언어의 표시 이름이 정확히 일치하는 첫 단위를 반환한다.
    /// 이름이 중복이면 선언 순서상 앞선 단위가 이긴다.
    pub fn find_unit(&self, language: Language, name: &str) -> Result<&'static Unit, CatalogError> {
        self.units
            .iter()
            .find(|u| u.name(language) == name)
            .ok_or_else(|| CatalogError::UnitNotFound {
                language,
                name: name.to_string(),
            })
    }
}

static CATALOG: Catalog = Catalog { units: UNITS };

// 표의 항목·순서·값은 고정 데이터다. 계수 오류(oz, AS/ly/pc, Mach)와
// 기호 충돌(mg/dm/hm, 부피의 ² 기호), kWh 4중 항목, 철자 오류까지
// 그대로 유지한다.
const UNITS: &[Unit] = &[
    // 길이 (기준: m)
    u("meter", "metro", "m", 1.0, Category::Length),
    u("decimeter", "decímetro", "dm", 1e-1, Category::Length),
    u("centimeter", "centímetro", "cm", 1e-2, Category::Length),
    u("milimeter", "milímetro", "mm", 1e-3, Category::Length),
    u("decameter", "decâmetro", "dam", 1e1, Category::Length),
    u("hectometer", "hectômetro", "hm", 1e2, Category::Length),
    u("kilometer", "quilômetro", "km", 1e3, Category::Length),
    u("inch", "polegada", "in", 0.0254, Category::Length),
    u("foot", "pé", "ft", 0.3048, Category::Length),
    u("yard", "jarda", "yd", 0.9144, Category::Length),
    u("mile", "milha", "mi", 1609.34, Category::Length),
    u(
        "astronomic unit",
        "unidade astronômica",
        "AS",
        6.6846e-12,
        Category::Length,
    ),
    u("light-year", "ano-luz", "ly", 1.057e-16, Category::Length),
    u("parsec", "parsec", "pc", 3.24078e-17, Category::Length),
    // 넓이 (기준: m²)
    u("square meter", "metro quadrado", "m²", 1.0, Category::Area),
    u(
        "square centimeter",
        "centímetro quadrado",
        "cm²",
        1e-4,
        Category::Area,
    ),
    u(
        "square milimeter",
        "milímetro quadrado",
        "mm²",
        1e-6,
        Category::Area,
    ),
    u(
        "square kilometer",
        "quilômetro quadrado",
        "km²",
        1e6,
        Category::Area,
    ),
    u("hectare", "hectare", "ha", 1e4, Category::Area),
    u(
        "square inch",
        "polegada quadrada",
        "in²",
        0.000645,
        Category::Area,
    ),
    u("square foot", "pé quadrado", "ft²", 0.092903, Category::Area),
    // 부피 (기준: m³ — 기호는 ²로 잘못 기재되어 있음)
    u("cubic meter", "metro cúbico", "m²", 1.0, Category::Volume),
    u(
        "cubic centimeter",
        "centímetro cúbico",
        "cm²",
        1e-6,
        Category::Volume,
    ),
    u(
        "cubic milimeter",
        "milímetro cúbico",
        "mm²",
        1e-9,
        Category::Volume,
    ),
    u(
        "cubic kilometer",
        "quilômetro cúbico",
        "km²",
        1e9,
        Category::Volume,
    ),
    u("liter", "litro", "L", 1e-3, Category::Volume),
    u("fluid ounce", "onça fluida", "fl oz", 2.84131e-5, Category::Volume),
    u(
        "imperial gallon",
        "galão imperial",
        "gal (imp)",
        0.004546,
        Category::Volume,
    ),
    u(
        "US gallon",
        "galão americano",
        "gal (US)",
        0.003785,
        Category::Volume,
    ),
    u("cubic inch", "polegada cúbico", "in²", 0.000645, Category::Volume),
    u("cubic foot", "pé cúbico", "ft²", 0.092903, Category::Volume),
    // 시간 (기준: s)
    u("second", "segundo", "s", 1.0, Category::Time),
    u("minute", "minuto", "min", 60.0, Category::Time),
    u("hour", "hora", "h", 3600.0, Category::Time),
    u("day", "dia", "d", 86400.0, Category::Time),
    // 속도 (기준: m/s)
    u(
        "meter per second",
        "metro por segundo",
        "m/s",
        1.0,
        Category::Velocity,
    ),
    u(
        "kilometer per hour",
        "quilômetro por hora",
        "km/h",
        0.277778,
        Category::Velocity,
    ),
    u(
        "mile per hour",
        "milha por hora",
        "mi/h",
        0.44704,
        Category::Velocity,
    ),
    u("knot", "nó", "kn", 0.514444, Category::Velocity),
    u("Mach", "Mach", "Mach", 0.002915, Category::Velocity),
    // 가속도 (기준: m/s²)
    u(
        "meter per second squared",
        "metro por segundo ao quadrado",
        "m/s²",
        1.0,
        Category::Acceleration,
    ),
    u("g", "g", "g", 9.80665, Category::Acceleration),
    u(
        "kilometer per hour per second",
        "quilômetro por hora por segundo",
        "km/(h∙s)",
        0.277777,
        Category::Acceleration,
    ),
    u(
        "mile per hour per second",
        "milha por hora por segundo",
        "mi/(h∙s)",
        0.447047,
        Category::Acceleration,
    ),
    // 질량 (기준: kg)
    u("kilogram", "quilograma", "kg", 1.0, Category::Mass),
    u("gram", "grama", "g", 1e-3, Category::Mass),
    u("decigram", "decigrama", "dg", 1e-4, Category::Mass),
    u("centigram", "centigrama", "mg", 1e-5, Category::Mass),
    u("miligram", "miligrama", "mg", 1e-6, Category::Mass),
    u("decagram", "decagrama", "dm", 1e-2, Category::Mass),
    u("hectogram", "hectograma", "hm", 1e-1, Category::Mass),
    u("ounce", "onça", "oz", 10.028349, Category::Mass),
    u("pound", "libra", "lb", 0.453592, Category::Mass),
    u("stone", "stone", "st", 6.35029318, Category::Mass),
    u("tonne", "tonelada", "ton", 1000.0, Category::Mass),
    u("earth's mass", "massa terrestre", "M⊕", 5.972e24, Category::Mass),
    u("solar mass", "massa solar", "M⊙", 1.989e30, Category::Mass),
    // 밀도 (기준: kg/m³)
    u(
        "kilogram per cubic meter",
        "quilograma por metro cúbico",
        "kg/m³",
        1.0,
        Category::Density,
    ),
    u(
        "gram per cubic centimeter",
        "grama por metro cúbico",
        "g/cm³",
        1000.0,
        Category::Density,
    ),
    // 힘 (기준: N)
    u("newton", "newton", "N", 1.0, Category::Force),
    u("dyne", "dina", "dyn", 1e-5, Category::Force),
    u("quilogram-force", "quilograma-força", "kgf", 9.80665, Category::Force),
    // 압력 (기준: Pa)
    u("pascal", "pascal", "Pa", 1.0, Category::Pressure),
    u("bar", "bária", "bar", 100000.0, Category::Pressure),
    u(
        "pound per square inch",
        "libra por polegada quadrada",
        "psi",
        6894.76,
        Category::Pressure,
    ),
    u(
        "milimiters of mercury",
        "milímetro de mercúrio",
        "mmHg",
        133.322,
        Category::Pressure,
    ),
    u("atmosphere", "atmosfera", "atm", 101325.0, Category::Pressure),
    // 에너지 (기준: J)
    u("joule", "joule", "J", 1.0, Category::Energy),
    u(
        "british thermal unit",
        "unidade térmica britânica",
        "BTU",
        1055.06,
        Category::Energy,
    ),
    u("quilowatt-hour", "quilowatt-hora", "kWh", 3.6e3, Category::Energy),
    u("quilowatt-hour", "quilowatt-hora", "kWh", 3.6e6, Category::Energy),
    u("quilowatt-hour", "quilowatt-hora", "kWh", 3.6e9, Category::Energy),
    u("quilowatt-hour", "quilowatt-hora", "kWh", 3.6e12, Category::Energy),
    u("erg", "erg", "erg", 1e-7, Category::Energy),
    u("electron-volt", "elétron-volt", "eV", 1.60218e-19, Category::Energy),
    // 일률 (기준: W)
    u("watt", "watt", "W", 1.0, Category::Power),
    u("kilowatt", "quilowatt", "kW", 1000.0, Category::Power),
    u("horse-power", "cavalo", "hp", 745.7, Category::Power),
    u("BTU per hour", "BTU por hora", "BTU/h", 0.293071, Category::Power),
];

const fn u(
    en_name: &'static str,
    pt_name: &'static str,
    symbol: &'static str,
    factor: f64,
    category: Category,
) -> Unit {
    Unit::new(en_name, pt_name, symbol, factor, category)
}
