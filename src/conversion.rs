use crate::catalog::{Category, Language, Unit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 서로 다른 범주의 단위 간 변환 요청
    IncompatibleUnits { from: Category, to: Category },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::IncompatibleUnits { from, to } => write!(
                f,
                "서로 다른 범주의 단위는 변환할 수 없음: {} → {}",
                from.name(Language::Pt),
                to.name(Language::Pt)
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 값을 한 단위에서 같은 범주의 다른 단위로 변환한다.
///
/// 기준 단위(계수 1)를 거치는 선형 환산이며, 같은 단위끼리도 동일한
/// 경로를 탄다. 온도처럼 오프셋이 있는 환산은 다루지 않는다.
pub fn convert(value: f64, from: &Unit, to: &Unit) -> Result<f64, ConversionError> {
    if from.category != to.category {
        return Err(ConversionError::IncompatibleUnits {
            from: from.category,
            to: to.category,
        });
    }
    let base = value * from.factor;
    Ok(base / to.factor)
}
