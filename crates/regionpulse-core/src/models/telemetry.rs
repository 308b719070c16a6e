//! 텔레메트리 모델.
//!
//! 리전별 측정 레코드와 집계 요약을 정의.

use serde::{Deserialize, Serialize};

/// 단일 텔레메트리 레코드
///
/// 시작 시 한 번 로드되며 이후 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// 리전 이름 (예: "emea", "apac")
    pub region: String,
    /// 측정 지연 시간 (밀리초)
    pub latency_ms: f64,
    /// 가동률 (0.0 ~ 1.0 비율)
    pub uptime: f64,
}

/// 리전별 집계 요약
///
/// 모든 필드가 `None`이면 해당 리전에 데이터가 없음을 의미한다.
/// 누락 리전의 `breaches`도 `None`이다 (0이 아님).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    /// 평균 지연 시간 (밀리초, 소수점 2자리)
    pub avg_latency: Option<f64>,
    /// 95 백분위 지연 시간 (밀리초, 선형 보간, 소수점 2자리)
    pub p95_latency: Option<f64>,
    /// 평균 가동률 (설정된 자릿수로 반올림, 기본 4자리)
    pub avg_uptime: Option<f64>,
    /// 임계값을 초과(strict)한 레코드 수
    pub breaches: Option<u64>,
}

impl RegionSummary {
    /// 데이터 없는 리전의 요약 (모든 필드 null)
    pub fn empty() -> Self {
        Self {
            avg_latency: None,
            p95_latency: None,
            avg_uptime: None,
            breaches: None,
        }
    }

    /// 데이터가 하나라도 있는지 여부
    pub fn has_data(&self) -> bool {
        self.avg_latency.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serde_roundtrip() {
        let summary = RegionSummary {
            avg_latency: Some(160.0),
            p95_latency: Some(169.0),
            avg_uptime: Some(0.98),
            breaches: Some(1),
        };

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: RegionSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, summary);
        assert!(deserialized.has_data());
    }

    #[test]
    fn empty_summary_has_no_data() {
        assert!(!RegionSummary::empty().has_data());
    }

    #[test]
    fn record_deserializes_from_original_shape() {
        let json = r#"{"region": "apac", "latency_ms": 200, "uptime": 0.95}"#;
        let record: TelemetryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.region, "apac");
        assert_eq!(record.latency_ms, 200.0);
    }
}
