//! # regionpulse-core
//!
//! REGIONPULSE 도메인 모델, 텔레메트리 인덱스, 집계 로직, 에러 타입.
//! HTTP 레이어와 바이너리가 공유하는 핵심 타입을 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`index`] — 리전별 텔레메트리 인덱스 (로드 후 읽기 전용)
//! - [`analytics`] — 리전 집계 함수 (순수 함수, I/O 없음)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)
//! - [`error`] — 핵심 에러 타입 (thiserror)

pub mod analytics;
pub mod config;
pub mod config_manager;
pub mod error;
pub mod index;
pub mod models;

pub use analytics::{summarize, summarize_with};
pub use error::CoreError;
pub use index::TelemetryIndex;
pub use models::telemetry::{RegionSummary, TelemetryRecord};

#[cfg(test)]
mod tests {
    use crate::models::telemetry::{RegionSummary, TelemetryRecord};

    #[test]
    fn telemetry_record_serde_roundtrip() {
        let record = TelemetryRecord {
            region: "emea".to_string(),
            latency_ms: 150.0,
            uptime: 0.99,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TelemetryRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.region, "emea");
        assert_eq!(deserialized.latency_ms, 150.0);
        assert_eq!(deserialized.uptime, 0.99);
    }

    #[test]
    fn empty_summary_serializes_nulls() {
        let summary = RegionSummary::empty();
        let json = serde_json::to_string(&summary).unwrap();

        assert!(json.contains("\"avg_latency\":null"));
        assert!(json.contains("\"p95_latency\":null"));
        assert!(json.contains("\"avg_uptime\":null"));
        assert!(json.contains("\"breaches\":null"));
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.web.port, 8000);
        assert!(!config.web.allow_external);
        assert_eq!(config.analytics.default_threshold_ms, 180.0);
        assert_eq!(config.analytics.uptime_precision, 4);
        assert!(config.telemetry.data_file.is_none());
    }
}
