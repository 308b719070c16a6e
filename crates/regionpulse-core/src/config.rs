//! 애플리케이션 설정 구조체.
//!
//! 웹 서버 포트, 집계 상수(기본 임계값, 가동률 자릿수), 텔레메트리 소스 경로를
//! 정의한다. [`crate::config_manager::ConfigManager`]를 통해 JSON 파일에서
//! 로드/저장된다.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 웹 서버 설정
    #[serde(default)]
    pub web: WebConfig,
    /// 집계 설정
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// 텔레메트리 소스 설정
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self::default()
    }
}

// ============================================================
// 웹 서버 설정
// ============================================================

/// 웹 서버 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// 웹 서버 포트 (기본: 8000)
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// 외부 접근 허용 여부 (false: 127.0.0.1 only)
    #[serde(default)]
    pub allow_external: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_web_port(),
            allow_external: false,
        }
    }
}

fn default_web_port() -> u16 {
    8000
}

// ============================================================
// 집계 설정
// ============================================================

/// 집계 설정 — 요청이 생략한 값의 기본치
///
/// 임계값 기본치와 가동률 반올림 자릿수는 배포마다 달랐던 값이라
/// 고정 동작이 아닌 설정 상수로 둔다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// 요청에 threshold_ms가 없을 때 사용하는 기본 임계값 (밀리초)
    #[serde(default = "default_threshold_ms")]
    pub default_threshold_ms: f64,
    /// 가동률 평균 반올림 자릿수 (기본: 4)
    #[serde(default = "default_uptime_precision")]
    pub uptime_precision: i32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_threshold_ms: default_threshold_ms(),
            uptime_precision: default_uptime_precision(),
        }
    }
}

fn default_threshold_ms() -> f64 {
    180.0
}

fn default_uptime_precision() -> i32 {
    4
}

// ============================================================
// 텔레메트리 소스 설정
// ============================================================

/// 텔레메트리 소스 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// 레코드 JSON 파일 경로 (없으면 내장 샘플 데이터 사용)
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}
