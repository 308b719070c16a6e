//! 집계 API 핸들러.

use axum::extract::State;
use axum::Json;
use regionpulse_core::analytics::summarize_with;
use regionpulse_core::models::telemetry::RegionSummary;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// 집계 요청 본문
///
/// `threshold_ms`가 없으면 설정의 기본 임계값을 적용한다.
/// 기본값 해석은 이 전송 경계에서 끝나며, 집계 함수는 항상 확정된
/// 임계값만 받는다.
#[derive(Debug, Deserialize)]
pub struct AnalyticsRequest {
    /// 조회할 리전 이름 목록
    pub regions: Vec<String>,
    /// 지연 시간 임계값 (밀리초, 기본: 설정값)
    #[serde(default)]
    pub threshold_ms: Option<f64>,
}

/// 리전별 집계 요약 조회
///
/// POST /analytics
/// 본문: `{"regions": ["emea", ...], "threshold_ms": 160}`
///
/// 응답은 리전 이름 → 요약 매핑. 인덱스에 없는 리전은 모든 필드가
/// null인 요약을 받는다 (에러 아님).
pub async fn post_analytics(
    State(state): State<AppState>,
    Json(request): Json<AnalyticsRequest>,
) -> Result<Json<BTreeMap<String, RegionSummary>>, ApiError> {
    let threshold_ms = request
        .threshold_ms
        .unwrap_or(state.analytics.default_threshold_ms);

    if !threshold_ms.is_finite() || threshold_ms < 0.0 {
        return Err(ApiError::BadRequest(format!(
            "threshold_ms는 유한한 0 이상 값이어야 함: {threshold_ms}"
        )));
    }

    debug!(
        regions = request.regions.len(),
        threshold_ms, "집계 요청 처리"
    );

    let summaries = summarize_with(
        &state.index,
        &request.regions,
        threshold_ms,
        state.analytics.uptime_precision,
    );

    Ok(Json(summaries))
}
