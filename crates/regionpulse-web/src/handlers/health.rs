//! 헬스 체크 API 핸들러.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::AppState;

/// 헬스 체크 응답
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 서비스 상태 ("ok")
    pub status: String,
    /// 로드된 리전 수
    pub regions: usize,
    /// 로드된 레코드 수
    pub records: usize,
    /// 프로세스 시작 시각 (RFC3339)
    pub started_at: String,
}

/// 헬스 체크
///
/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        regions: state.index.region_count(),
        records: state.index.record_count(),
        started_at: state.started_at.to_rfc3339(),
    })
}
