//! API 라우트 정의.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::AppState;

/// API 라우트 생성
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // 리전별 집계 요약
        .route("/analytics", post(handlers::analytics::post_analytics))
        // 리전 인벤토리
        .route("/regions", get(handlers::regions::list_regions))
        // 리전별 원본 레코드
        .route("/records", get(handlers::regions::get_region_records))
        // 헬스 체크
        .route("/health", get(handlers::health::health))
}
