//! 리전 인벤토리 API 핸들러.

use axum::extract::{Query, State};
use axum::Json;
use regionpulse_core::models::telemetry::TelemetryRecord;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

/// 리전 정보
#[derive(Debug, Serialize)]
pub struct RegionInfo {
    /// 리전 이름
    pub name: String,
    /// 보유 레코드 수
    pub record_count: usize,
}

/// 리전 인벤토리 응답
#[derive(Debug, Serialize)]
pub struct RegionsResponse {
    /// 리전 목록 (이름순)
    pub regions: Vec<RegionInfo>,
}

/// 레코드 조회 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    /// 조회할 리전 이름
    pub region: String,
}

/// 리전별 레코드 응답
#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    /// 리전 이름
    pub region: String,
    /// 해당 리전의 레코드 (로드 순서)
    pub records: Vec<TelemetryRecord>,
}

/// 로드된 리전 인벤토리 조회
///
/// GET /regions
pub async fn list_regions(State(state): State<AppState>) -> Json<RegionsResponse> {
    let regions = state
        .index
        .region_names()
        .into_iter()
        .map(|name| RegionInfo {
            record_count: state.index.get(name).map(|r| r.len()).unwrap_or(0),
            name: name.to_string(),
        })
        .collect();

    Json(RegionsResponse { regions })
}

/// 한 리전의 원본 레코드 조회
///
/// GET /records?region=emea
///
/// 집계와 달리 목록 조회는 없는 리전을 404로 처리한다.
pub async fn get_region_records(
    State(state): State<AppState>,
    Query(params): Query<RecordsQuery>,
) -> Result<Json<RecordsResponse>, ApiError> {
    let records = state
        .index
        .get(&params.region)
        .ok_or_else(|| ApiError::NotFound(format!("리전: {}", params.region)))?;

    Ok(Json(RecordsResponse {
        region: params.region,
        records: records.to_vec(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_response_serializes() {
        let response = RegionsResponse {
            regions: vec![
                RegionInfo {
                    name: "apac".to_string(),
                    record_count: 3,
                },
                RegionInfo {
                    name: "emea".to_string(),
                    record_count: 3,
                },
            ],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"name\":\"apac\""));
        assert!(json.contains("\"record_count\":3"));
    }

    #[test]
    fn records_query_deserializes() {
        let query: RecordsQuery = serde_json::from_str(r#"{"region": "emea"}"#).unwrap();
        assert_eq!(query.region, "emea");
    }
}
