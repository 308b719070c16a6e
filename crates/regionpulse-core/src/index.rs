//! 리전별 텔레메트리 인덱스.
//!
//! 시작 시 레코드를 리전별로 그룹핑해 한 번 구축하고, 이후 읽기 전용으로만
//! 사용한다. 동기화 없이 여러 요청에서 동시에 읽어도 안전하다 (`Arc` 공유).

use crate::error::CoreError;
use crate::models::telemetry::TelemetryRecord;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// 리전 이름 → 해당 리전의 레코드 목록 (삽입 순서 유지)
#[derive(Debug, Clone, Default)]
pub struct TelemetryIndex {
    regions: HashMap<String, Vec<TelemetryRecord>>,
}

impl TelemetryIndex {
    /// 레코드 목록을 리전별로 그룹핑해 인덱스 구축
    pub fn from_records(records: impl IntoIterator<Item = TelemetryRecord>) -> Self {
        let mut regions: HashMap<String, Vec<TelemetryRecord>> = HashMap::new();
        for record in records {
            regions.entry(record.region.clone()).or_default().push(record);
        }
        Self { regions }
    }

    /// JSON 파일에서 인덱스 로드
    ///
    /// 파일 형식: `[{"region": "...", "latency_ms": n, "uptime": f}, ...]`
    /// 레코드 유효성 검증 실패 시 `CoreError::Validation` 반환.
    pub fn load_json(path: &Path) -> Result<Self, CoreError> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<TelemetryRecord> = serde_json::from_str(&raw)?;

        for record in &records {
            validate_record(record)?;
        }

        let index = Self::from_records(records);
        info!(
            "텔레메트리 로드 완료: {} ({}개 리전, {}개 레코드)",
            path.display(),
            index.region_count(),
            index.record_count()
        );
        Ok(index)
    }

    /// 내장 샘플 데이터셋 (emea/apac)
    ///
    /// `--data` 없이 실행할 때 사용.
    pub fn sample() -> Self {
        let records = vec![
            record("emea", 150.0, 0.99),
            record("emea", 170.0, 0.98),
            record("emea", 160.0, 0.97),
            record("apac", 200.0, 0.95),
            record("apac", 180.0, 0.96),
            record("apac", 175.0, 0.97),
        ];
        Self::from_records(records)
    }

    /// 리전의 레코드 목록 조회 (없으면 `None`)
    pub fn get(&self, region: &str) -> Option<&[TelemetryRecord]> {
        self.regions.get(region).map(|v| v.as_slice())
    }

    /// 리전 보유 여부
    pub fn contains(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// 리전 이름 목록 (정렬됨)
    pub fn region_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.regions.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// 리전 수
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// 전체 레코드 수
    pub fn record_count(&self) -> usize {
        self.regions.values().map(|v| v.len()).sum()
    }

    /// 인덱스가 비어 있는지 여부
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn record(region: &str, latency_ms: f64, uptime: f64) -> TelemetryRecord {
    TelemetryRecord {
        region: region.to_string(),
        latency_ms,
        uptime,
    }
}

/// 레코드 유효성 검증: 지연 시간은 유한한 음수 아님, 가동률은 [0, 1] 비율
fn validate_record(record: &TelemetryRecord) -> Result<(), CoreError> {
    if record.region.trim().is_empty() {
        return Err(CoreError::Validation {
            field: "region".to_string(),
            message: "리전 이름이 비어 있음".to_string(),
        });
    }
    if !record.latency_ms.is_finite() || record.latency_ms < 0.0 {
        return Err(CoreError::Validation {
            field: "latency_ms".to_string(),
            message: format!("유한한 0 이상 값이어야 함: {}", record.latency_ms),
        });
    }
    if !record.uptime.is_finite() || !(0.0..=1.0).contains(&record.uptime) {
        return Err(CoreError::Validation {
            field: "uptime".to_string(),
            message: format!("0과 1 사이 비율이어야 함: {}", record.uptime),
        });
    }
    Ok(())
}
