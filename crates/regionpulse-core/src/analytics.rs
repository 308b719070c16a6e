//! 리전 집계 로직.
//!
//! 인덱스와 요청(리전 목록 + 임계값)을 받아 리전별 요약을 계산하는 순수 함수.
//! I/O 없음, 내부 상태 없음. 인덱스에 없는 리전은 에러가 아니라 정상적인
//! "데이터 없음" 케이스로 처리한다 (모든 필드 null).

use crate::index::TelemetryIndex;
use crate::models::telemetry::RegionSummary;
use std::collections::BTreeMap;

/// 지연 시간 반올림 자릿수
const LATENCY_PRECISION: i32 = 2;

/// 가동률 기본 반올림 자릿수
pub const DEFAULT_UPTIME_PRECISION: i32 = 4;

/// 요청된 리전별 집계 요약 계산
///
/// - `avg_latency`: 지연 시간 산술 평균 (소수점 2자리)
/// - `p95_latency`: 95 백분위 (선형 보간, 소수점 2자리)
/// - `avg_uptime`: 가동률 산술 평균 (소수점 4자리)
/// - `breaches`: `latency_ms > threshold_ms` (strict)인 레코드 수
///
/// 인덱스에 없는 리전은 모든 필드가 `None`인 요약을 받는다.
pub fn summarize(
    index: &TelemetryIndex,
    regions: &[String],
    threshold_ms: f64,
) -> BTreeMap<String, RegionSummary> {
    summarize_with(index, regions, threshold_ms, DEFAULT_UPTIME_PRECISION)
}

/// 가동률 반올림 자릿수를 지정하는 [`summarize`] 변형
pub fn summarize_with(
    index: &TelemetryIndex,
    regions: &[String],
    threshold_ms: f64,
    uptime_precision: i32,
) -> BTreeMap<String, RegionSummary> {
    let mut result = BTreeMap::new();

    for region in regions {
        let summary = match index.get(region) {
            Some(records) if !records.is_empty() => {
                let latencies: Vec<f64> = records.iter().map(|r| r.latency_ms).collect();
                let uptimes: Vec<f64> = records.iter().map(|r| r.uptime).collect();
                let breaches = latencies.iter().filter(|&&l| l > threshold_ms).count() as u64;

                RegionSummary {
                    avg_latency: Some(round_to(mean(&latencies), LATENCY_PRECISION)),
                    p95_latency: Some(round_to(percentile(&latencies, 95.0), LATENCY_PRECISION)),
                    avg_uptime: Some(round_to(mean(&uptimes), uptime_precision)),
                    breaches: Some(breaches),
                }
            }
            _ => RegionSummary::empty(),
        };
        result.insert(region.clone(), summary);
    }

    result
}

/// 산술 평균. 호출자가 비어 있지 않음을 보장한다.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// 선형 보간 백분위.
///
/// rank = (p/100) × (n−1), floor/ceil 순위 사이를 보간한다
/// (numpy `percentile` 기본 방식과 동일). 호출자가 비어 있지 않음을 보장한다.
fn percentile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = p / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// 지정 자릿수로 반올림 (절반은 0에서 먼 쪽으로)
fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
