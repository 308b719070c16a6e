//! # regionpulse-web
//!
//! 리전 텔레메트리 분석 API 서버.
//! Axum 기반 REST API.
//!
//! ## 기능
//! - 리전별 집계 요약 조회 (POST /analytics)
//! - 리전 인벤토리 조회 (GET /regions)
//! - 리전별 원본 레코드 조회 (GET /records)
//! - 헬스 체크 (GET /health)

pub mod error;
pub mod handlers;
pub mod routes;

use axum::Router;
use chrono::{DateTime, Utc};
use regionpulse_core::config::{AnalyticsConfig, WebConfig};
use regionpulse_core::index::TelemetryIndex;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// 포트 바인드 최대 시도 횟수
const MAX_PORT_ATTEMPTS: u16 = 10;

/// 웹 서버 애플리케이션 상태
///
/// 인덱스는 시작 시 한 번 구축된 읽기 전용 값이다. `Arc`로 공유하며
/// 동시 요청에서 동기화 없이 읽는다.
#[derive(Clone)]
pub struct AppState {
    /// 텔레메트리 인덱스
    pub index: Arc<TelemetryIndex>,
    /// 집계 설정 (기본 임계값, 가동률 자릿수)
    pub analytics: AnalyticsConfig,
    /// 프로세스 시작 시각
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// 새 애플리케이션 상태 생성
    pub fn new(index: Arc<TelemetryIndex>, analytics: AnalyticsConfig) -> Self {
        Self {
            index,
            analytics,
            started_at: Utc::now(),
        }
    }
}

/// 상태가 주입된 전체 라우터 구성
///
/// CORS는 모든 origin/method/header를 허용한다 (preflight 포함).
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::api_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 분석 API 서버
pub struct WebServer {
    config: WebConfig,
    state: AppState,
}

impl WebServer {
    /// 새 웹 서버 생성
    pub fn new(index: Arc<TelemetryIndex>, config: WebConfig, analytics: AnalyticsConfig) -> Self {
        Self {
            config,
            state: AppState::new(index, analytics),
        }
    }

    /// 서버 실행
    ///
    /// 기본 포트에서 시작하여, 포트가 이미 사용 중이면 다음 포트를 시도한다.
    /// 최대 10개 포트를 시도한 후 실패하면 에러를 반환한다.
    ///
    /// # Arguments
    /// * `shutdown_rx` - 종료 신호 수신 채널
    pub async fn run(self, shutdown_rx: watch::Receiver<bool>) -> Result<(), std::io::Error> {
        let host = if self.config.allow_external {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let app = build_router(self.state);

        let base_port = self.config.port;
        let mut last_error = None;

        for attempt in 0..MAX_PORT_ATTEMPTS {
            let port = base_port.saturating_add(attempt);

            // 포트 오버플로우 체크
            if port < base_port && attempt > 0 {
                break;
            }

            let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
                Ok(a) => a,
                Err(e) => {
                    error!("잘못된 주소 {}:{} — {}", host, port, e);
                    continue;
                }
            };

            match TcpListener::bind(addr).await {
                Ok(listener) => {
                    if attempt > 0 {
                        warn!("포트 {} 사용 불가, 대체 포트 {} 사용", base_port, port);
                    }
                    info!("분석 API 서버 시작: http://{}", addr);

                    let mut rx = shutdown_rx.clone();
                    axum::serve(listener, app)
                        .with_graceful_shutdown(async move {
                            loop {
                                if *rx.borrow() {
                                    info!("웹 서버 종료 신호 수신");
                                    break;
                                }
                                if rx.changed().await.is_err() {
                                    break;
                                }
                            }
                        })
                        .await?;

                    info!("분석 API 서버 종료");
                    return Ok(());
                }
                Err(e) => {
                    if e.kind() == std::io::ErrorKind::AddrInUse {
                        warn!("포트 {} 이미 사용 중, 다음 포트 시도...", port);
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrInUse,
                format!(
                    "포트 {}-{} 모두 사용 불가",
                    base_port,
                    base_port.saturating_add(MAX_PORT_ATTEMPTS - 1)
                ),
            )
        }))
    }

    /// 서버 URL 반환
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.config.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(TelemetryIndex::sample()),
            AnalyticsConfig::default(),
        )
    }

    #[test]
    fn web_server_url() {
        let server = WebServer::new(
            Arc::new(TelemetryIndex::sample()),
            WebConfig::default(),
            AnalyticsConfig::default(),
        );
        assert_eq!(server.url(), "http://localhost:8000");
    }

    #[test]
    fn router_builds() {
        let _app = build_router(test_state());
    }

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn max_port_attempts_is_reasonable() {
        assert!(MAX_PORT_ATTEMPTS >= 1);
        assert!(MAX_PORT_ATTEMPTS <= 100);
    }

    #[test]
    fn state_shares_index() {
        let state = test_state();
        let cloned = state.clone();
        assert_eq!(cloned.index.record_count(), state.index.record_count());
        assert!(Arc::ptr_eq(&cloned.index, &state.index));
    }
}
