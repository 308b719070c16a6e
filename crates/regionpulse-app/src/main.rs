//! # regionpulse-app
//!
//! REGIONPULSE 서버 바이너리 진입점.
//! 설정 로드, 텔레메트리 인덱스 구축, 웹 서버 라이프사이클 관리.

use anyhow::{Context, Result};
use clap::Parser;
use regionpulse_core::config::AppConfig;
use regionpulse_core::config_manager::ConfigManager;
use regionpulse_core::index::TelemetryIndex;
use regionpulse_web::WebServer;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// REGIONPULSE 분석 서버
///
/// 리전별 텔레메트리 집계 API (평균/95백분위 지연, 평균 가동률, 임계값 초과 수)
#[derive(Parser, Debug)]
#[command(name = "regionpulse")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (없으면 기본 설정 사용, 지정 시 없으면 생성)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 텔레메트리 레코드 JSON 파일 (기본: 내장 샘플 데이터)
    #[arg(long, short = 'd')]
    data: Option<PathBuf>,

    /// 웹 서버 포트 (설정 파일보다 우선)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// 기본 지연 임계값 (밀리초, 설정 파일보다 우선)
    #[arg(long, short = 't')]
    threshold: Option<f64>,

    /// 외부 접근 허용 (기본: 127.0.0.1만)
    #[arg(long)]
    allow_external: bool,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

/// 설정 로드 후 CLI 인자 반영
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone())
            .with_context(|| format!("설정 로드 실패: {}", path.display()))?
            .get(),
        None => AppConfig::default_config(),
    };

    if let Some(port) = args.port {
        config.web.port = port;
    }
    if args.allow_external {
        config.web.allow_external = true;
    }
    if let Some(threshold) = args.threshold {
        config.analytics.default_threshold_ms = threshold;
    }
    if let Some(data) = &args.data {
        config.telemetry.data_file = Some(data.clone());
    }

    Ok(config)
}

/// 텔레메트리 인덱스 구축 (파일 또는 내장 샘플)
fn build_index(config: &AppConfig) -> Result<TelemetryIndex> {
    let index = match &config.telemetry.data_file {
        Some(path) => TelemetryIndex::load_json(path)
            .with_context(|| format!("텔레메트리 로드 실패: {}", path.display()))?,
        None => {
            warn!("텔레메트리 파일 미지정, 내장 샘플 데이터 사용");
            TelemetryIndex::sample()
        }
    };

    if index.is_empty() {
        warn!("텔레메트리 인덱스가 비어 있음 — 모든 집계 요청이 null 요약을 반환");
    }

    Ok(index)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_filter = format!(
        "regionpulse={lvl},regionpulse_app={lvl},regionpulse_core={lvl},regionpulse_web={lvl},tower_http={lvl}",
        lvl = args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    let config = resolve_config(&args)?;
    let index = Arc::new(build_index(&config)?);

    info!(
        "인덱스 구축 완료: {}개 리전, {}개 레코드 (기본 임계값 {}ms)",
        index.region_count(),
        index.record_count(),
        config.analytics.default_threshold_ms
    );

    // Ctrl-C → 종료 신호
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("종료 신호 수신 (Ctrl-C)");
            let _ = shutdown_tx.send(true);
        }
    });

    let server = WebServer::new(index, config.web.clone(), config.analytics.clone());
    server
        .run(shutdown_rx)
        .await
        .context("웹 서버 실행 실패")?;

    Ok(())
}
