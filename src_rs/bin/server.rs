// 목적:
// - 회사 검색/대시보드 HTTP 서버 실행 파일.
//
// 설명:
// - 환경 변수에서 저장소/서버 설정을 읽고 axum 라우터를 띄운다.
// - 로그 레벨은 RUST_LOG로 조정한다(기본 info).

use std::sync::Arc;

use company_search::core::config::{OpenSearchConfigPayload, ServerConfig};
use company_search::http::handlers::AppState;
use company_search::http::router::build_router;
use company_search::index::opensearch_repo::OpenSearchRepository;
use company_search::index::store::DocumentStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server_config = ServerConfig::from_env()?;
    let store_config = OpenSearchConfigPayload::from_env()?;
    let index_name = store_config.index_name.clone();
    let repository = OpenSearchRepository::new(store_config)?;

    if !repository.ping().await? {
        tracing::warn!(url = %repository.config().url, "OpenSearch에 연결할 수 없습니다. 요청 시 다시 시도합니다");
    }

    let state = Arc::new(AppState {
        store: Arc::new(repository),
        index_name,
    });
    let app = build_router(state);

    tracing::info!(addr = %server_config.bind_addr, "=== Search API 서버 시작 ===");
    let listener = tokio::net::TcpListener::bind(server_config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("=== Search API 서버 종료 ===");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "종료 시그널 대기 실패");
    }
}
