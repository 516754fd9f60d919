// 목적:
// - 문서 저장소 연결 설정과 서버 설정을 정의한다.
//
// 설명:
// - 브릿지 페이로드(JSON)로 전달받거나 환경 변수에서 읽어 구성한다.
// - 구성 시점에 값을 검증해 잘못된 설정이 요청 처리 단계까지 내려가지 않게 한다.
//
// 디자인 패턴:
// - 설정 페이로드(Config Payload) + 생성 시 검증(Validate on Build).
//
// 참조:
// - src_rs/index/opensearch_repo.rs
// - src_rs/bin/server.rs

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::core::errors::{CoreError, CoreResult};
use crate::index::wire::validate_index_name;

pub const DEFAULT_INDEX_NAME: &str = "companies";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenSearchConfigPayload {
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_index_name")]
    pub index_name: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_index_name() -> String {
    DEFAULT_INDEX_NAME.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl OpenSearchConfigPayload {
    /// 환경 변수에서 저장소 설정을 읽는다.
    ///
    /// `OPENSEARCH_HOST`(기본 localhost), `OPENSEARCH_PORT`(기본 9200),
    /// `OPENSEARCH_USE_SSL`(기본 true), `OPENSEARCH_USERNAME`(기본 admin),
    /// `OPENSEARCH_PASSWORD`, `OPENSEARCH_INDEX`, `OPENSEARCH_TIMEOUT_MS`를 사용한다.
    /// 자체 서명 인증서 환경을 위해 SSL 사용 시 인증서 검증을 끈다.
    pub fn from_env() -> CoreResult<Self> {
        let host = env_or("OPENSEARCH_HOST", "localhost");
        let port = env_or("OPENSEARCH_PORT", "9200")
            .parse::<u16>()
            .map_err(|error| {
                CoreError::InvalidConfig(format!("OPENSEARCH_PORT 파싱 실패: {}", error))
            })?;
        let use_ssl = env_or("OPENSEARCH_USE_SSL", "true").eq_ignore_ascii_case("true");
        let timeout_ms = env_or("OPENSEARCH_TIMEOUT_MS", &DEFAULT_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|error| {
                CoreError::InvalidConfig(format!("OPENSEARCH_TIMEOUT_MS 파싱 실패: {}", error))
            })?;

        let scheme = if use_ssl { "https" } else { "http" };
        let config = Self {
            url: format!("{}://{}:{}", scheme, host, port),
            username: Some(env_or("OPENSEARCH_USERNAME", "admin")),
            password: std::env::var("OPENSEARCH_PASSWORD").ok(),
            index_name: env_or("OPENSEARCH_INDEX", DEFAULT_INDEX_NAME),
            timeout_ms,
            accept_invalid_certs: use_ssl,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.url.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "opensearch.url은 비어 있을 수 없습니다".to_string(),
            ));
        }

        if self.timeout_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "opensearch.timeout_ms는 1 이상이어야 합니다".to_string(),
            ));
        }

        validate_index_name(&self.index_name, "opensearch.index_name")
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// `SEARCH_API_BIND` 환경 변수에서 바인드 주소를 읽는다.
    pub fn from_env() -> CoreResult<Self> {
        let raw = env_or("SEARCH_API_BIND", DEFAULT_BIND_ADDR);
        let bind_addr = raw.parse::<SocketAddr>().map_err(|error| {
            CoreError::InvalidConfig(format!("SEARCH_API_BIND 파싱 실패: {}, value={}", error, raw))
        })?;
        Ok(Self { bind_addr })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
