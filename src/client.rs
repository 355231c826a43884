// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CLIENTE DA RESEARCH API
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Trait e implementações para busca web e scraping via Research API.
// Cada operação é um único GET: sem retry, backoff, paginação ou streaming.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

use crate::config::{resolve_base_url, PluginConfig};

/// Path do endpoint de busca
pub const SEARCH_PATH: &str = "/www/search";

/// Path do endpoint de scraping
pub const SCRAPE_PATH: &str = "/www/scrape";

/// Erros do cliente da Research API
#[derive(Debug, thiserror::Error)]
pub enum ResearchApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Research API returned HTTP {status} for {url}")]
    StatusError { status: u16, url: String },

    #[error("Invalid response format: {0}")]
    ParseError(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Resposta do endpoint de busca.
///
/// `string` traz os resultados já formatados em texto e `array` os
/// resultados estruturados. Campos ausentes ou `null` viram vazio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub string: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub array: Vec<serde_json::Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Trait principal para clientes da Research API
///
/// Permite trocar o cliente HTTP real por um mock nos testes.
#[async_trait]
pub trait ResearchApi: Send + Sync {
    /// Executa uma busca web
    async fn search(&self, query: &str) -> Result<SearchResponse, ResearchApiError>;

    /// Faz scraping de uma URL e devolve o JSON da API sem alterações
    async fn scrape(&self, url: &str) -> Result<serde_json::Value, ResearchApiError>;
}

/// Monta a URL de busca: `{base}/www/search?query=<q>`
pub fn build_search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}{}?query={}",
        resolve_base_url(Some(base_url)),
        SEARCH_PATH,
        urlencoding::encode(query)
    )
}

/// Monta a URL de scraping: `{base}/www/scrape?url=<u>`
pub fn build_scrape_url(base_url: &str, target: &str) -> String {
    format!(
        "{}{}?url={}",
        resolve_base_url(Some(base_url)),
        SCRAPE_PATH,
        urlencoding::encode(target)
    )
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO HTTP
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Cliente HTTP para a Research API
#[derive(Debug, Clone)]
pub struct HttpResearchApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpResearchApi {
    /// Cria o cliente a partir da configuração.
    ///
    /// Falha se a URL base não for uma URL absoluta válida.
    pub fn new(config: &PluginConfig) -> Result<Self, ResearchApiError> {
        let base_url = resolve_base_url(Some(&config.base_url));
        url::Url::parse(&base_url)
            .map_err(|e| ResearchApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            base_url,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
        })
    }

    /// URL base efetiva (sem barra final)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, ResearchApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        log::debug!("🌐 GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ResearchApiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("⚠ Research API respondeu {} para {}", status, url);
            return Err(ResearchApiError::StatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResearchApiError::NetworkError(e.to_string()))?;

        log::debug!("📥 {} bytes recebidos de {}", body.len(), url);

        serde_json::from_str(&body).map_err(|e| ResearchApiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ResearchApi for HttpResearchApi {
    async fn search(&self, query: &str) -> Result<SearchResponse, ResearchApiError> {
        let url = build_search_url(&self.base_url, query);
        let response: SearchResponse = self.get_json(&url).await?;

        log::info!(
            "🔍 Busca concluída | query: {:?} | resultados: {}",
            query,
            response.array.len()
        );

        Ok(response)
    }

    async fn scrape(&self, target: &str) -> Result<serde_json::Value, ResearchApiError> {
        let url = build_scrape_url(&self.base_url, target);
        let response = self.get_json(&url).await?;

        log::info!("📄 Scrape concluído | url: {}", target);

        Ok(response)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// IMPLEMENTAÇÃO MOCK PARA TESTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Cliente mock para testes e uso offline
#[derive(Debug, Default)]
pub struct MockResearchApi {
    pub mock_search: Option<SearchResponse>,
    pub mock_scrape: Option<serde_json::Value>,
}

impl MockResearchApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, response: SearchResponse) -> Self {
        self.mock_search = Some(response);
        self
    }

    pub fn with_scrape(mut self, response: serde_json::Value) -> Self {
        self.mock_scrape = Some(response);
        self
    }
}

#[async_trait]
impl ResearchApi for MockResearchApi {
    async fn search(&self, query: &str) -> Result<SearchResponse, ResearchApiError> {
        Ok(self.mock_search.clone().unwrap_or_else(|| SearchResponse {
            string: format!("Mock results for {}", query),
            array: vec![serde_json::json!({ "title": "Mock Title", "query": query })],
        }))
    }

    async fn scrape(&self, url: &str) -> Result<serde_json::Value, ResearchApiError> {
        Ok(self
            .mock_scrape
            .clone()
            .unwrap_or_else(|| serde_json::json!({ "url": url, "text": "Mock content" })))
    }
}
