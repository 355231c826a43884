//! # Research API Plugin
//!
//! Este crate implementa os nodes da **Research API** para editores de
//! workflow baseados em nodes: busca web, webscraping e remoção de
//! sentenças duplicadas.
//!
//! ## Nodes
//!
//! | Tipo               | Nome                            | O que faz                          |
//! |--------------------|---------------------------------|------------------------------------|
//! | `searchPlugin`     | Google Search                   | `GET {base}/www/search?query=...`  |
//! | `webscraperPlugin` | Webscraper                      | `GET {base}/www/scrape?url=...`    |
//! | `remDupePlugin`    | Remove Duplicates by Separator  | Deduplicação de sentenças (local)  |
//!
//! Todos seguem o mesmo molde: dados padrão → portas → strings de UI →
//! uma chamada HTTP ou uma transformação de texto.
//!
//! ## Exemplo de Uso
//!
//! ```rust,ignore
//! use research_api_plugin::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let plugin = ResearchApiPlugin::new();
//!     let ctx = ProcessContext::from_config(&load_plugin_config())?;
//!
//!     let node = plugin.create(NodeKind::Search);
//!     let outputs = plugin.process(&node, &Inputs::new(), &ctx).await?;
//!     println!("{:?}", outputs);
//!     Ok(())
//! }
//! ```

#![warn(rust_2018_idioms)]

/// Tipos do contrato de nodes do host.
///
/// - [`DataValue`]: Valor tipado de uma porta
/// - [`ChartNode`]: Instância de node no grafo
/// - Definições de portas, editores e metadados de UI
pub mod types;

/// Cliente da Research API.
///
/// Define a trait `ResearchApi` e implementações para:
/// - HTTP real (reqwest)
/// - Mock para testes
pub mod client;

/// Os três nodes do plugin e a trait `PluginNode`.
pub mod nodes;

/// Manifesto do plugin e dispatch sobre qualquer node.
pub mod plugin;

/// Utilitários de texto (deduplicação de sentenças, dedent).
pub mod utils;

/// Configuração do plugin via variáveis de ambiente.
///
/// - `RESEARCH_API_BASE_URL`: URL base (padrão: `http://localhost:4030`)
/// - `RESEARCH_API_TIMEOUT_SECS`: Timeout por requisição (padrão: 30)
pub mod config;

// Re-exports principais
pub use client::{HttpResearchApi, MockResearchApi, ResearchApi, ResearchApiError, SearchResponse};
pub use config::{load_plugin_config, PluginConfig, DEFAULT_BASE_URL};
pub use nodes::{NodeError, PluginNode, ProcessContext};
pub use plugin::{AnyChartNode, NodeKind, ResearchApiPlugin};
pub use types::*;
pub use utils::{remove_duplicate_text, DEFAULT_SEPARATOR, OUTPUT_DELIMITER};

/// Versão da biblioteca.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude com imports comuns para uso rápido.
///
/// ```rust,ignore
/// use research_api_plugin::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{HttpResearchApi, MockResearchApi, ResearchApi, SearchResponse};
    pub use crate::config::{load_plugin_config, PluginConfig};
    pub use crate::nodes::{
        PluginNode, ProcessContext, RemoveDuplicatesNode, ScrapeNode, SearchNode,
    };
    pub use crate::plugin::{AnyChartNode, NodeKind, ResearchApiPlugin};
    pub use crate::types::*;
    pub use crate::utils::remove_duplicate_text;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
