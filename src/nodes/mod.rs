// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// NODES DO PLUGIN
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Todos os nodes seguem o mesmo molde:
// dados padrão → portas → strings de UI → uma chamada HTTP ou transformação.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

mod remove_duplicates;
mod scrape;
mod search;

pub use remove_duplicates::{RemoveDuplicatesNode, RemoveDuplicatesNodeData};
pub use scrape::{ScrapeNode, ScrapeNodeData};
pub use search::{SearchNode, SearchNodeData};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::client::{HttpResearchApi, ResearchApi, ResearchApiError};
use crate::config::PluginConfig;
use crate::types::{
    ChartNode, EditorDefinition, Inputs, NodeInputDefinition, NodeOutputDefinition, NodeUiData,
    Outputs,
};
use crate::utils::dedent;

/// Grupo de menu de contexto compartilhado pelos nodes
pub const NODE_GROUP: &str = "Research API";

/// Texto exibido no corpo quando o valor vem de uma porta
pub const USING_INPUT: &str = "(Using Input)";

/// Erros de processamento de node
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error(transparent)]
    Api(#[from] ResearchApiError),

    #[error("Invalid node data: {0}")]
    InvalidData(#[from] serde_json::Error),

    #[error("Unknown node type: {0}")]
    UnknownType(String),
}

/// Contexto de execução passado para `process`.
///
/// Carrega o cliente da Research API já configurado com a URL base do host.
#[derive(Clone)]
pub struct ProcessContext {
    api: Arc<dyn ResearchApi>,
}

impl ProcessContext {
    /// Cria contexto com um cliente qualquer (mock ou real)
    pub fn new(api: Arc<dyn ResearchApi>) -> Self {
        Self { api }
    }

    /// Cria contexto com o cliente HTTP real
    pub fn from_config(config: &PluginConfig) -> Result<Self, ResearchApiError> {
        Ok(Self::new(Arc::new(HttpResearchApi::new(config)?)))
    }

    /// Cliente da Research API
    pub fn api(&self) -> &dyn ResearchApi {
        self.api.as_ref()
    }
}

impl std::fmt::Debug for ProcessContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessContext").finish_non_exhaustive()
    }
}

/// Contrato de um node do plugin.
///
/// Cada tipo de node implementa esta trait uma vez. As operações espelham
/// os hooks do host: criação, portas, editores, corpo e processamento.
#[async_trait]
pub trait PluginNode: Send + Sync {
    /// Dados persistidos do node
    type Data: Clone + Serialize + DeserializeOwned + Send + Sync;

    /// Tipo do node no grafo (ex: `searchPlugin`)
    const TYPE: &'static str;

    /// Nome exibido no registro do host
    const DISPLAY_NAME: &'static str;

    /// Cria uma nova instância com os dados padrão
    fn create(&self) -> ChartNode<Self::Data>;

    /// Portas de entrada, dependendo dos toggles `useXInput`
    fn input_definitions(&self, data: &Self::Data) -> Vec<NodeInputDefinition>;

    /// Portas de saída (fixas por tipo de node)
    fn output_definitions(&self, data: &Self::Data) -> Vec<NodeOutputDefinition>;

    /// Metadados de UI
    fn ui_data(&self) -> NodeUiData;

    /// Editores do painel do node
    fn editors(&self, data: &Self::Data) -> Vec<EditorDefinition>;

    /// Corpo renderizado no grafo
    fn body(&self, data: &Self::Data) -> String;

    /// Executa o node
    async fn process(
        &self,
        data: &Self::Data,
        inputs: &Inputs,
        ctx: &ProcessContext,
    ) -> Result<Outputs, NodeError>;
}

/// Escolhe entre o valor da porta e o valor salvo no node.
///
/// A porta só vale quando o toggle está ligado e ela carrega um valor;
/// caso contrário usa o dado do node.
pub fn input_or_data(inputs: &Inputs, port: &str, use_input: bool, data_value: &str) -> String {
    if use_input {
        if let Some(value) = inputs.get(port) {
            return value.as_string();
        }
    }
    data_value.to_string()
}

/// Valor exibido no corpo: o dado do node ou o marcador de porta
pub(crate) fn body_value(use_input: bool, data_value: &str) -> &str {
    if use_input {
        USING_INPUT
    } else {
        data_value
    }
}

/// Monta o corpo a partir de um template indentado com um `{}`.
///
/// A indentação sai do template antes do valor entrar, então valores com
/// quebra de linha não alteram o dedent.
pub(crate) fn render_body(template: &str, value: &str) -> String {
    dedent(template).replacen("{}", value, 1)
}
