// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// MANIFESTO DO PLUGIN
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Identidade, configuração e registro dos nodes, mais o dispatch das
// operações do contrato sobre qualquer node do plugin.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{BASE_URL_KEY, DEFAULT_BASE_URL};
use crate::nodes::{
    NodeError, PluginNode, ProcessContext, RemoveDuplicatesNode, RemoveDuplicatesNodeData,
    ScrapeNode, ScrapeNodeData, SearchNode, SearchNodeData, NODE_GROUP,
};
use crate::types::{
    ChartNode, EditorDefinition, Inputs, NodeInputDefinition, NodeOutputDefinition, NodeUiData,
    Outputs,
};

/// Id único do plugin
pub const PLUGIN_ID: &str = "research-api-plugin";

/// Nome exibido no host
pub const PLUGIN_NAME: &str = "Research API Plugin";

/// Id do grupo de menu de contexto
pub const CONTEXT_MENU_GROUP_ID: &str = "researchAPI";

/// Tipos de node registrados pelo plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Search,
    Scrape,
    RemoveDuplicates,
}

impl NodeKind {
    /// Todos os tipos, na ordem de registro
    pub fn all() -> &'static [NodeKind] {
        &[Self::Search, Self::Scrape, Self::RemoveDuplicates]
    }

    /// Tipo do node no grafo
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Search => SearchNode::TYPE,
            Self::Scrape => ScrapeNode::TYPE,
            Self::RemoveDuplicates => RemoveDuplicatesNode::TYPE,
        }
    }

    /// Nome exibido no registro
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Search => SearchNode::DISPLAY_NAME,
            Self::Scrape => ScrapeNode::DISPLAY_NAME,
            Self::RemoveDuplicates => RemoveDuplicatesNode::DISPLAY_NAME,
        }
    }

    /// Converte o tipo do grafo de volta para `NodeKind`
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.type_name() == type_name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Qualquer node do plugin, discriminado pelo campo `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnyChartNode {
    #[serde(rename = "searchPlugin")]
    Search(ChartNode<SearchNodeData>),
    #[serde(rename = "webscraperPlugin")]
    Scrape(ChartNode<ScrapeNodeData>),
    #[serde(rename = "remDupePlugin")]
    RemoveDuplicates(ChartNode<RemoveDuplicatesNodeData>),
}

impl AnyChartNode {
    /// Tipo do node
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Search(_) => NodeKind::Search,
            Self::Scrape(_) => NodeKind::Scrape,
            Self::RemoveDuplicates(_) => NodeKind::RemoveDuplicates,
        }
    }

    /// Id do node
    pub fn id(&self) -> &str {
        match self {
            Self::Search(node) => &node.id,
            Self::Scrape(node) => &node.id,
            Self::RemoveDuplicates(node) => &node.id,
        }
    }

    /// Título do node
    pub fn title(&self) -> &str {
        match self {
            Self::Search(node) => &node.title,
            Self::Scrape(node) => &node.title,
            Self::RemoveDuplicates(node) => &node.title,
        }
    }

    /// Lê um node serializado pelo host.
    ///
    /// Tipos desconhecidos viram [`NodeError::UnknownType`] em vez de erro
    /// genérico de desserialização.
    pub fn from_json(value: serde_json::Value) -> Result<Self, NodeError> {
        let type_name = value
            .get("type")
            .and_then(|t| t.as_str())
            .unwrap_or_default()
            .to_string();

        if NodeKind::from_type_name(&type_name).is_none() {
            return Err(NodeError::UnknownType(type_name));
        }

        Ok(serde_json::from_value(value)?)
    }
}

/// Entrada de configuração exposta ao host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSetting {
    pub key: String,
    #[serde(rename = "type")]
    pub setting_type: String,
    pub label: String,
    pub description: String,
    pub helper_text: String,
}

/// Grupo de menu de contexto
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMenuGroup {
    pub id: String,
    pub label: String,
}

/// Node registrado no host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRegistration {
    #[serde(rename = "type")]
    pub node_type: String,
    pub display_name: String,
    pub ui: NodeUiData,
}

/// Manifesto serializável do plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    pub id: String,
    pub name: String,
    pub config_spec: Vec<ConfigSetting>,
    pub context_menu_groups: Vec<ContextMenuGroup>,
    pub nodes: Vec<NodeRegistration>,
}

/// Plugin com os três nodes da Research API
#[derive(Debug, Clone, Copy, Default)]
pub struct ResearchApiPlugin {
    search: SearchNode,
    scrape: ScrapeNode,
    remove_duplicates: RemoveDuplicatesNode,
}

impl ResearchApiPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &'static str {
        PLUGIN_ID
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// Configurações aceitas pelo plugin (apenas `baseURL`)
    pub fn config_spec(&self) -> Vec<ConfigSetting> {
        vec![ConfigSetting {
            key: BASE_URL_KEY.to_string(),
            setting_type: "string".to_string(),
            label: "Base URL".to_string(),
            description: format!(
                "Base URL for the research API. Defaults to {}.",
                DEFAULT_BASE_URL.trim_start_matches("http://")
            ),
            helper_text: "github.com/hushaudio".to_string(),
        }]
    }

    pub fn context_menu_groups(&self) -> Vec<ContextMenuGroup> {
        vec![ContextMenuGroup {
            id: CONTEXT_MENU_GROUP_ID.to_string(),
            label: NODE_GROUP.to_string(),
        }]
    }

    /// Nodes registrados, na ordem do menu
    pub fn register(&self) -> Vec<NodeRegistration> {
        NodeKind::all()
            .iter()
            .map(|kind| NodeRegistration {
                node_type: kind.type_name().to_string(),
                display_name: kind.display_name().to_string(),
                ui: self.ui_data(*kind),
            })
            .collect()
    }

    pub fn manifest(&self) -> PluginManifest {
        PluginManifest {
            id: self.id().to_string(),
            name: self.name().to_string(),
            config_spec: self.config_spec(),
            context_menu_groups: self.context_menu_groups(),
            nodes: self.register(),
        }
    }

    /// Cria um node novo com os dados padrão
    pub fn create(&self, kind: NodeKind) -> AnyChartNode {
        match kind {
            NodeKind::Search => AnyChartNode::Search(self.search.create()),
            NodeKind::Scrape => AnyChartNode::Scrape(self.scrape.create()),
            NodeKind::RemoveDuplicates => {
                AnyChartNode::RemoveDuplicates(self.remove_duplicates.create())
            }
        }
    }

    pub fn ui_data(&self, kind: NodeKind) -> NodeUiData {
        match kind {
            NodeKind::Search => self.search.ui_data(),
            NodeKind::Scrape => self.scrape.ui_data(),
            NodeKind::RemoveDuplicates => self.remove_duplicates.ui_data(),
        }
    }

    pub fn input_definitions(&self, node: &AnyChartNode) -> Vec<NodeInputDefinition> {
        match node {
            AnyChartNode::Search(n) => self.search.input_definitions(&n.data),
            AnyChartNode::Scrape(n) => self.scrape.input_definitions(&n.data),
            AnyChartNode::RemoveDuplicates(n) => self.remove_duplicates.input_definitions(&n.data),
        }
    }

    pub fn output_definitions(&self, node: &AnyChartNode) -> Vec<NodeOutputDefinition> {
        match node {
            AnyChartNode::Search(n) => self.search.output_definitions(&n.data),
            AnyChartNode::Scrape(n) => self.scrape.output_definitions(&n.data),
            AnyChartNode::RemoveDuplicates(n) => {
                self.remove_duplicates.output_definitions(&n.data)
            }
        }
    }

    pub fn editors(&self, node: &AnyChartNode) -> Vec<EditorDefinition> {
        match node {
            AnyChartNode::Search(n) => self.search.editors(&n.data),
            AnyChartNode::Scrape(n) => self.scrape.editors(&n.data),
            AnyChartNode::RemoveDuplicates(n) => self.remove_duplicates.editors(&n.data),
        }
    }

    pub fn body(&self, node: &AnyChartNode) -> String {
        match node {
            AnyChartNode::Search(n) => self.search.body(&n.data),
            AnyChartNode::Scrape(n) => self.scrape.body(&n.data),
            AnyChartNode::RemoveDuplicates(n) => self.remove_duplicates.body(&n.data),
        }
    }

    /// Executa um node qualquer do plugin
    pub async fn process(
        &self,
        node: &AnyChartNode,
        inputs: &Inputs,
        ctx: &ProcessContext,
    ) -> Result<Outputs, NodeError> {
        log::debug!("▶ Processando {} ({})", node.kind(), node.id());

        let result = match node {
            AnyChartNode::Search(n) => self.search.process(&n.data, inputs, ctx).await,
            AnyChartNode::Scrape(n) => self.scrape.process(&n.data, inputs, ctx).await,
            AnyChartNode::RemoveDuplicates(n) => {
                self.remove_duplicates.process(&n.data, inputs, ctx).await
            }
        };

        if let Err(e) = &result {
            log::error!("✗ {} ({}) falhou: {}", node.kind(), node.id(), e);
        }

        result
    }
}
