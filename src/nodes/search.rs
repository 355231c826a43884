// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// NODE DE BUSCA WEB
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{
    body_value, input_or_data, render_body, NodeError, PluginNode, ProcessContext, NODE_GROUP,
};
use crate::types::{
    ChartNode, DataType, DataValue, EditorDefinition, Inputs, NodeInputDefinition,
    NodeOutputDefinition, NodeUiData, Outputs,
};

/// Dados do node de busca
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNodeData {
    pub search_query: String,
    #[serde(default)]
    pub use_search_query_input: bool,
}

impl Default for SearchNodeData {
    fn default() -> Self {
        Self {
            search_query: "Whats new in AI?".to_string(),
            use_search_query_input: false,
        }
    }
}

/// Node que consulta `/www/search` e expõe texto formatado e lista de resultados
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchNode;

#[async_trait]
impl PluginNode for SearchNode {
    type Data = SearchNodeData;

    const TYPE: &'static str = "searchPlugin";
    const DISPLAY_NAME: &'static str = "Google Search";

    fn create(&self) -> ChartNode<SearchNodeData> {
        ChartNode::new("Google Search Node", SearchNodeData::default())
    }

    fn input_definitions(&self, data: &SearchNodeData) -> Vec<NodeInputDefinition> {
        let mut inputs = Vec::new();
        if data.use_search_query_input {
            inputs.push(NodeInputDefinition::new(
                "searchQuery",
                DataType::String,
                "Search Query",
            ));
        }
        log::trace!("searchPlugin inputs: {:?}", inputs);
        inputs
    }

    fn output_definitions(&self, _data: &SearchNodeData) -> Vec<NodeOutputDefinition> {
        vec![
            NodeOutputDefinition::new("resultsFormatted", DataType::String, "Results String"),
            NodeOutputDefinition::new("resultsArray", DataType::ObjectArray, "Results Array"),
        ]
    }

    fn ui_data(&self) -> NodeUiData {
        NodeUiData {
            context_menu_title: "Google Search".into(),
            group: NODE_GROUP.into(),
            info_box_body: "This is an search plugin node.".into(),
            info_box_title: "Google Search Node".into(),
        }
    }

    fn editors(&self, _data: &SearchNodeData) -> Vec<EditorDefinition> {
        vec![EditorDefinition::string(
            "searchQuery",
            "useSearchQueryInput",
            "Search Query",
        )]
    }

    fn body(&self, data: &SearchNodeData) -> String {
        render_body(
            "
            Google Search Node
            Data: {}
            ",
            body_value(data.use_search_query_input, &data.search_query),
        )
    }

    async fn process(
        &self,
        data: &SearchNodeData,
        inputs: &Inputs,
        ctx: &ProcessContext,
    ) -> Result<Outputs, NodeError> {
        let query = input_or_data(
            inputs,
            "searchQuery",
            data.use_search_query_input,
            &data.search_query,
        );
        log::debug!("searchPlugin query: {:?}", query);

        let response = ctx.api().search(&query).await?;

        let mut outputs = Outputs::new();
        outputs.insert(
            "resultsFormatted".into(),
            DataValue::String(response.string),
        );
        outputs.insert(
            "resultsArray".into(),
            DataValue::ObjectArray(response.array),
        );
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ResearchApiError, SearchResponse};
    use crate::nodes::test_support::{context, MockApi};
    use serde_json::json;

    #[test]
    fn test_create_defaults() {
        let node = SearchNode.create();
        assert_eq!(node.title, "Google Search Node");
        assert_eq!(node.data.search_query, "Whats new in AI?");
        assert!(!node.data.use_search_query_input);
        assert_eq!(node.visual_data.width, 200.0);
    }

    #[test]
    fn test_input_port_follows_toggle() {
        let mut data = SearchNodeData::default();
        assert!(SearchNode.input_definitions(&data).is_empty());

        data.use_search_query_input = true;
        let inputs = SearchNode.input_definitions(&data);
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].id, "searchQuery");
    }

    #[test]
    fn test_body() {
        let mut data = SearchNodeData::default();
        assert_eq!(
            SearchNode.body(&data),
            "Google Search Node\nData: Whats new in AI?"
        );

        data.use_search_query_input = true;
        assert_eq!(SearchNode.body(&data), "Google Search Node\nData: (Using Input)");
    }

    #[test]
    fn test_body_with_multiline_query() {
        let data = SearchNodeData {
            search_query: "line one\nline two".into(),
            use_search_query_input: false,
        };
        assert_eq!(
            SearchNode.body(&data),
            "Google Search Node\nData: line one\nline two"
        );
    }

    #[test]
    fn test_data_serializes_camel_case() {
        let parsed: SearchNodeData =
            serde_json::from_value(json!({"searchQuery": "rust"})).unwrap();
        assert_eq!(parsed.search_query, "rust");
        assert!(!parsed.use_search_query_input);
    }

    #[tokio::test]
    async fn test_process_uses_port_when_toggled() {
        let mut api = MockApi::new();
        api.expect_search()
            .withf(|query| query == "from port")
            .times(1)
            .returning(|_| {
                Ok(SearchResponse {
                    string: "1. Rust".into(),
                    array: vec![json!({"title": "Rust"})],
                })
            });

        let data = SearchNodeData {
            search_query: "from data".into(),
            use_search_query_input: true,
        };
        let mut inputs = Inputs::new();
        inputs.insert("searchQuery".into(), DataValue::String("from port".into()));

        let outputs = SearchNode
            .process(&data, &inputs, &context(api))
            .await
            .unwrap();

        assert_eq!(outputs["resultsFormatted"], DataValue::String("1. Rust".into()));
        assert_eq!(
            outputs["resultsArray"],
            DataValue::ObjectArray(vec![json!({"title": "Rust"})])
        );
    }

    #[tokio::test]
    async fn test_process_propagates_api_error() {
        let mut api = MockApi::new();
        api.expect_search().returning(|_| {
            Err(ResearchApiError::StatusError {
                status: 502,
                url: "http://localhost:4030/www/search?query=x".into(),
            })
        });

        let err = SearchNode
            .process(&SearchNodeData::default(), &Inputs::new(), &context(api))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NodeError::Api(ResearchApiError::StatusError { status: 502, .. })
        ));
    }
}
