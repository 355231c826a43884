// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// NODE DE WEBSCRAPING
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{
    body_value, input_or_data, render_body, NodeError, PluginNode, ProcessContext, NODE_GROUP,
};
use crate::types::{
    json_to_string, ChartNode, DataType, DataValue, EditorDefinition, Inputs,
    NodeInputDefinition, NodeOutputDefinition, NodeUiData, Outputs,
};

/// Dados do node de scraping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeNodeData {
    pub url: String,
    #[serde(rename = "useURLInput", default)]
    pub use_url_input: bool,
}

impl Default for ScrapeNodeData {
    fn default() -> Self {
        Self {
            url: "https://github.com/hushaudio".to_string(),
            use_url_input: false,
        }
    }
}

/// Node que consulta `/www/scrape` e devolve o conteúdo da página.
///
/// A porta de saída se chama `url` mas carrega o payload do scrape.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrapeNode;

#[async_trait]
impl PluginNode for ScrapeNode {
    type Data = ScrapeNodeData;

    const TYPE: &'static str = "webscraperPlugin";
    const DISPLAY_NAME: &'static str = "Webscraper";

    fn create(&self) -> ChartNode<ScrapeNodeData> {
        ChartNode::new("Webscraper Node", ScrapeNodeData::default())
    }

    fn input_definitions(&self, data: &ScrapeNodeData) -> Vec<NodeInputDefinition> {
        let mut inputs = Vec::new();
        if data.use_url_input {
            inputs.push(NodeInputDefinition::new("url", DataType::String, "URL"));
        }
        inputs
    }

    fn output_definitions(&self, _data: &ScrapeNodeData) -> Vec<NodeOutputDefinition> {
        vec![NodeOutputDefinition::new("url", DataType::String, "URL")]
    }

    fn ui_data(&self) -> NodeUiData {
        NodeUiData {
            context_menu_title: "Webscraper Plugin".into(),
            group: NODE_GROUP.into(),
            info_box_body: "This is an Webscraper Node.".into(),
            info_box_title: "Webscraper Node".into(),
        }
    }

    fn editors(&self, _data: &ScrapeNodeData) -> Vec<EditorDefinition> {
        vec![EditorDefinition::string("url", "useURLInput", "URL")]
    }

    fn body(&self, data: &ScrapeNodeData) -> String {
        render_body(
            "
            Webscraper Node
            Data: {}
            ",
            body_value(data.use_url_input, &data.url),
        )
    }

    async fn process(
        &self,
        data: &ScrapeNodeData,
        inputs: &Inputs,
        ctx: &ProcessContext,
    ) -> Result<Outputs, NodeError> {
        let url = input_or_data(inputs, "url", data.use_url_input, &data.url);
        let payload = ctx.api().scrape(&url).await?;

        let mut outputs = Outputs::new();
        outputs.insert("url".into(), DataValue::String(json_to_string(&payload)));
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ResearchApiError;
    use crate::nodes::test_support::{context, MockApi};
    use serde_json::json;

    #[test]
    fn test_create_defaults() {
        let node = ScrapeNode.create();
        assert_eq!(node.title, "Webscraper Node");
        assert_eq!(node.data.url, "https://github.com/hushaudio");
    }

    #[test]
    fn test_data_uses_url_input_key() {
        let data = ScrapeNodeData {
            url: "https://example.com".into(),
            use_url_input: true,
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"url": "https://example.com", "useURLInput": true})
        );
    }

    #[test]
    fn test_ports_and_body() {
        let mut data = ScrapeNodeData::default();
        assert!(ScrapeNode.input_definitions(&data).is_empty());
        assert_eq!(
            ScrapeNode.body(&data),
            "Webscraper Node\nData: https://github.com/hushaudio"
        );

        data.use_url_input = true;
        assert_eq!(ScrapeNode.input_definitions(&data)[0].id, "url");
        assert_eq!(ScrapeNode.output_definitions(&data)[0].data_type, DataType::String);
    }

    #[test]
    fn test_body_with_multiline_url() {
        let data = ScrapeNodeData {
            url: "https://a.example\n    https://b.example".into(),
            use_url_input: false,
        };
        assert_eq!(
            ScrapeNode.body(&data),
            "Webscraper Node\nData: https://a.example\n    https://b.example"
        );
    }

    #[tokio::test]
    async fn test_process_encodes_object_payload() {
        let mut api = MockApi::new();
        api.expect_scrape()
            .withf(|url| url == "https://github.com/hushaudio")
            .returning(|_| Ok(json!({"title": "hushaudio"})));

        let outputs = ScrapeNode
            .process(&ScrapeNodeData::default(), &Inputs::new(), &context(api))
            .await
            .unwrap();
        assert_eq!(
            outputs["url"],
            DataValue::String(r#"{"title":"hushaudio"}"#.into())
        );
    }

    #[tokio::test]
    async fn test_process_passes_string_payload_verbatim() {
        let mut api = MockApi::new();
        api.expect_scrape()
            .returning(|_| Ok(json!("plain page text")));

        let outputs = ScrapeNode
            .process(&ScrapeNodeData::default(), &Inputs::new(), &context(api))
            .await
            .unwrap();
        assert_eq!(outputs["url"], DataValue::String("plain page text".into()));
    }

    #[tokio::test]
    async fn test_process_propagates_parse_error() {
        let mut api = MockApi::new();
        api.expect_scrape()
            .returning(|_| Err(ResearchApiError::ParseError("expected value".into())));

        let result = ScrapeNode
            .process(&ScrapeNodeData::default(), &Inputs::new(), &context(api))
            .await;
        assert!(matches!(result, Err(NodeError::Api(ResearchApiError::ParseError(_)))));
    }
}
