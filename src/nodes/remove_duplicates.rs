// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// NODE DE REMOÇÃO DE DUPLICATAS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Único node sem I/O: aplica `remove_duplicate_text` ao texto de entrada.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{body_value, input_or_data, NodeError, PluginNode, ProcessContext, NODE_GROUP};
use crate::types::{
    ChartNode, DataType, DataValue, EditorDefinition, Inputs, NodeInputDefinition,
    NodeOutputDefinition, NodeUiData, Outputs,
};
use crate::utils::{remove_duplicate_text, DEFAULT_SEPARATOR};

const DEFAULT_TEXT: &str = "Hello World, hello world.  Hello world.\nHello World, hello world.  Hello world.\nHello World, hello world.  Hello world.";

/// Dados do node de remoção de duplicatas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDuplicatesNodeData {
    pub some_string: String,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub use_some_string_input: bool,
    #[serde(default)]
    pub use_separator_input: bool,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for RemoveDuplicatesNodeData {
    fn default() -> Self {
        Self {
            some_string: DEFAULT_TEXT.to_string(),
            separator: default_separator(),
            use_some_string_input: false,
            use_separator_input: false,
        }
    }
}

/// Node que remove segmentos repetidos de um texto
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveDuplicatesNode;

#[async_trait]
impl PluginNode for RemoveDuplicatesNode {
    type Data = RemoveDuplicatesNodeData;

    const TYPE: &'static str = "remDupePlugin";
    const DISPLAY_NAME: &'static str = "Remove Duplicates by Separator";

    fn create(&self) -> ChartNode<RemoveDuplicatesNodeData> {
        ChartNode::new(
            "Remove Duplicates by Separator",
            RemoveDuplicatesNodeData::default(),
        )
    }

    fn input_definitions(&self, data: &RemoveDuplicatesNodeData) -> Vec<NodeInputDefinition> {
        let mut inputs = Vec::new();
        if data.use_some_string_input {
            inputs.push(NodeInputDefinition::new(
                "someString",
                DataType::String,
                "Some String",
            ));
        }
        if data.use_separator_input {
            inputs.push(NodeInputDefinition::new(
                "separator",
                DataType::String,
                "Separator",
            ));
        }
        inputs
    }

    fn output_definitions(&self, _data: &RemoveDuplicatesNodeData) -> Vec<NodeOutputDefinition> {
        vec![NodeOutputDefinition::new(
            "cleaned",
            DataType::String,
            "Cleaned String",
        )]
    }

    fn ui_data(&self) -> NodeUiData {
        NodeUiData {
            context_menu_title: "Remove Dupe Text".into(),
            group: NODE_GROUP.into(),
            info_box_body: "Removes repeated sentences, keeping the first occurrence.".into(),
            info_box_title: "Remove Duplicates by Separator".into(),
        }
    }

    fn editors(&self, _data: &RemoveDuplicatesNodeData) -> Vec<EditorDefinition> {
        vec![
            EditorDefinition::string("someString", "useSomeStringInput", "Some String"),
            EditorDefinition::string("separator", "useSeparatorInput", "Separator"),
        ]
    }

    fn body(&self, data: &RemoveDuplicatesNodeData) -> String {
        // O texto pode ter várias linhas sem indentação, então não passa por dedent
        format!(
            "Remove Duplicates by Separator\nData: {}",
            body_value(data.use_some_string_input, &data.some_string)
        )
    }

    async fn process(
        &self,
        data: &RemoveDuplicatesNodeData,
        inputs: &Inputs,
        _ctx: &ProcessContext,
    ) -> Result<Outputs, NodeError> {
        let text = input_or_data(
            inputs,
            "someString",
            data.use_some_string_input,
            &data.some_string,
        );
        let separator = input_or_data(
            inputs,
            "separator",
            data.use_separator_input,
            &data.separator,
        );

        let cleaned = remove_duplicate_text(&text, &separator);
        log::debug!(
            "remDupePlugin: {} → {} bytes (separator {:?})",
            text.len(),
            cleaned.len(),
            separator
        );

        let mut outputs = Outputs::new();
        outputs.insert("cleaned".into(), DataValue::String(cleaned));
        Ok(outputs)
    }
}
