// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TIPOS COMPARTILHADOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Contrato de nodes do editor: portas, valores, editores e metadados de UI.
// Os nomes serializados seguem o formato que o host espera (camelCase).
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identificador de porta (alias para String)
pub type PortId = String;

/// Identificador de node (alias para String)
pub type NodeId = String;

/// Valores de entrada de um node, indexados por porta
pub type Inputs = HashMap<PortId, DataValue>;

/// Valores de saída de um node, indexados por porta
pub type Outputs = HashMap<PortId, DataValue>;

/// Gera um novo id de node (UUID v4)
pub fn new_node_id() -> NodeId {
    uuid::Uuid::new_v4().to_string()
}

/// Tipos de dado aceitos pelas portas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "string[]")]
    StringArray,
    #[serde(rename = "object")]
    Object,
    #[serde(rename = "object[]")]
    ObjectArray,
    #[serde(rename = "any")]
    Any,
}

impl DataType {
    /// Retorna o nome do tipo como o host escreve
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::StringArray => "string[]",
            Self::Object => "object",
            Self::ObjectArray => "object[]",
            Self::Any => "any",
        }
    }
}

/// Valor tipado trafegando por uma porta.
///
/// Serializa como `{ "type": "...", "value": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum DataValue {
    #[serde(rename = "string")]
    String(String),
    #[serde(rename = "string[]")]
    StringArray(Vec<String>),
    #[serde(rename = "object")]
    Object(serde_json::Value),
    #[serde(rename = "object[]")]
    ObjectArray(Vec<serde_json::Value>),
    #[serde(rename = "any")]
    Any(serde_json::Value),
}

impl DataValue {
    /// Tipo do valor
    pub fn data_type(&self) -> DataType {
        match self {
            Self::String(_) => DataType::String,
            Self::StringArray(_) => DataType::StringArray,
            Self::Object(_) => DataType::Object,
            Self::ObjectArray(_) => DataType::ObjectArray,
            Self::Any(_) => DataType::Any,
        }
    }

    /// Converte o valor para texto.
    ///
    /// Strings passam intactas; qualquer outro valor vira JSON compacto.
    pub fn as_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::StringArray(values) => json_to_string(&serde_json::json!(values)),
            Self::Object(value) | Self::Any(value) => json_to_string(value),
            Self::ObjectArray(values) => json_to_string(&serde_json::json!(values)),
        }
    }
}

/// Texto de um valor JSON: strings sem aspas, resto em JSON compacto
pub fn json_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Definição de porta de entrada
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInputDefinition {
    pub id: PortId,
    pub data_type: DataType,
    pub title: String,
}

impl NodeInputDefinition {
    pub fn new(id: &str, data_type: DataType, title: &str) -> Self {
        Self {
            id: id.to_string(),
            data_type,
            title: title.to_string(),
        }
    }
}

/// Definição de porta de saída
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeOutputDefinition {
    pub id: PortId,
    pub data_type: DataType,
    pub title: String,
}

impl NodeOutputDefinition {
    pub fn new(id: &str, data_type: DataType, title: &str) -> Self {
        Self {
            id: id.to_string(),
            data_type,
            title: title.to_string(),
        }
    }
}

/// Tipo de editor exibido no painel do node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorType {
    String,
}

/// Editor de um campo do node.
///
/// `use_input_toggle_data_key` aponta para o campo booleano que troca o
/// valor do editor por uma porta de entrada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorDefinition {
    #[serde(rename = "type")]
    pub editor_type: EditorType,
    pub data_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_input_toggle_data_key: Option<String>,
    pub label: String,
}

impl EditorDefinition {
    /// Editor de string com toggle de porta
    pub fn string(data_key: &str, toggle_key: &str, label: &str) -> Self {
        Self {
            editor_type: EditorType::String,
            data_key: data_key.to_string(),
            use_input_toggle_data_key: Some(toggle_key.to_string()),
            label: label.to_string(),
        }
    }
}

/// Metadados de UI (menu de contexto e info box)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeUiData {
    pub context_menu_title: String,
    pub group: String,
    pub info_box_body: String,
    pub info_box_title: String,
}

/// Posição e largura do node no grafo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualData {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl Default for VisualData {
    fn default() -> Self {
        // Largura suficiente para não estourar o corpo
        Self {
            x: 0.0,
            y: 0.0,
            width: 200.0,
        }
    }
}

/// Instância de um node no grafo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartNode<D> {
    pub id: NodeId,
    pub title: String,
    pub data: D,
    #[serde(default)]
    pub visual_data: VisualData,
}

impl<D> ChartNode<D> {
    /// Cria um node com id novo na posição padrão
    pub fn new(title: &str, data: D) -> Self {
        Self {
            id: new_node_id(),
            title: title.to_string(),
            data,
            visual_data: VisualData::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_value_wire_format() {
        let value = DataValue::String("hello".into());
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"type": "string", "value": "hello"})
        );

        let parsed: DataValue =
            serde_json::from_value(json!({"type": "object[]", "value": [{"a": 1}]})).unwrap();
        assert_eq!(parsed, DataValue::ObjectArray(vec![json!({"a": 1})]));
        assert_eq!(parsed.data_type(), DataType::ObjectArray);
    }

    #[test]
    fn test_data_value_as_string() {
        assert_eq!(DataValue::String("x".into()).as_string(), "x");
        assert_eq!(DataValue::Any(json!("y")).as_string(), "y");
        assert_eq!(DataValue::Object(json!({"k": true})).as_string(), r#"{"k":true}"#);
        assert_eq!(
            DataValue::StringArray(vec!["a".into(), "b".into()]).as_string(),
            r#"["a","b"]"#
        );
    }

    #[test]
    fn test_definitions_serialize_camel_case() {
        let input = NodeInputDefinition::new("searchQuery", DataType::String, "Search Query");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"id": "searchQuery", "dataType": "string", "title": "Search Query"})
        );

        let editor = EditorDefinition::string("url", "useURLInput", "URL");
        assert_eq!(
            serde_json::to_value(&editor).unwrap(),
            json!({"type": "string", "dataKey": "url", "useInputToggleDataKey": "useURLInput", "label": "URL"})
        );
    }

    #[test]
    fn test_chart_node_defaults() {
        let a = ChartNode::new("A", ());
        let b = ChartNode::new("B", ());
        assert_ne!(a.id, b.id);
        assert_eq!(a.visual_data, VisualData { x: 0.0, y: 0.0, width: 200.0 });
    }
}
