// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TEXT UTILITIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Utilitários para processamento de texto:
// - Remoção de sentenças duplicadas por separador
// - Dedent de blocos de texto (corpo dos nodes)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use std::collections::HashSet;

/// Separador usado quando o node não informa nenhum
pub const DEFAULT_SEPARATOR: &str = ".";

/// Delimitador fixo usado para juntar os segmentos únicos
pub const OUTPUT_DELIMITER: &str = ". ";

/// Divide o texto em segmentos já aparados (trim).
///
/// O separador é literal (não é regex). Separador vazio divide o texto
/// em caracteres individuais, sem segmentos vazios nas pontas.
pub fn split_segments<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| text[i..i + c.len_utf8()].trim())
            .collect();
    }

    text.split(separator).map(str::trim).collect()
}

/// Remove segmentos repetidos de um texto, preservando a ordem da
/// primeira ocorrência.
///
/// # Algoritmo
/// 1. Divide `text` em toda ocorrência literal de `separator`
/// 2. Aplica trim em cada pedaço
/// 3. Mantém apenas a primeira ocorrência de cada valor (igualdade exata)
/// 4. Junta os sobreviventes com `". "`, independente do separador
///
/// Segmentos que diferem apenas em espaços nas pontas são duplicados;
/// diferenças de caixa ou de espaços internos os tornam distintos.
/// A função é total: nunca falha.
///
/// # Exemplo
/// ```
/// use research_api_plugin::utils::remove_duplicate_text;
///
/// assert_eq!(remove_duplicate_text("A,B,A,C", ","), "A. B. C");
/// assert_eq!(remove_duplicate_text("Hello. Hello. World.", "."), "Hello. World. ");
/// ```
pub fn remove_duplicate_text(text: &str, separator: &str) -> String {
    let mut seen = HashSet::new();

    split_segments(text, separator)
        .into_iter()
        .filter(|segment| seen.insert(*segment))
        .collect::<Vec<_>>()
        .join(OUTPUT_DELIMITER)
}

/// Remove a indentação comum de um bloco de texto.
///
/// Linhas em branco no início e no fim são descartadas e linhas em
/// branco internas não contam para a indentação mínima.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();

    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => return String::new(),
    };
    let lines = &lines[start..=end];

    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| {
            if l.trim().is_empty() {
                ""
            } else {
                // indentação é sempre ASCII whitespace contada em bytes
                l.get(indent..).unwrap_or_else(|| l.trim_start()).trim_end()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
