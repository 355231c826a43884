//! Testes de propriedade da deduplicação de sentenças.
//!
//! Usa proptest para verificar invariantes com entradas aleatórias:
//! - Todo segmento da saída existe na entrada (após trim)
//! - Reaplicar com `". "` não muda nada
//! - Nenhum segmento se repete na saída
//! - A ordem da primeira ocorrência é preservada

use proptest::prelude::*;
use research_api_plugin::utils::{remove_duplicate_text, split_segments, OUTPUT_DELIMITER};
use std::collections::HashSet;

/// Segmentos sem o delimitador de saída, para que a re-divisão por `". "`
/// devolva exatamente os segmentos emitidos.
fn segment_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["alpha", "beta", "Beta", "gamma delta", "", "  x  ", "x"])
        .prop_map(str::to_string)
}

fn text_strategy(separator: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 0..12).prop_map(move |parts| parts.join(separator))
}

/// Segmentos únicos da entrada, na ordem da primeira ocorrência
fn first_occurrences(text: &str, separator: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    split_segments(text, separator)
        .into_iter()
        .filter(|s| seen.insert(*s))
        .map(str::to_string)
        .collect()
}

proptest! {
    /// Propriedade: todo segmento da saída é um segmento aparado da entrada.
    #[test]
    fn prop_output_segments_come_from_input(text in text_strategy(",")) {
        let output = remove_duplicate_text(&text, ",");
        let input: HashSet<&str> = split_segments(&text, ",").into_iter().collect();

        for segment in output.split(OUTPUT_DELIMITER) {
            prop_assert!(input.contains(segment.trim()), "segment {:?} not in input", segment);
        }
    }

    /// Propriedade: deduplicar de novo a saída (com `". "`) não muda nada.
    #[test]
    fn prop_idempotent_with_output_delimiter(text in text_strategy("|")) {
        let once = remove_duplicate_text(&text, "|");
        let twice = remove_duplicate_text(&once, OUTPUT_DELIMITER);
        prop_assert_eq!(twice, once);
    }

    /// Propriedade: a saída não tem segmentos repetidos.
    #[test]
    fn prop_no_duplicates(text in text_strategy(";")) {
        let output = remove_duplicate_text(&text, ";");
        let segments: Vec<&str> = output.split(OUTPUT_DELIMITER).map(str::trim).collect();
        let unique: HashSet<&str> = segments.iter().copied().collect();
        prop_assert_eq!(unique.len(), segments.len());
    }

    /// Propriedade: a saída é exatamente a sequência de primeiras ocorrências.
    #[test]
    fn prop_first_occurrence_order(text in text_strategy("::")) {
        let expected = first_occurrences(&text, "::").join(OUTPUT_DELIMITER);
        prop_assert_eq!(remove_duplicate_text(&text, "::"), expected);
    }

    /// Propriedade: texto arbitrário nunca faz a função falhar.
    #[test]
    fn prop_total_for_arbitrary_input(text in ".*", separator in ".{0,3}") {
        let output = remove_duplicate_text(&text, &separator);
        prop_assert!(output.len() <= text.len() + 2 * text.len().max(1));
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(remove_duplicate_text("Hello. Hello. World.", "."), "Hello. World. ");
    assert_eq!(remove_duplicate_text("A,B,A,C", ","), "A. B. C");
    assert_eq!(remove_duplicate_text("", "."), "");
    assert_eq!(remove_duplicate_text("  x  . x .", "."), "x. ");
}
