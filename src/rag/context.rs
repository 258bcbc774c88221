//! Context assembly from retrieved passages

use crate::index::SearchHit;
use serde::{Deserialize, Serialize};

/// Context block plus the identifiers of the passages that formed it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssembledContext {
    /// Hit texts joined with a single newline, in result order
    pub text: String,
    /// Hit identifiers in the same order, no deduplication or filtering
    pub document_ids: Vec<String>,
}

/// Build the context block from hits in the order the index returned them
pub fn assemble(hits: &[SearchHit]) -> AssembledContext {
    let text = hits
        .iter()
        .map(|hit| hit.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let document_ids = hits.iter().map(|hit| hit.id.clone()).collect();

    AssembledContext { text, document_ids }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, text: &str) -> SearchHit {
        SearchHit {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_assemble_empty() {
        let context = assemble(&[]);
        assert_eq!(context.text, "");
        assert!(context.document_ids.is_empty());
    }

    #[test]
    fn test_assemble_single_hit() {
        let context = assemble(&[hit("7", "Paris is the capital of France.")]);
        assert_eq!(context.text, "Paris is the capital of France.");
        assert_eq!(context.document_ids, vec!["7"]);
    }

    #[test]
    fn test_assemble_preserves_order() {
        let hits = vec![hit("b", "second ranked"), hit("a", "first ranked"), hit("c", "third")];
        let context = assemble(&hits);
        assert_eq!(context.text, "second ranked\nfirst ranked\nthird");
        assert_eq!(context.document_ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_assemble_keeps_duplicates() {
        let hits = vec![hit("1", "same"), hit("1", "same")];
        let context = assemble(&hits);
        assert_eq!(context.document_ids, vec!["1", "1"]);
        assert_eq!(context.text, "same\nsame");
    }
}
