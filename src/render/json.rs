//! JSON rendering of the document model.

use crate::error::Result;
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    log::debug!("Serialized document to {} bytes of JSON", json.len());
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Paragraph};

    #[test]
    fn test_to_json_pretty() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Hello"));
        doc.add_block(Block::Rule);

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"type\": \"paragraph\""));
        assert!(json.contains("\"type\": \"rule\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let doc = Document::new();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_json_error_maps_to_json_variant() {
        let err: crate::Error = serde_json::from_str::<Document>("{").unwrap_err().into();
        assert!(matches!(err, crate::Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_json_round_trips_model() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Hello"));
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
