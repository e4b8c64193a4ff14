//! Riivolution patch document parsing.
//!
//! Converts the XML tree into typed nodes. Attribute defaults are
//! applied once here, at construction, so downstream code never deals
//! with "attribute present/absent" again.

use thiserror::Error;

/// Offset used when a `memory` element omits the attribute. Riivolution
/// treats the offset as unset; the sentinel survives into the output,
/// where the resulting address makes the mistake visible.
pub const UNSET_OFFSET: u32 = 0xFFFF_FFFF;

/// Region filter value meaning "applies to every region".
pub const REGION_ALL: &str = "All";

/// Token in a valuefile path replaced with the active region code.
pub const REGION_TOKEN: &str = "{$__region}";

/// Errors that can occur while parsing a patch document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("this file does not contain valid Riivolution information")]
    NotRiivolution,

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("<{tag}> element is missing its '{attribute}' attribute")]
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
    },

    #[error("invalid offset '{value}' in patch '{entry}'")]
    BadOffset { entry: String, value: String },

    #[error("memory patch in '{entry}' has neither a value nor a value file")]
    NoValueSource { entry: String },
}

/// Where a memory patch gets its replacement bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Relative path to a binary file; may contain [`REGION_TOKEN`].
    File(String),
    /// Inline hex string, decoded at translation time.
    Inline(String),
}

/// One declarative memory write.
#[derive(Debug, Clone)]
pub struct MemoryPatchSpec {
    /// Base address of the write.
    pub offset: u32,
    /// Region filter; [`REGION_ALL`] matches every region.
    pub target: String,
    /// Value source. When the element carries both a `valuefile` and a
    /// `value` attribute, the file wins.
    pub source: ValueSource,
}

/// A named, independently toggle-able group of memory patches.
#[derive(Debug, Clone)]
pub struct PatchEntry {
    pub id: String,
    /// Optional base-path override, expected to begin with '/'.
    pub root: Option<String>,
    pub memory: Vec<MemoryPatchSpec>,
}

/// A parsed `wiidisc` document.
#[derive(Debug, Clone)]
pub struct PatchDocument {
    /// Declared game id, if the document carries an `<id>` element.
    pub game_id: Option<String>,
    /// Declared target regions; empty means the caller falls back to
    /// a single [`REGION_ALL`] region.
    pub regions: Vec<String>,
    pub entries: Vec<PatchEntry>,
}

impl PatchDocument {
    /// Parse a Riivolution patch document from XML text.
    pub fn parse(xml: &str) -> Result<Self, ParseError> {
        let tree = roxmltree::Document::parse(xml)?;
        let root = tree.root_element();

        if root.tag_name().name() != "wiidisc" {
            return Err(ParseError::NotRiivolution);
        }

        let mut game_id = None;
        let mut regions = Vec::new();

        if let Some(elem_id) = root.children().find(|n| n.has_tag_name("id")) {
            let game = elem_id
                .attribute("game")
                .ok_or(ParseError::MissingAttribute {
                    tag: "id",
                    attribute: "game",
                })?;
            game_id = Some(game.to_string());

            for elem_region in elem_id.children().filter(|n| n.has_tag_name("region")) {
                let code = elem_region
                    .attribute("type")
                    .ok_or(ParseError::MissingAttribute {
                        tag: "region",
                        attribute: "type",
                    })?;
                regions.push(code.to_string());
            }
        }

        let mut entries = Vec::new();
        for elem_patch in root.children().filter(|n| n.has_tag_name("patch")) {
            entries.push(parse_patch(elem_patch)?);
        }

        Ok(PatchDocument {
            game_id,
            regions,
            entries,
        })
    }
}

fn parse_patch(elem: roxmltree::Node<'_, '_>) -> Result<PatchEntry, ParseError> {
    let id = elem
        .attribute("id")
        .ok_or(ParseError::MissingAttribute {
            tag: "patch",
            attribute: "id",
        })?
        .to_string();

    let root = elem.attribute("root").map(str::to_string);

    let mut memory = Vec::new();
    for elem_memory in elem.children().filter(|n| n.has_tag_name("memory")) {
        memory.push(parse_memory(elem_memory, &id)?);
    }

    Ok(PatchEntry { id, root, memory })
}

fn parse_memory(
    elem: roxmltree::Node<'_, '_>,
    entry_id: &str,
) -> Result<MemoryPatchSpec, ParseError> {
    let source = if let Some(path) = elem.attribute("valuefile") {
        ValueSource::File(path.to_string())
    } else if let Some(text) = elem.attribute("value") {
        ValueSource::Inline(text.to_string())
    } else {
        return Err(ParseError::NoValueSource {
            entry: entry_id.to_string(),
        });
    };

    let offset = match elem.attribute("offset") {
        Some(text) => parse_offset(text).ok_or_else(|| ParseError::BadOffset {
            entry: entry_id.to_string(),
            value: text.to_string(),
        })?,
        None => UNSET_OFFSET,
    };

    let target = elem.attribute("target").unwrap_or(REGION_ALL).to_string();

    Ok(MemoryPatchSpec {
        offset,
        target,
        source,
    })
}

/// Parse an offset attribute: `0x`-prefixed hex or plain decimal.
fn parse_offset(text: &str) -> Option<u32> {
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u32::from_str_radix(digits, 16).ok()
    } else {
        text.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let xml = r#"
            <wiidisc>
              <id game="TEST">
                <region type="E"/>
                <region type="P"/>
              </id>
              <patch id="p1" root="/files">
                <memory offset="0x00001000" value="0102"/>
                <memory offset="0x80002000" target="E" valuefile="code/{$__region}.bin"/>
              </patch>
            </wiidisc>
        "#;

        let doc = PatchDocument::parse(xml).unwrap();
        assert_eq!(doc.game_id.as_deref(), Some("TEST"));
        assert_eq!(doc.regions, vec!["E", "P"]);
        assert_eq!(doc.entries.len(), 1);

        let entry = &doc.entries[0];
        assert_eq!(entry.id, "p1");
        assert_eq!(entry.root.as_deref(), Some("/files"));
        assert_eq!(entry.memory.len(), 2);

        assert_eq!(entry.memory[0].offset, 0x1000);
        assert_eq!(entry.memory[0].target, "All");
        assert_eq!(
            entry.memory[0].source,
            ValueSource::Inline("0102".to_string())
        );

        assert_eq!(entry.memory[1].offset, 0x8000_2000);
        assert_eq!(entry.memory[1].target, "E");
        assert_eq!(
            entry.memory[1].source,
            ValueSource::File("code/{$__region}.bin".to_string())
        );
    }

    #[test]
    fn test_defaults_applied_at_parse() {
        let xml = r#"<wiidisc><patch id="p"><memory value="00"/></patch></wiidisc>"#;
        let doc = PatchDocument::parse(xml).unwrap();
        let spec = &doc.entries[0].memory[0];

        assert_eq!(spec.offset, UNSET_OFFSET);
        assert_eq!(spec.target, REGION_ALL);
        assert!(doc.game_id.is_none());
        assert!(doc.regions.is_empty());
    }

    #[test]
    fn test_valuefile_wins_over_inline_value() {
        let xml = r#"<wiidisc><patch id="p">
            <memory offset="0x0" valuefile="a.bin" value="FF"/>
        </patch></wiidisc>"#;
        let doc = PatchDocument::parse(xml).unwrap();

        assert_eq!(
            doc.entries[0].memory[0].source,
            ValueSource::File("a.bin".to_string())
        );
    }

    #[test]
    fn test_missing_value_source_is_an_error() {
        let xml = r#"<wiidisc><patch id="p"><memory offset="0x0"/></patch></wiidisc>"#;
        let err = PatchDocument::parse(xml).unwrap_err();
        assert!(matches!(err, ParseError::NoValueSource { entry } if entry == "p"));
    }

    #[test]
    fn test_wrong_root_tag_is_rejected() {
        let err = PatchDocument::parse("<notadisc/>").unwrap_err();
        assert!(matches!(err, ParseError::NotRiivolution));
    }

    #[test]
    fn test_offset_parsing() {
        assert_eq!(parse_offset("0x80001000"), Some(0x8000_1000));
        assert_eq!(parse_offset("0XFF"), Some(0xFF));
        assert_eq!(parse_offset("4096"), Some(4096));
        assert_eq!(parse_offset("0xZZ"), None);
        assert_eq!(parse_offset(""), None);
    }

    #[test]
    fn test_bad_offset_is_an_error() {
        let xml = r#"<wiidisc><patch id="p"><memory offset="nope" value="00"/></patch></wiidisc>"#;
        let err = PatchDocument::parse(xml).unwrap_err();
        assert!(matches!(err, ParseError::BadOffset { value, .. } if value == "nope"));
    }
}
