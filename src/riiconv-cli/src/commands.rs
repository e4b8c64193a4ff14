//! Conversion command handler

use anyhow::{Context, Result};
use riiconv::PatchDocument;
use std::fs;
use std::path::Path;

/// Run the conversion end to end and report each written file.
///
/// Reads `{sd_root}/riivolution/{xml_file}`, translates every patch
/// entry for every target region, and writes one INI per region into
/// `output_dir`. An empty `enabled` list marks every entry enabled.
pub fn convert(sd_root: &str, xml_file: &str, enabled: &[String], output_dir: &Path) -> Result<()> {
    let document_path = format!("{}/riivolution/{}", sd_root, xml_file);
    let xml = fs::read_to_string(&document_path)
        .with_context(|| format!("Failed to read patch document {}", document_path))?;

    let document = PatchDocument::parse(&xml)
        .with_context(|| format!("Failed to parse {}", document_path))?;

    let doc_stem = Path::new(xml_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(xml_file);

    let conversion = riiconv::convert(&document, sd_root, doc_stem)
        .context("Failed to translate patches")?;

    for (region, groups) in &conversion.groups {
        let path = riiconv::emit_region(output_dir, &conversion.game_id, region, groups, enabled)
            .with_context(|| format!("Failed to write INI for region {}", region))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
