//! Document-level conversion: region set, game id, and grouping.

use indexmap::IndexMap;

use crate::document::{PatchDocument, REGION_ALL};
use crate::translate;
use crate::value::ValueError;

/// Patch lines grouped per region, then per entry id. Both maps keep
/// insertion order; the inner order drives the default enabled-list
/// order in the emitted INI.
pub type RegionGroups = IndexMap<String, IndexMap<String, Vec<String>>>;

/// Result of converting a whole document.
#[derive(Debug)]
pub struct Conversion {
    /// Declared game id, or the document filename stem when the
    /// document declares none.
    pub game_id: String,
    pub groups: RegionGroups,
}

/// Translate every patch entry of `document` for every target region.
///
/// `doc_stem` is the input filename with its extension stripped; it
/// becomes the game id when the document has no `<id>` element. A
/// document without declared regions gets the single region
/// [`REGION_ALL`].
///
/// Entries with a duplicate id silently replace the earlier entry's
/// lines, keeping the earlier position in the group order. Any
/// translation failure aborts the whole conversion.
pub fn convert(
    document: &PatchDocument,
    base_path: &str,
    doc_stem: &str,
) -> Result<Conversion, ValueError> {
    let game_id = document
        .game_id
        .clone()
        .unwrap_or_else(|| doc_stem.to_string());

    let regions: Vec<String> = if document.regions.is_empty() {
        vec![REGION_ALL.to_string()]
    } else {
        document.regions.clone()
    };

    let mut groups = RegionGroups::new();

    for entry in &document.entries {
        // Root overrides begin with a path separator; the contract is
        // string concatenation, not a path join.
        let entry_base = match &entry.root {
            Some(root) => format!("{}{}", base_path, root),
            None => base_path.to_string(),
        };

        for region in &regions {
            let lines = translate::translate(entry, &entry_base, region)?;
            groups
                .entry(region.clone())
                .or_default()
                .insert(entry.id.clone(), lines);
        }
    }

    Ok(Conversion { game_id, groups })
}
