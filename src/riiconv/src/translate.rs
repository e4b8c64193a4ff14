//! Per-entry translation into Dolphin patch lines.

use crate::document::{PatchEntry, REGION_ALL};
use crate::primitive;
use crate::value::{self, ValueError};

/// Translate one patch entry for one target region.
///
/// Memory patches whose target matches neither [`REGION_ALL`] nor
/// `region` are skipped before their value is resolved. Any resolve
/// failure aborts the whole entry; there is no partial output.
///
/// The returned lines are sorted by their formatted text, not by
/// numeric address. With a uniform primitive width the two orders
/// coincide; when two primitives share an address but differ in width,
/// the width label decides the order instead.
pub fn translate(
    entry: &PatchEntry,
    base_path: &str,
    region: &str,
) -> Result<Vec<String>, ValueError> {
    let mut lines = Vec::new();

    for spec in &entry.memory {
        if spec.target != REGION_ALL && spec.target != region {
            continue;
        }

        let data = value::resolve(&spec.source, base_path, region)?;
        for prim in primitive::split(spec.offset, &data) {
            lines.push(prim.to_string());
        }
    }

    lines.sort();
    Ok(lines)
}
