//! Dolphin INI output.

use indexmap::IndexMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write one region's patch groups to `{game_id}{region}.ini` in `dir`
/// and return the path of the written file.
///
/// Every group appears under `[OnFrame]`, headed by its `$id` line.
/// `[OnFrame_Enabled]` then lists the enabled ids: all groups in group
/// order when `enabled` is empty, otherwise exactly the ids in
/// `enabled`, in that order. Ids are not checked against the groups;
/// an unknown id produces an enable line with no matching section.
pub fn emit_region(
    dir: &Path,
    game_id: &str,
    region: &str,
    groups: &IndexMap<String, Vec<String>>,
    enabled: &[String],
) -> io::Result<PathBuf> {
    let path = dir.join(format!("{}{}.ini", game_id, region));
    let mut out = BufWriter::new(File::create(&path)?);

    writeln!(out, "[OnFrame]")?;
    for (id, lines) in groups {
        writeln!(out, "${}", id)?;
        for line in lines {
            writeln!(out, "{}", line)?;
        }
    }

    writeln!(out, "[OnFrame_Enabled]")?;
    if enabled.is_empty() {
        for id in groups.keys() {
            writeln!(out, "${}", id)?;
        }
    } else {
        for id in enabled {
            writeln!(out, "${}", id)?;
        }
    }

    out.flush()?;
    Ok(path)
}
