//! # riiconv
//!
//! Converts Riivolution patch descriptions (region-aware memory patch
//! lists, XML) into Dolphin's patch INI format: named, toggle-able
//! groups of fixed-width address/value write instructions, one output
//! file per target region.
//!
//! This library provides functionality to:
//! - Parse a Riivolution `wiidisc` document into typed patch nodes
//! - Resolve patch values from inline hex or region-specific files
//! - Split raw payloads into 1/2/4-byte write primitives
//! - Emit `{gameId}{region}.ini` files with `[OnFrame]` sections
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = fs::read_to_string("sd/riivolution/mygame.xml")?;
//! let document = riiconv::PatchDocument::parse(&xml)?;
//!
//! // Translate every entry for every target region
//! let conversion = riiconv::convert(&document, "sd", "mygame")?;
//!
//! // Write one INI per region; empty enabled list means all enabled
//! for (region, groups) in &conversion.groups {
//!     riiconv::emit_region(Path::new("."), &conversion.game_id, region, groups, &[])?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod document;
pub mod emit;
pub mod primitive;
pub mod translate;
pub mod value;

// Re-export commonly used items
#[doc(inline)]
pub use convert::{convert, Conversion, RegionGroups};
#[doc(inline)]
pub use document::{
    MemoryPatchSpec, ParseError, PatchDocument, PatchEntry, ValueSource, REGION_ALL, REGION_TOKEN,
    UNSET_OFFSET,
};
#[doc(inline)]
pub use emit::emit_region;
#[doc(inline)]
pub use primitive::{split, PatchWidth, WritePrimitive};
#[doc(inline)]
pub use translate::translate;
#[doc(inline)]
pub use value::{resolve, ValueError};
