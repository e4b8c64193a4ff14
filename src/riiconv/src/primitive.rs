//! Fixed-width write primitives.
//!
//! Dolphin's OnFrame patches write 1, 2 or 4 bytes at a time. A raw
//! payload is split greedily into the widest primitive that still fits
//! the remaining bytes, without regard to address alignment.

use byteorder::{BigEndian, ByteOrder};
use std::fmt;

/// Width of a single write primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchWidth {
    Byte,
    Word,
    Dword,
}

impl PatchWidth {
    /// Width in bytes.
    pub fn byte_len(self) -> usize {
        match self {
            PatchWidth::Byte => 1,
            PatchWidth::Word => 2,
            PatchWidth::Dword => 4,
        }
    }
}

/// One resolved output instruction: write `value` at `address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WritePrimitive {
    pub address: u32,
    pub width: PatchWidth,
    /// Value, sized to `width` (upper bits zero for byte and word).
    pub value: u32,
}

impl fmt::Display for WritePrimitive {
    /// Formats as `0x{address:08X}:{label}:0x{value}` with the value
    /// padded to 2, 4 or 8 uppercase hex digits to match the width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.width {
            PatchWidth::Byte => write!(f, "0x{:08X}:byte:0x{:02X}", self.address, self.value),
            PatchWidth::Word => write!(f, "0x{:08X}:word:0x{:04X}", self.address, self.value),
            PatchWidth::Dword => write!(f, "0x{:08X}:dword:0x{:08X}", self.address, self.value),
        }
    }
}

/// Split `data` into write primitives starting at `offset`.
///
/// Greedy walk over the payload: fewer than 2 bytes left emits a byte,
/// fewer than 4 a big-endian word, otherwise a big-endian dword.
/// Primitive addresses are `offset` plus the running byte index. Empty
/// data yields nothing.
pub fn split(offset: u32, data: &[u8]) -> Split<'_> {
    Split {
        data,
        offset,
        pos: 0,
    }
}

/// Iterator returned by [`split`].
pub struct Split<'a> {
    data: &'a [u8],
    offset: u32,
    pos: usize,
}

impl Iterator for Split<'_> {
    type Item = WritePrimitive;

    fn next(&mut self) -> Option<WritePrimitive> {
        let remaining = self.data.len() - self.pos;
        if remaining == 0 {
            return None;
        }

        let address = self.offset.wrapping_add(self.pos as u32);
        let (width, value) = if remaining < 2 {
            (PatchWidth::Byte, u32::from(self.data[self.pos]))
        } else if remaining < 4 {
            (
                PatchWidth::Word,
                u32::from(BigEndian::read_u16(&self.data[self.pos..])),
            )
        } else {
            (PatchWidth::Dword, BigEndian::read_u32(&self.data[self.pos..]))
        };

        self.pos += width.byte_len();
        Some(WritePrimitive {
            address,
            width,
            value,
        })
    }
}
