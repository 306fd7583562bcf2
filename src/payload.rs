// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::types::block_type::BlockType;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// What a delta entry (or an `Insert`/`Swap` operation) carries.
///
/// `Text` is measured in UTF-16 code units, not graphemes and not bytes —
/// this is the load-bearing indexing convention the whole applier is built
/// on (see `codeunits`).
#[derive(Clone, PartialEq, Debug)]
pub enum DeltaPayload {
    Text(String),
    Block(BlockType),
}

/// Wire shape for `DeltaPayload`: a bare string for text, an object
/// wrapping `block` otherwise. Kept as a private shadow type rather than
/// changing `DeltaPayload`'s own variant shape, since the tuple-variant
/// form is what the rest of the crate pattern-matches on.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PayloadWire {
    Block { block: BlockType },
    Text(String),
}

impl Serialize for DeltaPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DeltaPayload::Text(s) => PayloadWire::Text(s.clone()).serialize(serializer),
            DeltaPayload::Block(bt) => PayloadWire::Block { block: *bt }.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for DeltaPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match PayloadWire::deserialize(deserializer)? {
            PayloadWire::Text(s) => Ok(DeltaPayload::Text(s)),
            PayloadWire::Block { block } => Ok(DeltaPayload::Block(block)),
        }
    }
}

impl DeltaPayload {
    pub fn length(&self) -> usize {
        match self {
            DeltaPayload::Text(s) => codeunits::len(s),
            DeltaPayload::Block(_) => 1,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, DeltaPayload::Text(_))
    }

    pub fn is_block(&self) -> bool {
        matches!(self, DeltaPayload::Block(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DeltaPayload::Text(s) => Some(s.as_str()),
            DeltaPayload::Block(_) => None,
        }
    }
}

impl From<&str> for DeltaPayload {
    fn from(s: &str) -> Self {
        DeltaPayload::Text(s.to_string())
    }
}

impl From<String> for DeltaPayload {
    fn from(s: String) -> Self {
        DeltaPayload::Text(s)
    }
}

impl From<BlockType> for DeltaPayload {
    fn from(b: BlockType) -> Self {
        DeltaPayload::Block(b)
    }
}

/// UTF-16 code-unit bookkeeping for `DeltaPayload::Text`.
///
/// Positions throughout the applier, transaction builder and selection
/// remapper are code-unit offsets, not byte offsets, so every split of a
/// `String` has to go through `byte_offset_for` first.
pub mod codeunits {
    /// Length of `s` in UTF-16 code units.
    pub fn len(s: &str) -> usize {
        s.encode_utf16().count()
    }

    /// Byte offset into `s` corresponding to `units` UTF-16 code units in.
    /// Clamped to `s.len()` if `units` is past the end.
    pub fn byte_offset_for(s: &str, units: usize) -> usize {
        if units == 0 {
            return 0;
        }
        let mut seen = 0usize;
        for (byte_idx, ch) in s.char_indices() {
            if seen >= units {
                return byte_idx;
            }
            seen += ch.len_utf16();
        }
        s.len()
    }

    /// Splits `s` at the given code-unit offset into `(left, right)`.
    pub fn split_at(s: &str, units: usize) -> (String, String) {
        let off = byte_offset_for(s, units);
        (s[..off].to_string(), s[off..].to_string())
    }

    /// Code-unit length of the last grapheme cluster in `s`, or 0 if `s` is
    /// empty. Used by backspace to decide how many code units a single
    /// "character" deletion should remove (e.g. a ZWJ family emoji).
    pub fn last_grapheme_len(s: &str) -> usize {
        use unicode_segmentation::UnicodeSegmentation;
        s.graphemes(true).last().map(len).unwrap_or(0)
    }
}
