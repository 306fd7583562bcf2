// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::entry::DeltaEntry;
use serde_derive::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// A document: a flat, position-indexed sequence of delta entries.
///
/// `Delta` wraps `Vec<DeltaEntry>` the way the original library wrapped its
/// operation list — `Deref`/`DerefMut` give direct access to the usual
/// `Vec` methods for iteration, slicing and indexing, while `length()` and
/// `entry_at()` add the document-level semantics the applier and document
/// facade need.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Delta {
    #[serde(rename = "ops")]
    entries: Vec<DeltaEntry>,
}

impl Delta {
    pub fn new(entries: Vec<DeltaEntry>) -> Self {
        Delta { entries }
    }

    /// Sum of every entry's length.
    pub fn length(&self) -> usize {
        self.entries.iter().map(DeltaEntry::length).sum()
    }

    /// The entry covering `pos`, together with `pos`'s offset inside it.
    pub fn entry_at(&self, pos: usize) -> Option<(&DeltaEntry, usize)> {
        let mut start = 0;
        for entry in &self.entries {
            let len = entry.length();
            if pos < start + len {
                return Some((entry, pos - start));
            }
            start += len;
        }
        None
    }
}

impl Deref for Delta {
    type Target = Vec<DeltaEntry>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl DerefMut for Delta {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.entries
    }
}

impl From<Vec<DeltaEntry>> for Delta {
    fn from(entries: Vec<DeltaEntry>) -> Self {
        Delta { entries }
    }
}
