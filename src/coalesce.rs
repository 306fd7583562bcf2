// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::delta::Delta;
use crate::entry::DeltaEntry;
use crate::payload::DeltaPayload;

/// Merges adjacent text entries that carry structurally equal attributes
/// into one entry. Not part of the commit path — the applier deliberately
/// leaves adjacent same-attribute runs unmerged (see scenario 1: inserting
/// " Today" into the middle of "Hello World" leaves three text entries).
/// Call this explicitly when a caller (e.g. a serializer) wants a minimal
/// representation.
pub fn minimize(delta: &Delta) -> Delta {
    let mut out: Vec<DeltaEntry> = Vec::with_capacity(delta.len());
    for entry in delta.iter() {
        let merged = match (out.last_mut(), &entry.payload) {
            (Some(prev), DeltaPayload::Text(s)) if prev.attributes == entry.attributes => {
                if let DeltaPayload::Text(prev_s) = &mut prev.payload {
                    prev_s.push_str(s);
                    true
                } else {
                    false
                }
            }
            _ => false,
        };
        if !merged {
            out.push(entry.clone());
        }
    }
    Delta::new(out)
}
