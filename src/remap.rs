// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::operation::Operation;

/// Translates a pre-commit position through the operation list that was
/// just applied, producing the post-commit position.
///
/// `Swap` is treated as neutral (not remapped) — it replaces exactly one
/// unit with exactly one new unit's worth of cursor advance as far as the
/// rest of the document is concerned, but this function only needs to
/// track foreign content shifting around `pos`, and a swap never shifts
/// anything.
///
/// `has_block_at_front` nudges a result of `0` up to `1`, so that a
/// selection which otherwise resolves to the very front of the document
/// ends up after a synthetic paragraph `ensureBlockAtFront` prepended.
pub fn position(pos: usize, ops: &[Operation], has_block_at_front: bool) -> usize {
    let mut cursor = 0usize;
    let mut pos = pos;
    for op in ops {
        if op.is_empty() {
            continue;
        }
        match op {
            Operation::Retain { len, .. } => {
                cursor += len;
            }
            Operation::Delete(n) => {
                if pos > cursor {
                    pos = pos.saturating_sub(*n);
                }
            }
            Operation::Insert { payload, .. } => {
                let l = payload.length();
                if pos >= cursor {
                    pos += l;
                    cursor += l;
                }
            }
            Operation::Swap { .. } => {}
        }
        if cursor > pos {
            break;
        }
    }
    if pos == 0 && has_block_at_front {
        1
    } else {
        pos
    }
}
