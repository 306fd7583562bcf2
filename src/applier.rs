// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::delta::Delta;
use crate::entry::DeltaEntry;
use crate::payload::{codeunits, DeltaPayload};
use crate::operation::Operation;
use std::collections::VecDeque;

/// Folds `ops` into `delta` in place — the position-indexed splice engine
/// the rest of the crate is built around.
///
/// `delta` is walked with a lagging cursor `(i, d_pos)` that only catches
/// up to the operation cursor when an operation actually needs to inspect
/// or split the entry it lands on; `Retain` without an overlay never
/// touches `i` at all, the catch-up for it is deferred to whatever
/// operation runs next. This mirrors the reference algorithm's re-entrant
/// walk while keeping each operation's effect in one self-contained step
/// instead of being revisited across outer-loop passes.
pub fn apply(delta: &mut Delta, ops: Vec<Operation>) {
    let mut ops: VecDeque<Operation> = ops.into();
    let mut cursor = 0usize;
    let mut i = 0usize;
    let mut d_pos = 0usize;
    let mut anchor: Option<usize> = None;

    while let Some(op) = ops.pop_front() {
        match op {
            Operation::Retain {
                len,
                attributes: None,
            } => {
                cursor += len;
                anchor = None;
            }
            Operation::Retain {
                len,
                attributes: Some(attrs),
            } => {
                let a = *anchor.get_or_insert_with(|| {
                    let a = cursor;
                    cursor += len;
                    a
                });
                apply_overlay(delta, &mut i, &mut d_pos, a, cursor, &attrs);
                anchor = None;
            }
            Operation::Insert { payload, attributes } => {
                apply_insert(delta, &mut i, &mut d_pos, &mut cursor, payload, attributes);
                anchor = None;
            }
            Operation::Swap { payload, attributes } => {
                apply_swap(
                    delta,
                    &mut i,
                    &mut d_pos,
                    &mut cursor,
                    payload,
                    attributes.unwrap_or_default(),
                );
                anchor = None;
            }
            Operation::Delete(n) => {
                apply_delete(delta, &mut i, &mut d_pos, cursor, n);
                anchor = None;
            }
        }
    }
}

/// Catches up `(i, d_pos)` past every entry that ends at or before `cursor`.
/// Returns the length of the entry now at `i` (0 if `i` is past the end).
fn catch_up(delta: &Delta, i: &mut usize, d_pos: &mut usize, cursor: usize) -> usize {
    loop {
        if *i >= delta.len() {
            return 0;
        }
        let len = delta[*i].length();
        if cursor >= *d_pos + len {
            *d_pos += len;
            *i += 1;
        } else {
            return len;
        }
    }
}

/// Splits `delta[i]` (a text entry) at `offset` code units, replacing it in
/// place and inserting the tail right after it. `i` keeps pointing at the
/// left half.
fn split_entry(delta: &mut Delta, i: usize, offset: usize) {
    let entry = delta[i].clone();
    let DeltaPayload::Text(s) = &entry.payload else {
        return;
    };
    let (left, right) = codeunits::split_at(s, offset);
    delta[i] = DeltaEntry::with_attrs(left, entry.attributes.clone());
    delta.insert(i + 1, DeltaEntry::with_attrs(right, entry.attributes));
}

fn apply_overlay(
    delta: &mut Delta,
    i: &mut usize,
    d_pos: &mut usize,
    anchor: usize,
    cursor: usize,
    attrs: &crate::attributes::Attributes,
) {
    loop {
        if *i >= delta.len() {
            return;
        }
        let d_len = delta[*i].length();
        if anchor >= *d_pos + d_len {
            *d_pos += d_len;
            *i += 1;
        } else if anchor > *d_pos {
            split_entry(delta, *i, anchor - *d_pos);
            *i += 1;
            *d_pos = anchor;
        } else if cursor >= *d_pos + d_len {
            let merged = delta[*i].attributes.merge_overlay(attrs);
            delta[*i].attributes = merged;
            *d_pos += d_len;
            *i += 1;
        } else if cursor > *d_pos && delta[*i].payload.is_text() {
            split_entry(delta, *i, cursor - *d_pos);
            let merged = delta[*i].attributes.merge_overlay(attrs);
            delta[*i].attributes = merged;
            *d_pos = cursor;
            *i += 1;
            return;
        } else {
            *i += 1;
            return;
        }
    }
}

fn apply_insert(
    delta: &mut Delta,
    i: &mut usize,
    d_pos: &mut usize,
    cursor: &mut usize,
    payload: DeltaPayload,
    attributes: crate::attributes::Attributes,
) {
    catch_up(delta, i, d_pos, *cursor);
    if *i >= delta.len() {
        let l = payload.length();
        delta.push(DeltaEntry::with_attrs(payload, attributes));
        *i += 1;
        *d_pos = *cursor + l;
        *cursor = *d_pos;
    } else if *cursor == *d_pos {
        let l = payload.length();
        delta.insert(*i, DeltaEntry::with_attrs(payload, attributes));
        *i += 1;
        *d_pos += l;
        *cursor = *d_pos;
    } else if delta[*i].payload.is_text() {
        let off = *cursor - *d_pos;
        split_entry(delta, *i, off);
        delta.insert(*i + 1, DeltaEntry::with_attrs(payload, attributes));
        *i += 1;
        *d_pos = *cursor;
    }
}

fn apply_swap(
    delta: &mut Delta,
    i: &mut usize,
    d_pos: &mut usize,
    cursor: &mut usize,
    payload: DeltaPayload,
    attributes: crate::attributes::Attributes,
) {
    catch_up(delta, i, d_pos, *cursor);
    let l = payload.length();
    if *i >= delta.len() {
        delta.push(DeltaEntry::with_attrs(payload, attributes));
        *i += 1;
        *d_pos = *cursor + l;
        *cursor = *d_pos;
    } else if *cursor == *d_pos {
        let old = delta[*i].clone();
        delta[*i] = DeltaEntry::with_attrs(payload, attributes);
        if let DeltaPayload::Text(s) = &old.payload {
            let (_, remainder) = codeunits::split_at(s, 1);
            if !remainder.is_empty() {
                delta.insert(*i + 1, DeltaEntry::with_attrs(remainder, old.attributes));
            }
        }
        *i += 1;
        *d_pos = *cursor + l;
        *cursor = *d_pos;
    } else if delta[*i].payload.is_text() {
        let off = *cursor - *d_pos;
        let old = delta[*i].clone();
        let DeltaPayload::Text(s) = &old.payload else {
            unreachable!()
        };
        let (left, right) = codeunits::split_at(s, off);
        let (_, right_tail) = codeunits::split_at(&right, 1);

        delta[*i] = DeltaEntry::with_attrs(left, old.attributes.clone());
        let mut at = *i + 1;
        delta.insert(at, DeltaEntry::with_attrs(payload, attributes));
        at += 1;
        if !right_tail.is_empty() {
            delta.insert(at, DeltaEntry::with_attrs(right_tail, old.attributes));
        }
        *i += 1;
        *d_pos = *cursor;
    }
}

fn apply_delete(delta: &mut Delta, i: &mut usize, d_pos: &mut usize, cursor: usize, n: usize) {
    let mut remaining = n;
    loop {
        if *i >= delta.len() {
            return;
        }
        let d_len = delta[*i].length();
        if cursor >= *d_pos + d_len {
            *d_pos += d_len;
            *i += 1;
            continue;
        }
        let is_text = delta[*i].payload.is_text();
        if is_text && cursor == *d_pos {
            if d_len > remaining {
                let DeltaPayload::Text(s) = &delta[*i].payload else {
                    unreachable!()
                };
                let (_, tail) = codeunits::split_at(s, remaining);
                delta[*i].payload = DeltaPayload::Text(tail);
                return;
            } else if d_len == remaining {
                delta.remove(*i);
                return;
            } else {
                delta.remove(*i);
                remaining -= d_len;
                continue;
            }
        } else if is_text && cursor > *d_pos {
            let off = cursor - *d_pos;
            split_entry(delta, *i, off);
            *d_pos = cursor;
            *i += 1;
            continue;
        } else {
            delta.remove(*i);
            *d_pos = cursor;
            if remaining > 1 {
                remaining -= 1;
                continue;
            }
            return;
        }
    }
}
