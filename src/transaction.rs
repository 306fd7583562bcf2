// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::applier;
use crate::attributes::Attributes;
use crate::delta::Delta;
use crate::payload::{codeunits, DeltaPayload};
use crate::operation::Operation;
use crate::selection::Selection;
use crate::types::block_type::BlockType;

/// Accumulates operations against a running cursor inside one `transact`
/// call. Every emitting method runs the "delete-or-retain-prefix" contract
/// first: if the document's selection is a range, it deletes that range at
/// the current cursor; otherwise, for methods that take an absolute `at`,
/// it retains forward to `at` (resetting the local cursor to 0 first if
/// `at` lies at or before the current cursor). Because of that reset, every
/// position emitted in a transaction is relative to the delta the
/// transaction started with, never to an intermediate state.
pub struct Transaction<'a> {
    delta: &'a Delta,
    selection: Selection,
    pub(crate) ops: Vec<Operation>,
    pub(crate) cursor: usize,
    pub(crate) has_block_at_front: bool,
}

impl<'a> Transaction<'a> {
    pub fn new(delta: &'a Delta, selection: Selection) -> Self {
        Transaction {
            delta,
            selection,
            ops: Vec::new(),
            cursor: selection.from_x(),
            has_block_at_front: false,
        }
    }

    fn prefix(&mut self) {
        if !self.selection.is_collapsed() {
            self.ops.push(Operation::delete(self.selection.distance_x()));
        }
    }

    fn prefix_at(&mut self, at: usize) {
        if !self.selection.is_collapsed() {
            self.ops.push(Operation::delete(self.selection.distance_x()));
            return;
        }
        self.retain_to(at);
    }

    /// Shared by `formatAt` and the `at`-prefix: reposition the local
    /// cursor to `at` via a plain retain, without ever deleting.
    fn retain_to(&mut self, at: usize) {
        if at <= self.cursor {
            self.cursor = 0;
        }
        let advance = at.saturating_sub(self.cursor);
        if advance > 0 {
            self.ops.push(Operation::retain(advance));
        }
        self.cursor = at;
    }

    pub fn insert<S: Into<String>>(&mut self, s: S, attrs: Attributes) -> &mut Self {
        self.prefix();
        let s = s.into();
        let len = codeunits::len(&s);
        self.ops.push(Operation::insert_text(s, attrs));
        self.cursor += len;
        self
    }

    pub fn insert_at<S: Into<String>>(&mut self, at: usize, s: S, attrs: Attributes) -> &mut Self {
        self.prefix_at(at);
        let s = s.into();
        let len = codeunits::len(&s);
        self.ops.push(Operation::insert_text(s, attrs));
        self.cursor += len;
        self
    }

    pub fn block(&mut self, bt: BlockType, attrs: Attributes) -> &mut Self {
        self.prefix();
        self.ops.push(Operation::insert_block(bt, attrs));
        self.cursor += 1;
        self
    }

    pub fn block_at(&mut self, at: usize, bt: BlockType, attrs: Attributes) -> &mut Self {
        self.prefix_at(at);
        self.ops.push(Operation::insert_block(bt, attrs));
        self.cursor += 1;
        self
    }

    pub fn convert(&mut self, bt: BlockType, attrs: Attributes) -> &mut Self {
        self.prefix();
        self.ops.push(Operation::swap_block(bt, Some(attrs)));
        self.cursor += 1;
        self
    }

    pub fn convert_at(&mut self, at: usize, bt: BlockType, attrs: Attributes) -> &mut Self {
        self.prefix_at(at);
        self.ops.push(Operation::swap_block(bt, Some(attrs)));
        self.cursor += 1;
        self
    }

    pub fn replace<S: Into<String>>(&mut self, s: S, attrs: Attributes) -> &mut Self {
        self.prefix();
        let s = s.into();
        let len = codeunits::len(&s);
        self.ops.push(Operation::swap_text(s, Some(attrs)));
        self.cursor += len;
        self
    }

    pub fn replace_at<S: Into<String>>(&mut self, at: usize, s: S, attrs: Attributes) -> &mut Self {
        self.prefix_at(at);
        let s = s.into();
        let len = codeunits::len(&s);
        self.ops.push(Operation::swap_text(s, Some(attrs)));
        self.cursor += len;
        self
    }

    /// Formats the current selection. Unlike every other builder method,
    /// `format`/`formatAt` never delete: running the shared delete-prefix
    /// here would remove the very selection being formatted. The cursor is
    /// instead repositioned to the start of the range via a plain retain.
    pub fn format(&mut self, attrs: Attributes, document_attrs: &mut Attributes) -> &mut Self {
        let at = self.selection.from_x();
        self.retain_to(at);
        self.ops
            .push(Operation::retain_attr(self.selection.distance_x(), attrs.clone()));
        *document_attrs = document_attrs.merge_overlay(&attrs);
        self
    }

    pub fn format_at(&mut self, at: usize, n: usize, attrs: Attributes) -> &mut Self {
        self.retain_to(at);
        self.ops.push(Operation::retain_attr(n, attrs));
        self
    }

    /// `delete(1)` on a collapsed selection is grapheme-aware: if the unit
    /// immediately before the cursor is part of a multi-code-unit grapheme
    /// (e.g. a ZWJ emoji sequence), the whole grapheme is removed.
    pub fn delete(&mut self, n: usize) -> &mut Self {
        if !self.selection.is_collapsed() {
            self.ops.push(Operation::delete(self.selection.distance_x()));
            return self;
        }
        let mut n = n;
        if n == 1 {
            if let Some(g) = last_grapheme_len_before(self.delta, self.cursor) {
                if g > 1 {
                    n = g;
                }
            }
        }
        if n == 0 {
            return self;
        }
        let target = self.cursor.saturating_sub(n);
        if target > 0 {
            self.ops.push(Operation::retain(target));
        }
        self.cursor = target;
        self.ops.push(Operation::delete(n));
        self
    }

    pub fn delete_at(&mut self, at: usize, n: usize) -> &mut Self {
        self.prefix_at(at);
        if n > 0 {
            self.ops.push(Operation::delete(n));
        }
        self
    }

    pub fn retain(&mut self, n: usize) -> &mut Self {
        self.prefix();
        if n > 0 {
            self.ops.push(Operation::retain(n));
            self.cursor += n;
        }
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.cursor = 0;
        let len = self.delta.length();
        if len > 0 {
            self.ops.push(Operation::delete(len));
        }
        self
    }

    /// Prepends a paragraph block if the transaction, applied against the
    /// current document, would otherwise start with text (or nothing).
    /// Returns whether a block was prepended.
    pub fn ensure_block_at_front(&mut self) -> bool {
        self.has_block_at_front = true;
        let mut simulated = self.delta.clone();
        applier::apply(&mut simulated, self.ops.clone());
        let needs_block = match simulated.first() {
            None => true,
            Some(entry) => entry.payload.is_text(),
        };
        if needs_block {
            self.ops
                .insert(0, Operation::insert_block(BlockType::Paragraph, Attributes::default()));
            self.cursor += 1;
        }
        needs_block
    }

    /// If the unit just before the cursor is a block of a different type,
    /// swaps it to `bt`; otherwise inserts a fresh block of type `bt`.
    /// Returns whether an existing block was converted.
    pub fn convert_if_needed(&mut self, bt: BlockType) -> bool {
        if self.cursor > 0 {
            if let Some((entry, _offset)) = self.delta.entry_at(self.cursor - 1) {
                if let DeltaPayload::Block(existing) = &entry.payload {
                    if *existing != bt {
                        self.convert_at(self.cursor - 1, bt, Attributes::default());
                        return true;
                    }
                }
            }
        }
        self.block(bt, Attributes::default());
        false
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

fn last_grapheme_len_before(delta: &Delta, pos: usize) -> Option<usize> {
    if pos == 0 {
        return None;
    }
    let (entry, offset) = delta.entry_at(pos - 1)?;
    let text = entry.payload.as_text()?;
    let (prefix, _) = codeunits::split_at(text, offset + 1);
    Some(codeunits::last_grapheme_len(&prefix))
}
