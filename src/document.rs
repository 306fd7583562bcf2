// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use anyhow::Result;
use crate::applier;
use crate::attributes::Attributes;
use crate::delta::Delta;
use crate::entry::DeltaEntry;
use crate::error::Error;
use crate::notify::{LogNotifier, NoopNotifier, Notifier};
use crate::operation::Operation;
use crate::payload::DeltaPayload;
use crate::remap;
use crate::selection::Selection;
use crate::transaction::Transaction;

/// Holds the current delta, the current selection and the "typing"
/// attributes, and ties the transaction builder, applier and selection
/// remapper together into one mutation surface.
///
/// A `Document` owns its own `Notifier`; construct with [`Document::new`]
/// for the logging default or [`Document::with_notifier`] to plug in a
/// host's own event surface.
pub struct Document {
    pub delta: Delta,
    pub selection: Selection,
    pub attributes: Attributes,
    notifier: Box<dyn Notifier>,
}

/// Cloning a `Document` deliberately drops to a silent `NoopNotifier`
/// rather than carrying the original's notifier forward: the main use of
/// `Clone` is `transact_simulate`, whose whole point is to try a
/// transaction without firing any observable events.
impl Clone for Document {
    fn clone(&self) -> Self {
        Document {
            delta: self.delta.clone(),
            selection: self.selection,
            attributes: self.attributes.clone(),
            notifier: Box::new(NoopNotifier),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Document {
            delta: Delta::default(),
            selection: Selection::default(),
            attributes: Attributes::default(),
            notifier: Box::new(LogNotifier),
        }
    }

    pub fn with_delta(delta: Delta) -> Self {
        Document {
            delta,
            selection: Selection::default(),
            attributes: Attributes::default(),
            notifier: Box::new(LogNotifier),
        }
    }

    pub fn with_notifier<N: Notifier + 'static>(notifier: N) -> Self {
        Document {
            delta: Delta::default(),
            selection: Selection::default(),
            attributes: Attributes::default(),
            notifier: Box::new(notifier),
        }
    }

    pub fn set_notifier<N: Notifier + 'static>(&mut self, notifier: N) {
        self.notifier = Box::new(notifier);
    }

    /// Sum of every entry's length in the document's delta.
    pub fn length(&self) -> usize {
        self.delta.length()
    }

    /// The entry covering `pos`, or `None` if `pos` is past the end.
    pub fn delta_at(&self, pos: usize) -> Option<&DeltaEntry> {
        self.delta.entry_at(pos).map(|(entry, _)| entry)
    }

    /// The grapheme or block payload at `pos`. For text entries this
    /// returns the single grapheme covering `pos`, not the whole run.
    pub fn fetch_at(&self, pos: usize) -> Option<FetchedUnit<'_>> {
        let (entry, offset) = self.delta.entry_at(pos)?;
        match &entry.payload {
            DeltaPayload::Block(bt) => Some(FetchedUnit::Block(*bt)),
            DeltaPayload::Text(s) => {
                use unicode_segmentation::UnicodeSegmentation;
                let mut seen = 0usize;
                for g in s.graphemes(true) {
                    let len = crate::payload::codeunits::len(g);
                    if offset < seen + len {
                        return Some(FetchedUnit::Grapheme(g));
                    }
                    seen += len;
                }
                None
            }
        }
    }

    /// Applies a raw operation list directly: no transaction cursor
    /// semantics, no selection remap. Fires `before_apply`/`after_apply`.
    pub fn apply(&mut self, ops: Vec<Operation>) {
        let mut notifier = std::mem::replace(&mut self.notifier, Box::new(NoopNotifier));
        notifier.before_apply(self, &ops);
        applier::apply(&mut self.delta, ops.clone());
        notifier.after_apply(self, &ops);
        self.notifier = notifier;
    }

    /// Same as [`Document::apply`], but notifies through `notifier`
    /// instead of the document's own — a one-off override of the event
    /// hooks for this call only.
    pub fn apply_with<N: Notifier>(&mut self, ops: Vec<Operation>, notifier: &mut N) {
        notifier.before_apply(self, &ops);
        applier::apply(&mut self.delta, ops.clone());
        notifier.after_apply(self, &ops);
    }

    /// Runs `f` against a [`Transaction`] builder seeded from the current
    /// delta and selection. If `f` returns `true`, or the builder emitted
    /// no operations, the transaction is discarded: delta and selection
    /// are left untouched and no events fire. Otherwise the operations are
    /// applied, the selection is remapped through them, and
    /// `before_transaction`/`after_transaction` fire around the commit.
    ///
    /// Returns whether the transaction committed.
    pub fn transact<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Transaction) -> bool,
    {
        let (ops, has_block_at_front, cancelled) = self.build(f);
        if cancelled || ops.is_empty() {
            return false;
        }
        self.commit(ops, has_block_at_front);
        true
    }

    /// Like [`Document::transact`], but fatal where `transact` is silent:
    /// an empty or cancelled result raises [`Error::EmptyTransaction`]
    /// instead of being discarded quietly. No actual async runtime is
    /// involved, only the stricter error contract a deferred commit wants.
    pub fn transact_async<F>(&mut self, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Transaction) -> bool,
    {
        let (ops, has_block_at_front, cancelled) = self.build(f);
        if cancelled || ops.is_empty() {
            return Err(Error::EmptyTransaction);
        }
        self.commit(ops, has_block_at_front);
        Ok(())
    }

    /// Runs `f` against a deep clone of this document and returns the
    /// clone, committed or not. The receiver is never mutated.
    pub fn transact_simulate<F>(&self, f: F) -> Document
    where
        F: FnOnce(&mut Transaction) -> bool,
    {
        let mut clone = self.clone();
        clone.transact(f);
        clone
    }

    /// Like [`Document::transact`], but notifies through `notifier` instead
    /// of the document's own for this call only — the `cb` override from
    /// spec.md §6's `document.transact(fn, cb?)` ("suppressed when `cb`
    /// provided; `cb(doc, tr)` runs instead").
    ///
    /// Returns whether the transaction committed.
    pub fn transact_with<F, N>(&mut self, f: F, notifier: &mut N) -> bool
    where
        F: FnOnce(&mut Transaction) -> bool,
        N: Notifier,
    {
        let (ops, has_block_at_front, cancelled) = self.build(f);
        if cancelled || ops.is_empty() {
            return false;
        }
        self.commit_with(ops, has_block_at_front, notifier);
        true
    }

    fn build<F>(&mut self, f: F) -> (Vec<Operation>, bool, bool)
    where
        F: FnOnce(&mut Transaction) -> bool,
    {
        let mut tr = Transaction::new(&self.delta, self.selection);
        let cancelled = f(&mut tr);
        (tr.ops, tr.has_block_at_front, cancelled)
    }

    fn commit(&mut self, ops: Vec<Operation>, has_block_at_front: bool) {
        let mut notifier = std::mem::replace(&mut self.notifier, Box::new(NoopNotifier));
        self.commit_with(ops, has_block_at_front, &mut notifier);
        self.notifier = notifier;
    }

    fn commit_with<N: Notifier>(&mut self, ops: Vec<Operation>, has_block_at_front: bool, notifier: &mut N) {
        notifier.before_transaction(self, &ops);
        applier::apply(&mut self.delta, ops.clone());
        self.selection.start = remap::position(self.selection.start, &ops, has_block_at_front);
        self.selection.end = remap::position(self.selection.end, &ops, has_block_at_front);
        notifier.after_transaction(self, &ops);
    }
}

/// The unit [`Document::fetch_at`] returns: either a single grapheme
/// (borrowed from the underlying text entry) or a block marker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FetchedUnit<'a> {
    Grapheme(&'a str),
    Block(crate::types::block_type::BlockType),
}
