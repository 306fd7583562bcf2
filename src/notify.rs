// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::document::Document;
use crate::operation::Operation;

/// The document's observable surface. A host embeds its own event/DOM
/// layer by implementing this trait; the crate itself only fires the four
/// hooks at the right moments and ships a logging default.
///
/// All methods default to a no-op, so an implementor only overrides the
/// events it cares about.
pub trait Notifier {
    fn before_transaction(&mut self, _document: &Document, _ops: &[Operation]) {}
    fn after_transaction(&mut self, _document: &Document, _ops: &[Operation]) {}
    fn before_apply(&mut self, _document: &Document, _ops: &[Operation]) {}
    fn after_apply(&mut self, _document: &Document, _ops: &[Operation]) {}
}

/// Default `Notifier` that just traces each event through the `log` crate.
#[derive(Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn before_transaction(&mut self, _document: &Document, ops: &[Operation]) {
        log::trace!("before_transaction: {} ops", ops.len());
    }
    fn after_transaction(&mut self, document: &Document, ops: &[Operation]) {
        log::trace!(
            "after_transaction: {} ops, document length now {}",
            ops.len(),
            document.length()
        );
    }
    fn before_apply(&mut self, _document: &Document, ops: &[Operation]) {
        log::trace!("before_apply: {} ops", ops.len());
    }
    fn after_apply(&mut self, document: &Document, ops: &[Operation]) {
        log::trace!(
            "after_apply: {} ops, document length now {}",
            ops.len(),
            document.length()
        );
    }
}

/// A `Notifier` that records nothing and does nothing — useful for tests
/// that don't want log output, and as the default when a `Document` is
/// constructed without an explicit notifier.
#[derive(Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {}

/// Forwards through to the boxed trait object, so `Document`'s stored
/// `Box<dyn Notifier>` can be passed anywhere a `Notifier` is expected
/// (e.g. the shared `commit_with` helper) without an extra match.
impl Notifier for Box<dyn Notifier> {
    fn before_transaction(&mut self, document: &Document, ops: &[Operation]) {
        (**self).before_transaction(document, ops);
    }
    fn after_transaction(&mut self, document: &Document, ops: &[Operation]) {
        (**self).after_transaction(document, ops);
    }
    fn before_apply(&mut self, document: &Document, ops: &[Operation]) {
        (**self).before_apply(document, ops);
    }
    fn after_apply(&mut self, document: &Document, ops: &[Operation]) {
        (**self).after_apply(document, ops);
    }
}
