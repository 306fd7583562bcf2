// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::attributes::Attributes;
use crate::payload::DeltaPayload;
use crate::types::block_type::BlockType;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One element of a transaction's emitted list.
///
/// `Insert` shares its shape with a `DeltaEntry` (payload + attributes);
/// `Retain`'s attributes, when present, are an overlay merged into the
/// entries it spans rather than a replacement. `Swap` replaces the single
/// unit at the cursor with a new payload.
#[derive(Clone, PartialEq, Debug)]
pub enum Operation {
    Insert {
        payload: DeltaPayload,
        attributes: Attributes,
    },
    Retain {
        len: usize,
        attributes: Option<Attributes>,
    },
    Delete(usize),
    Swap {
        payload: DeltaPayload,
        attributes: Option<Attributes>,
    },
}

/// Wire shape: `{insert|retain|delete|swap, attributes?}` — the tag key
/// also carries the operation's length-bearing value, rather than a
/// separate `length` field.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum OperationWire {
    Insert {
        insert: DeltaPayload,
        #[serde(default, skip_serializing_if = "Attributes::is_empty")]
        attributes: Attributes,
    },
    Retain {
        retain: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attributes: Option<Attributes>,
    },
    Delete {
        delete: usize,
    },
    Swap {
        swap: DeltaPayload,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attributes: Option<Attributes>,
    },
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self.clone() {
            Operation::Insert { payload, attributes } => OperationWire::Insert { insert: payload, attributes },
            Operation::Retain { len, attributes } => OperationWire::Retain { retain: len, attributes },
            Operation::Delete(n) => OperationWire::Delete { delete: n },
            Operation::Swap { payload, attributes } => OperationWire::Swap { swap: payload, attributes },
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match OperationWire::deserialize(deserializer)? {
            OperationWire::Insert { insert, attributes } => Operation::Insert { payload: insert, attributes },
            OperationWire::Retain { retain, attributes } => Operation::Retain { len: retain, attributes },
            OperationWire::Delete { delete } => Operation::Delete(delete),
            OperationWire::Swap { swap, attributes } => Operation::Swap { payload: swap, attributes },
        })
    }
}

impl Operation {
    pub fn insert_text<S: Into<String>>(s: S, attributes: Attributes) -> Self {
        Operation::Insert {
            payload: DeltaPayload::Text(s.into()),
            attributes,
        }
    }

    pub fn insert_block(bt: BlockType, attributes: Attributes) -> Self {
        Operation::Insert {
            payload: DeltaPayload::Block(bt),
            attributes,
        }
    }

    pub fn retain(len: usize) -> Self {
        Operation::Retain {
            len,
            attributes: None,
        }
    }

    pub fn retain_attr(len: usize, attributes: Attributes) -> Self {
        Operation::Retain {
            len,
            attributes: Some(attributes),
        }
    }

    pub fn delete(n: usize) -> Self {
        Operation::Delete(n)
    }

    pub fn swap_text<S: Into<String>>(s: S, attributes: Option<Attributes>) -> Self {
        Operation::Swap {
            payload: DeltaPayload::Text(s.into()),
            attributes,
        }
    }

    pub fn swap_block(bt: BlockType, attributes: Option<Attributes>) -> Self {
        Operation::Swap {
            payload: DeltaPayload::Block(bt),
            attributes,
        }
    }

    /// The cursor distance this operation advances through the *original*
    /// document (used by `remap::position`). `Swap` is treated as neutral —
    /// it consumes and produces exactly one unit of content at the cursor.
    pub fn is_empty(&self) -> bool {
        match self {
            Operation::Insert { payload, .. } => payload.length() == 0,
            Operation::Retain { len, .. } | Operation::Delete(len) => *len == 0,
            Operation::Swap { .. } => false,
        }
    }
}
