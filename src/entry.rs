// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::attributes::Attributes;
use crate::payload::DeltaPayload;
use serde_derive::{Deserialize, Serialize};

/// One element of a document delta: a text run or a block marker, with
/// attributes. Delta entries are immutable values — a "mutation" replaces
/// an entry in place inside the delta sequence.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DeltaEntry {
    #[serde(rename = "insert")]
    pub payload: DeltaPayload,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl DeltaEntry {
    pub fn new<P: Into<DeltaPayload>>(payload: P) -> Self {
        DeltaEntry {
            payload: payload.into(),
            attributes: Attributes::default(),
        }
    }

    pub fn with_attrs<P: Into<DeltaPayload>>(payload: P, attributes: Attributes) -> Self {
        DeltaEntry {
            payload: payload.into(),
            attributes,
        }
    }

    pub fn length(&self) -> usize {
        self.payload.length()
    }
}
