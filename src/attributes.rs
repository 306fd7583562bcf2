// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;
#[cfg(test)]
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::types::attr_val::AttrVal;

/// Attributes hold the closed set of recognized formatting keys that may be
/// attached to a delta entry or carried as a retain-overlay. Keys outside
/// the recognized set are accepted and stored (pass-through, see the
/// "unknown attribute keys" error policy) but have no typed accessor.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(flatten)]
    attr: HashMap<String, AttrVal>,
}

macro_rules! bool_key {
    ($getter:ident, $key:expr) => {
        pub fn $getter(&self) -> Option<bool> {
            self.attr.get($key).and_then(|v| v.bool_val().ok())
        }
    };
}

macro_rules! string_key {
    ($getter:ident, $key:expr) => {
        pub fn $getter(&self) -> Option<&str> {
            self.attr.get($key).and_then(|v| v.str_val().ok())
        }
    };
}

impl Attributes {
    /// # insert()
    ///
    /// Insert a value for a given key into the attributes
    pub fn insert<K: Into<String>, V: Into<AttrVal>>(&mut self, key: K, value: V) {
        self.attr.insert(key.into(), value.into());
    }

    /// # is_empty()
    ///
    /// Returns true when there is no content in the attributes.
    pub fn is_empty(&self) -> bool {
        self.attr.is_empty()
    }

    /// # merge_overlay()
    ///
    /// Shallow-merges `overlay` on top of `self`: keys present in `overlay`
    /// win, including an explicit `false`/`Null` value (a `{bold: false}`
    /// overlay sets `bold` to false, it does not remove the key).
    pub fn merge_overlay(&self, overlay: &Attributes) -> Attributes {
        let mut merged = self.clone();
        for (k, v) in &overlay.attr {
            merged.attr.insert(k.clone(), v.clone());
        }
        merged
    }

    bool_key!(bold, "bold");
    bool_key!(italic, "italic");
    string_key!(font_size, "fontSize");
    string_key!(font_family, "fontFamily");
    string_key!(font_weight, "fontWeight");
    string_key!(font_style, "fontStyle");
    string_key!(line_height, "lineHeight");
    string_key!(color, "color");
    string_key!(vertical_align, "verticalAlign");
    string_key!(align, "align");

    /// `underline` may be a bare bool or a `{color?, style?}` map; callers
    /// that only care whether the text is underlined at all should test
    /// `get("underline").is_some_and(|v| !matches!(v, AttrVal::Bool(false)))`.
    pub fn underline(&self) -> Option<&AttrVal> {
        self.attr.get("underline")
    }

    pub fn strikethrough(&self) -> Option<&AttrVal> {
        self.attr.get("strikethrough")
    }
}

impl Deref for Attributes {
    type Target = HashMap<String, AttrVal>;

    fn deref(&self) -> &Self::Target {
        &self.attr
    }
}

impl DerefMut for Attributes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.attr
    }
}

impl From<HashMap<String, AttrVal>> for Attributes {
    fn from(m: HashMap<String, AttrVal>) -> Self {
        Attributes { attr: m }
    }
}

#[cfg(test)]
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", display_fmt(self))
    }
}

//It is not possible to extend a trait defined in another crate
//In this case that is HashMap, so we define a function instead
#[cfg(test)]
pub(crate) fn display_fmt(attr: &Attributes) -> String {
    let mut at = String::new();
    for (k, v) in attr.iter() {
        if at.is_empty() {
            at = format!(r#"{k:?}:{v}"#);
        } else {
            at = format!(r#"{at}; {k:?}:{v}"#);
        }
    }
    format!(r#" Attr[{at}] "#)
}
