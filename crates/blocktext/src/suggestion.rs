// Copyright 2026 The Blocktext Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Mention trigger detection.
//!
//! As the user types, the host asks whether the cursor sits in a live
//! `@`-run: an `@` within the last [`TRIGGER_WINDOW`] code units whose
//! following text looks like a query (it must not start with whitespace and
//! cannot contain another `@`). The returned trigger carries the query for
//! roster filtering and the block offsets of the run, so a picked mention
//! can replace it.

use once_cell::sync::Lazy;
use regex::Regex;
use widestring::Utf16Str;

use crate::{utf16, DocumentState};

/// How far back from the cursor an `@` still counts, in UTF-16 code units.
pub const TRIGGER_WINDOW: usize = 20;

/// A bare `@`, or `@` followed by a query that does not open with
/// whitespace. Another `@` ends the run by construction.
static MENTION_QUERY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(?:[^@\s][^@]*)?$").expect("static pattern"));

/// A live `@`-run under the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MentionTrigger {
    /// The text typed after `@`.
    pub query: String,
    /// Block offset of the `@`.
    pub start: usize,
    /// Block offset of the cursor (exclusive end of the run).
    pub end: usize,
}

/// Find a live `@`-run ending at `cursor` in `text`.
pub fn detect_mention_trigger(
    text: &Utf16Str,
    cursor: usize,
) -> Option<MentionTrigger> {
    let cursor = utf16::clamp_offset(text, cursor);
    let window_start = cursor.saturating_sub(TRIGGER_WINDOW);
    let window = text.get(window_start..cursor)?;

    let at = window
        .as_slice()
        .iter()
        .rposition(|&unit| unit == u16::from(b'@'))?;
    let start = window_start + at;

    let run = utf16::slice(text, start, cursor).to_string();
    if !MENTION_QUERY.is_match(&run) {
        return None;
    }

    Some(MentionTrigger {
        query: run[1..].to_owned(),
        start,
        end: cursor,
    })
}

impl DocumentState {
    /// The live `@`-run at the current cursor, if the selection is a caret
    /// inside an existing block.
    pub fn mention_trigger(&self) -> Option<MentionTrigger> {
        if !self.selection.is_collapsed() {
            return None;
        }
        let block = self.blocks.get(&self.selection.start_key)?;
        detect_mention_trigger(&block.text, self.selection.start_offset)
    }
}
