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

//! Raw text replacement.
//!
//! The host's editable surface owns keystroke handling; when a block's
//! text settles it is pushed back here wholesale. Replacing text re-fits
//! both range sets to the new length and re-clamps the selection, so the
//! range invariant holds no matter what the host sends.

use log::trace;
use widestring::Utf16String;

use crate::entity::clamp_entity_ranges;
use crate::style_range::clamp_ranges;
use crate::{utf16, DocumentState};

use super::DocumentModel;

impl DocumentState {
    pub(crate) fn with_block_text_replaced(
        &self,
        key: &str,
        text: Utf16String,
    ) -> Option<Self> {
        let Some(index) = self.blocks.find_index(key) else {
            trace!("replace text: block {key:?} not found, ignoring");
            return None;
        };
        let block = self.blocks.at(index)?;

        let mut updated = block.clone();
        updated.style_ranges = clamp_ranges(&block.style_ranges, text.len());
        updated.entity_ranges =
            clamp_entity_ranges(&block.entity_ranges, text.len());
        updated.text = text;

        let mut next = self.clone();
        next.push_undo();

        // Selection offsets into this block may now be out of range.
        if next.selection.start_key == key {
            next.selection.start_offset =
                utf16::clamp_offset(&updated.text, next.selection.start_offset);
        }
        if next.selection.end_key == key {
            next.selection.end_offset =
                utf16::clamp_offset(&updated.text, next.selection.end_offset);
        }

        next.blocks = self.blocks.replace_at(index, updated);
        Some(next)
    }
}

impl DocumentModel {
    /// Replace a block's text wholesale.
    pub fn replace_block_text(&mut self, key: &str, text: Utf16String) -> bool {
        let next = self.state.with_block_text_replaced(key, text);
        self.commit(next)
    }
}
