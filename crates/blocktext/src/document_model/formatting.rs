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

//! Inline formatting: toggling character styles over the selection.
//!
//! Styling is single-block: a selection spanning blocks is a no-op, as is
//! a collapsed or inverted one. The interval arithmetic itself lives in
//! [`crate::style_range`].

use log::trace;

use crate::style_range::toggle_style;
use crate::{utf16, DocumentState, InlineStyle};

use super::DocumentModel;

impl DocumentState {
    pub(crate) fn with_inline_style_toggled(
        &self,
        style: InlineStyle,
    ) -> Option<Self> {
        if !self.selection.is_single_block() {
            trace!("toggle {style}: cross-block selection, ignoring");
            return None;
        }
        let Some(index) = self.selected_block_index() else {
            trace!(
                "toggle {style}: block {:?} not found, ignoring",
                self.selection.start_key
            );
            return None;
        };

        let block = self.blocks.at(index)?;
        let start = utf16::clamp_offset(&block.text, self.selection.start_offset);
        let end = utf16::clamp_offset(&block.text, self.selection.end_offset);

        let ranges = toggle_style(&block.style_ranges, style, start, end)?;

        let mut updated = block.clone();
        updated.style_ranges = ranges;

        let mut next = self.clone();
        next.push_undo();
        next.blocks = self.blocks.replace_at(index, updated);
        Some(next)
    }
}

impl DocumentModel {
    /// Toggle an inline style over the current selection.
    pub fn toggle_inline_style(&mut self, style: InlineStyle) -> bool {
        let next = self.state.with_inline_style_toggled(style);
        self.commit(next)
    }

    /// Toggle bold.
    pub fn bold(&mut self) -> bool {
        self.toggle_inline_style(InlineStyle::Bold)
    }

    /// Toggle italic.
    pub fn italic(&mut self) -> bool {
        self.toggle_inline_style(InlineStyle::Italic)
    }

    /// Toggle underline.
    pub fn underline(&mut self) -> bool {
        self.toggle_inline_style(InlineStyle::Underline)
    }

    /// Toggle strikethrough.
    pub fn strikethrough(&mut self) -> bool {
        self.toggle_inline_style(InlineStyle::Strikethrough)
    }

    /// Toggle inline code.
    pub fn inline_code(&mut self) -> bool {
        self.toggle_inline_style(InlineStyle::Code)
    }

    /// Toggle highlight.
    pub fn highlight(&mut self) -> bool {
        self.toggle_inline_style(InlineStyle::Highlight)
    }
}
