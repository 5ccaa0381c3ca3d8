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

//! Block-level operations: type toggling and list indentation.
//!
//! Toggling a type the block already has reverts it to a paragraph rather
//! than to whatever it was before: applying the same toggle twice lands
//! on `paragraph`, not on the prior type. Indent/unindent apply to list
//! items only.

use log::trace;

use crate::{BlockType, DocumentState};

use super::DocumentModel;

impl DocumentState {
    pub(crate) fn with_block_type_toggled(
        &self,
        block_type: BlockType,
    ) -> Option<Self> {
        let Some(index) = self.selected_block_index() else {
            trace!(
                "toggle {block_type}: block {:?} not found, ignoring",
                self.selection.start_key
            );
            return None;
        };
        let block = self.blocks.at(index)?;

        let new_type = if block.block_type == block_type {
            BlockType::Paragraph
        } else {
            block_type
        };

        let mut updated = block.clone();
        updated.block_type = new_type;
        // Leaving a list resets nesting.
        if !new_type.is_list_item() {
            updated.depth = 0;
        }

        let mut next = self.clone();
        next.push_undo();
        next.blocks = self.blocks.replace_at(index, updated);
        Some(next)
    }

    fn with_depth_changed(&self, delta: isize) -> Option<Self> {
        let index = self.selected_block_index()?;
        let block = self.blocks.at(index)?;
        if !block.block_type.is_list_item() {
            trace!("indent: block {:?} is not a list item", block.key);
            return None;
        }
        let depth = block.depth as isize + delta;
        if depth < 0 {
            trace!("unindent: block {:?} already at top level", block.key);
            return None;
        }

        let mut updated = block.clone();
        updated.depth = depth as usize;

        let mut next = self.clone();
        next.push_undo();
        next.blocks = self.blocks.replace_at(index, updated);
        Some(next)
    }
}

impl DocumentModel {
    /// Toggle the type of the block holding the selection start.
    pub fn toggle_block_type(&mut self, block_type: BlockType) -> bool {
        let next = self.state.with_block_type_toggled(block_type);
        self.commit(next)
    }

    /// Nest the current list item one level deeper.
    pub fn indent(&mut self) -> bool {
        let next = self.state.with_depth_changed(1);
        self.commit(next)
    }

    /// Un-nest the current list item one level.
    pub fn unindent(&mut self) -> bool {
        let next = self.state.with_depth_changed(-1);
        self.commit(next)
    }
}
