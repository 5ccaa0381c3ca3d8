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

//! State queries backing toolbar highlighting.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::style_range::find_containing;
use crate::{
    utf16, ActionState, BlockType, DocumentState, EditorAction, InlineStyle,
    StyleSet,
};

use super::DocumentModel;

impl DocumentState {
    /// The styles in full effect across the current selection (at the
    /// cursor position when collapsed). Cross-block or dangling
    /// selections report nothing active.
    pub fn active_styles(&self) -> StyleSet {
        let mut active = StyleSet::default();
        if !self.selection.is_single_block() {
            return active;
        }
        let Some(block) = self.blocks.get(&self.selection.start_key) else {
            return active;
        };
        let start = utf16::clamp_offset(&block.text, self.selection.start_offset);
        let end = utf16::clamp_offset(&block.text, self.selection.end_offset);

        for style in InlineStyle::iter() {
            if find_containing(&block.style_ranges, style, start, end).is_some()
            {
                active.apply(style);
            }
        }
        active
    }

    /// The type of the block holding the selection start, if it resolves.
    pub fn current_block_type(&self) -> Option<BlockType> {
        self.selected_block_index()
            .and_then(|i| self.blocks.at(i))
            .map(|b| b.block_type)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Display states for every toolbar action.
    pub fn action_states(&self) -> HashMap<EditorAction, ActionState> {
        let mut states = HashMap::new();

        let active = self.active_styles();
        for style in InlineStyle::iter() {
            states.insert(
                EditorAction::Style(style),
                if active.contains(style) {
                    ActionState::Reversed
                } else {
                    ActionState::Enabled
                },
            );
        }

        let current = self.current_block_type();
        for block_type in BlockType::iter() {
            states.insert(
                EditorAction::Block(block_type),
                if current == Some(block_type) {
                    ActionState::Reversed
                } else {
                    ActionState::Enabled
                },
            );
        }

        let block = self
            .selected_block_index()
            .and_then(|i| self.blocks.at(i));
        let in_list =
            block.map_or(false, |b| b.block_type.is_list_item());
        states.insert(
            EditorAction::Indent,
            if in_list {
                ActionState::Enabled
            } else {
                ActionState::Disabled
            },
        );
        states.insert(
            EditorAction::Unindent,
            if in_list && block.map_or(false, |b| b.depth > 0) {
                ActionState::Enabled
            } else {
                ActionState::Disabled
            },
        );

        states.insert(
            EditorAction::Undo,
            if self.can_undo() {
                ActionState::Enabled
            } else {
                ActionState::Disabled
            },
        );
        states.insert(
            EditorAction::Redo,
            if self.can_redo() {
                ActionState::Enabled
            } else {
                ActionState::Disabled
            },
        );

        states
    }
}

impl DocumentModel {
    /// Display states for every toolbar action.
    pub fn action_states(&self) -> HashMap<EditorAction, ActionState> {
        self.state.action_states()
    }
}
