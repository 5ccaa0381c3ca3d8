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

use std::collections::BTreeMap;

use blocktext_mentions::MentionData;
use log::debug;

use crate::{
    Block, BlockList, ComponentData, KeyGenerator, SelectionState,
    Transition,
};

/// The history payload: everything a transition can change, without the
/// history stacks themselves. Undo entries never nest further history.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub blocks: BlockList,
    pub selection: SelectionState,
    pub components: BTreeMap<String, ComponentData>,
    pub mentions: BTreeMap<String, MentionData>,
}

/// The aggregate state of one open document.
///
/// Side-tables are keyed by entity-range keys: `components` backs both
/// COMPONENT and LINK ranges, `mentions` backs MENTION ranges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentState {
    pub blocks: BlockList,
    pub selection: SelectionState,
    pub components: BTreeMap<String, ComponentData>,
    pub mentions: BTreeMap<String, MentionData>,
    /// Prior snapshots, most recent last.
    pub undo_stack: Vec<Snapshot>,
    /// Undone snapshots, most recent last. Cleared by every edit.
    pub redo_stack: Vec<Snapshot>,
}

impl DocumentState {
    /// A state with no blocks and no history.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture the non-history fields as a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            blocks: self.blocks.clone(),
            selection: self.selection.clone(),
            components: self.components.clone(),
            mentions: self.mentions.clone(),
        }
    }

    /// Record the current snapshot on the undo stack and clear redo.
    ///
    /// Called on a freshly cloned successor state *before* its fields are
    /// mutated, so the entry captures the pre-transition document.
    pub(crate) fn push_undo(&mut self) {
        self.undo_stack.push(self.snapshot());
        self.redo_stack.clear();
    }

    /// Index of the block the selection starts in, or `None` when the key
    /// no longer resolves (the enclosing transition then no-ops).
    pub(crate) fn selected_block_index(&self) -> Option<usize> {
        self.blocks.find_index(&self.selection.start_key)
    }

    #[cfg(any(test, feature = "assert-invariants"))]
    pub(crate) fn assert_invariants(&self) {
        for block in &self.blocks {
            if let Err(violation) = block.validate() {
                panic!("document invariant violated: {violation}");
            }
        }
    }
}

/// The state holder a host keeps per open document: the current state plus
/// the session key generator. There is deliberately no ambient global;
/// everything that edits the document goes through one of these.
#[derive(Debug)]
pub struct DocumentModel {
    pub(crate) state: DocumentState,
    pub(crate) keys: KeyGenerator,
}

impl Default for DocumentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentModel {
    /// A new document with a single empty paragraph and a parked cursor.
    pub fn new() -> Self {
        let mut keys = KeyGenerator::new();
        let seed = Block::new(keys.block_key(), "");
        let mut selection = SelectionState::collapsed(&seed.key, 0);
        selection.has_focus = false;

        let mut state = DocumentState::empty();
        state.blocks.push(seed);
        state.selection = selection;

        Self { state, keys }
    }

    /// Wrap a previously loaded state (see [`crate::serialize`]).
    pub fn from_state(state: DocumentState) -> Self {
        Self {
            state,
            keys: KeyGenerator::new(),
        }
    }

    /// The current state, read-only. Render from this; mutate via
    /// [`apply`](Self::apply) or the per-operation methods.
    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    /// Apply one transition. Returns whether the state changed.
    pub fn apply(&mut self, transition: &Transition) -> bool {
        debug!("apply {transition:?}");
        match transition {
            Transition::ToggleInlineStyle(style) => {
                self.toggle_inline_style(*style)
            }
            Transition::ToggleBlockType(block_type) => {
                self.toggle_block_type(*block_type)
            }
            Transition::ReplaceBlockText { key, text } => {
                self.replace_block_text(key, text.clone())
            }
            Transition::SetLink { url } => self.set_link(url),
            Transition::InsertComponent {
                id,
                payload,
                position,
            } => self.insert_component(id, payload.clone(), *position),
            Transition::UpdateComponent { id, payload } => {
                self.update_component(id, payload.clone())
            }
            Transition::InsertMention(data) => self.insert_mention(data),
            Transition::Indent => self.indent(),
            Transition::Unindent => self.unindent(),
            Transition::SetSelection(selection) => {
                self.set_selection(selection.clone())
            }
            Transition::Undo => self.undo(),
            Transition::Redo => self.redo(),
        }
    }

    /// Install a successor state, or keep the current one on `None`.
    pub(crate) fn commit(&mut self, next: Option<DocumentState>) -> bool {
        match next {
            Some(next) => {
                #[cfg(any(test, feature = "assert-invariants"))]
                next.assert_invariants();
                self.state = next;
                true
            }
            None => false,
        }
    }
}
