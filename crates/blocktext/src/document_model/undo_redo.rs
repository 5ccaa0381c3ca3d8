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

//! Undo / redo over full-state snapshots.
//!
//! Every edit pushes the pre-edit [`Snapshot`](super::Snapshot) onto the
//! undo stack and clears redo. Undo moves the current snapshot to the redo
//! stack and restores the popped one; redo is the exact mirror, so the two
//! compose to an identity in either order.

use log::trace;

use crate::DocumentState;

use super::DocumentModel;

impl DocumentState {
    pub(crate) fn undone(&self) -> Option<Self> {
        let Some((restored, remaining)) = self.undo_stack.split_last() else {
            trace!("undo: nothing to undo");
            return None;
        };

        let mut redo_stack = self.redo_stack.clone();
        redo_stack.push(self.snapshot());

        Some(Self {
            blocks: restored.blocks.clone(),
            selection: restored.selection.clone(),
            components: restored.components.clone(),
            mentions: restored.mentions.clone(),
            undo_stack: remaining.to_vec(),
            redo_stack,
        })
    }

    pub(crate) fn redone(&self) -> Option<Self> {
        let Some((restored, remaining)) = self.redo_stack.split_last() else {
            trace!("redo: nothing to redo");
            return None;
        };

        let mut undo_stack = self.undo_stack.clone();
        undo_stack.push(self.snapshot());

        Some(Self {
            blocks: restored.blocks.clone(),
            selection: restored.selection.clone(),
            components: restored.components.clone(),
            mentions: restored.mentions.clone(),
            undo_stack,
            redo_stack: remaining.to_vec(),
        })
    }
}

impl DocumentModel {
    /// Undo the most recent edit.
    pub fn undo(&mut self) -> bool {
        let next = self.state.undone();
        self.commit(next)
    }

    /// Redo the most recently undone edit.
    pub fn redo(&mut self) -> bool {
        let next = self.state.redone();
        self.commit(next)
    }
}
