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

//! Selection updates.
//!
//! Setting the selection is a pure replacement: it never touches the
//! history stacks, because moving the cursor is not an edit.

use crate::{DocumentState, SelectionState};

use super::DocumentModel;

impl DocumentState {
    pub(crate) fn with_selection(&self, selection: SelectionState) -> Self {
        let mut next = self.clone();
        next.selection = selection;
        next
    }
}

impl DocumentModel {
    /// Replace the selection.
    pub fn set_selection(&mut self, selection: SelectionState) -> bool {
        if self.state.selection == selection {
            return false;
        }
        let next = self.state.with_selection(selection);
        self.commit(Some(next))
    }
}
