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

//! Embedded components: insertion and payload updates.
//!
//! A component occupies exactly one placeholder code point in the text;
//! its payload and placement live in the `components` side-table under the
//! caller-supplied id. Payloads are only ever changed through the explicit
//! update operation.

use log::trace;
use widestring::Utf16String;

use crate::entity::{ComponentData, ComponentPayload, ComponentPosition};
use crate::{utf16, DocumentState, EntityRange, EntityType};

use super::DocumentModel;

/// The code point standing in for an embedded component (one UTF-16 unit).
pub const COMPONENT_PLACEHOLDER: char = '\u{29BF}';

impl DocumentState {
    pub(crate) fn with_component_inserted(
        &self,
        id: &str,
        payload: ComponentPayload,
        position: Option<ComponentPosition>,
    ) -> Option<Self> {
        let Some(index) = self.selected_block_index() else {
            trace!(
                "insert component: block {:?} not found, ignoring",
                self.selection.start_key
            );
            return None;
        };
        let block = self.blocks.at(index)?;
        let offset = utf16::clamp_offset(&block.text, self.selection.start_offset);

        let mut placeholder = Utf16String::new();
        placeholder.push(COMPONENT_PLACEHOLDER);

        let mut updated = block.clone();
        updated.text = utf16::splice(&block.text, offset, offset, &placeholder);
        updated
            .entity_ranges
            .push(EntityRange::new(id, offset, 1, EntityType::Component));

        let mut next = self.clone();
        next.push_undo();
        next.blocks = self.blocks.replace_at(index, updated);
        next.components.insert(
            id.to_owned(),
            ComponentData::new(payload, position.unwrap_or_default()),
        );
        next.selection =
            crate::SelectionState::collapsed(&self.selection.start_key, offset + 1);
        Some(next)
    }

    pub(crate) fn with_component_updated(
        &self,
        id: &str,
        payload: ComponentPayload,
    ) -> Option<Self> {
        if !self.components.contains_key(id) {
            trace!("update component: unknown id {id:?}, ignoring");
            return None;
        }

        let mut next = self.clone();
        next.push_undo();
        if let Some(data) = next.components.get_mut(id) {
            data.payload = payload;
        }
        Some(next)
    }
}

impl DocumentModel {
    /// Insert a component placeholder at the cursor.
    pub fn insert_component(
        &mut self,
        id: &str,
        payload: ComponentPayload,
        position: Option<ComponentPosition>,
    ) -> bool {
        let next = self.state.with_component_inserted(id, payload, position);
        self.commit(next)
    }

    /// Replace an existing component's payload, keeping its placement.
    pub fn update_component(
        &mut self,
        id: &str,
        payload: ComponentPayload,
    ) -> bool {
        let next = self.state.with_component_updated(id, payload);
        self.commit(next)
    }
}
