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

//! Mention insertion.
//!
//! A mention materializes as literal `@` + display-name text covered by a
//! MENTION entity range. The range key is minted by the session
//! [`KeyGenerator`](crate::KeyGenerator), never from the wall clock, and
//! the payload is recorded in the `mentions` side-table under that key.

use blocktext_mentions::MentionData;
use log::trace;
use widestring::Utf16String;

use crate::{utf16, DocumentState, EntityRange, EntityType, KeyGenerator};

use super::DocumentModel;

impl DocumentState {
    pub(crate) fn with_mention_inserted(
        &self,
        keys: &mut KeyGenerator,
        data: &MentionData,
    ) -> Option<Self> {
        let Some(index) = self.selected_block_index() else {
            trace!(
                "insert mention: block {:?} not found, ignoring",
                self.selection.start_key
            );
            return None;
        };
        let block = self.blocks.at(index)?;
        let offset = utf16::clamp_offset(&block.text, self.selection.start_offset);

        let inserted = Utf16String::from_str(&format!("@{}", data.name));
        let length = inserted.len();
        let key = keys.mention_key();

        let mut updated = block.clone();
        updated.text = utf16::splice(&block.text, offset, offset, &inserted);
        updated.entity_ranges.push(EntityRange::new(
            &key,
            offset,
            length,
            EntityType::Mention,
        ));

        let mut next = self.clone();
        next.push_undo();
        next.blocks = self.blocks.replace_at(index, updated);
        next.mentions.insert(key, data.clone());
        next.selection = crate::SelectionState::collapsed(
            &self.selection.start_key,
            offset + length,
        );
        Some(next)
    }
}

impl DocumentModel {
    /// Insert `@name` at the cursor and record the mention payload.
    pub fn insert_mention(&mut self, data: &MentionData) -> bool {
        let next = self.state.with_mention_inserted(&mut self.keys, data);
        self.commit(next)
    }
}

#[cfg(test)]
mod tests {
    use blocktext_mentions::{MentionData, MentionKind};

    use crate::{DocumentModel, EntityType, SelectionState};

    fn model_with_text(text: &str) -> (DocumentModel, String) {
        let mut model = DocumentModel::new();
        let key = model.state().blocks.at(0).unwrap().key.clone();
        model.replace_block_text(&key, widestring::Utf16String::from_str(text));
        (model, key)
    }

    fn alex() -> MentionData {
        MentionData::new("user1", "Alex Johnson", MentionKind::User).unwrap()
    }

    // ===================================================================
    // Insertion
    // ===================================================================

    #[test]
    fn insert_splices_at_mention_text() {
        let (mut model, key) = model_with_text("Hi  there");
        model.set_selection(SelectionState::collapsed(&key, 3));
        assert!(model.insert_mention(&alex()));
        assert_eq!(
            model.state().blocks.get(&key).unwrap().text.to_string(),
            "Hi @Alex Johnson there"
        );
    }

    #[test]
    fn entity_range_covers_at_and_name() {
        let (mut model, key) = model_with_text("Hi ");
        model.set_selection(SelectionState::collapsed(&key, 3));
        model.insert_mention(&alex());
        let block = model.state().blocks.get(&key).unwrap();
        let range = &block.entity_ranges[0];
        assert_eq!(range.offset, 3);
        assert_eq!(range.length, "Alex Johnson".len() + 1);
        assert_eq!(range.entity_type, EntityType::Mention);
    }

    #[test]
    fn payload_lands_in_the_side_table_under_the_range_key() {
        let (mut model, key) = model_with_text("Hi ");
        model.set_selection(SelectionState::collapsed(&key, 3));
        model.insert_mention(&alex());
        let block = model.state().blocks.get(&key).unwrap();
        let range_key = &block.entity_ranges[0].key;
        assert_eq!(model.state().mentions[range_key], alex());
    }

    #[test]
    fn rapid_inserts_mint_distinct_keys() {
        let (mut model, key) = model_with_text("");
        model.set_selection(SelectionState::collapsed(&key, 0));
        model.insert_mention(&alex());
        model.insert_mention(&alex());
        let block = model.state().blocks.get(&key).unwrap();
        assert_eq!(block.entity_ranges.len(), 2);
        assert_ne!(block.entity_ranges[0].key, block.entity_ranges[1].key);
        assert_eq!(model.state().mentions.len(), 2);
    }

    #[test]
    fn cursor_lands_after_the_mention() {
        let (mut model, key) = model_with_text("");
        model.set_selection(SelectionState::collapsed(&key, 0));
        model.insert_mention(&alex());
        let expected = "@Alex Johnson".len();
        assert_eq!(model.state().selection.start_offset, expected);
        assert!(model.state().selection.is_collapsed());
    }

    #[test]
    fn insert_into_missing_block_is_a_noop() {
        let (mut model, _key) = model_with_text("text");
        model.set_selection(SelectionState::collapsed("ghost", 0));
        let before = model.state().clone();
        assert!(!model.insert_mention(&alex()));
        assert_eq!(model.state(), &before);
    }

    #[test]
    fn undo_removes_text_range_and_payload() {
        let (mut model, key) = model_with_text("Hi ");
        model.set_selection(SelectionState::collapsed(&key, 3));
        model.insert_mention(&alex());
        model.undo();
        let block = model.state().blocks.get(&key).unwrap();
        assert_eq!(block.text.to_string(), "Hi ");
        assert!(block.entity_ranges.is_empty());
        assert!(model.state().mentions.is_empty());
    }
}
