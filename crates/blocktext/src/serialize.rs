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

//! Persistence: the raw JSON document format.
//!
//! Blocks, both range sets, and both side-tables round-trip losslessly.
//! Text crosses the boundary as UTF-8 while range offsets stay UTF-16 code
//! units, exactly as the model counts them. Selection and history are
//! session state and are not persisted: a loaded document starts with a
//! parked caret at its first block and empty undo/redo stacks.
//!
//! Loading validates the range invariant and block-key uniqueness, so a
//! state built from JSON is renderable from the first frame.

use std::collections::{BTreeMap, BTreeSet};

use blocktext_mentions::MentionData;
use serde::{Deserialize, Serialize};
use widestring::Utf16String;

use crate::entity::ComponentData;
use crate::{
    Block, BlockType, DocumentState, EntityRange, InlineStyleRange,
    SelectionState,
};

/// Errors surfaced while loading a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("malformed document json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid document: {0}")]
    InvalidRange(String),
    #[error("duplicate block key {0:?}")]
    DuplicateBlockKey(String),
}

/// The wire form of one block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    pub key: String,
    pub text: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default)]
    pub depth: usize,
    #[serde(default)]
    pub inline_style_ranges: Vec<InlineStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<EntityRange>,
}

/// The wire form of a whole document.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RawDocument {
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub components: BTreeMap<String, ComponentData>,
    #[serde(default)]
    pub mentions: BTreeMap<String, MentionData>,
}

impl From<&Block> for RawBlock {
    fn from(block: &Block) -> Self {
        Self {
            key: block.key.clone(),
            text: block.text.to_string(),
            block_type: block.block_type,
            depth: block.depth,
            inline_style_ranges: block.style_ranges.clone(),
            entity_ranges: block.entity_ranges.clone(),
        }
    }
}

impl RawBlock {
    fn into_block(self) -> Block {
        Block {
            key: self.key,
            text: Utf16String::from_str(&self.text),
            block_type: self.block_type,
            depth: self.depth,
            style_ranges: self.inline_style_ranges,
            entity_ranges: self.entity_ranges,
        }
    }
}

impl DocumentState {
    /// Capture the persistent parts of the state.
    pub fn to_raw(&self) -> RawDocument {
        RawDocument {
            blocks: self.blocks.iter().map(RawBlock::from).collect(),
            components: self.components.clone(),
            mentions: self.mentions.clone(),
        }
    }

    /// Build a state from a raw document, validating as it goes.
    pub fn from_raw(raw: RawDocument) -> Result<Self, DocumentError> {
        let mut seen = BTreeSet::new();
        let mut blocks = crate::BlockList::new();
        for raw_block in raw.blocks {
            if !seen.insert(raw_block.key.clone()) {
                return Err(DocumentError::DuplicateBlockKey(raw_block.key));
            }
            let block = raw_block.into_block();
            block.validate().map_err(DocumentError::InvalidRange)?;
            blocks.push(block);
        }

        let selection = match blocks.at(0) {
            Some(first) => {
                let mut sel = SelectionState::collapsed(&first.key, 0);
                sel.has_focus = false;
                sel
            }
            None => SelectionState::default(),
        };

        Ok(Self {
            blocks,
            selection,
            components: raw.components,
            mentions: raw.mentions,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        })
    }

    /// Serialize the persistent parts of the state to JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(&self.to_raw())?)
    }

    /// Load a state from JSON produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }
}
