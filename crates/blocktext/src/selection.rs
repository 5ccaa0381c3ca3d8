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

//! The abstract selection: block identity plus in-block UTF-16 offsets.
//!
//! Offsets are only meaningful against the referenced blocks' *current*
//! text; after any text mutation the coordinate bridge re-derives them
//! from the host surface.

use serde::{Deserialize, Serialize};

/// A cursor or range anchored to block keys and in-block offsets,
/// independent of any host rendering surface.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub start_key: String,
    pub end_key: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub has_focus: bool,
}

impl SelectionState {
    /// A collapsed cursor at `offset` inside one block.
    pub fn collapsed(key: impl Into<String>, offset: usize) -> Self {
        let key = key.into();
        Self {
            start_key: key.clone(),
            end_key: key,
            start_offset: offset,
            end_offset: offset,
            has_focus: true,
        }
    }

    /// A range `[start, end)` inside one block.
    pub fn range(
        key: impl Into<String>,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        let key = key.into();
        Self {
            start_key: key.clone(),
            end_key: key,
            start_offset,
            end_offset,
            has_focus: true,
        }
    }

    /// Whether both endpoints sit in the same block.
    pub fn is_single_block(&self) -> bool {
        self.start_key == self.end_key
    }

    /// Whether the selection is a caret rather than a range.
    pub fn is_collapsed(&self) -> bool {
        self.is_single_block() && self.start_offset == self.end_offset
    }
}
