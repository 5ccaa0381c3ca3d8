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

//! Word and character counts for the host's status bar.

use unicode_segmentation::UnicodeSegmentation;

use crate::DocumentState;

/// Counts over the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Unicode words across all blocks.
    pub words: usize,
    /// Characters in UTF-16 code units, block separators excluded.
    pub characters: usize,
}

impl DocumentState {
    pub fn stats(&self) -> DocumentStats {
        let mut stats = DocumentStats::default();
        for block in &self.blocks {
            stats.characters += block.len();
            let text = block.text.to_string();
            stats.words += text.unicode_words().count();
        }
        stats
    }
}
