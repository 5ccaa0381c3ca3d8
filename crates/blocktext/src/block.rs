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

//! Blocks and the ordered, keyed block store.
//!
//! A block's `text` is the single source of truth for offsets: every range
//! it carries must satisfy `offset + length <= text.len()` in UTF-16 code
//! units. Lookups by key return `None` for unknown keys: the selection may
//! reference a block a concurrent host edit already removed, and callers
//! treat that as a no-op, never an error.

use widestring::Utf16String;

use crate::{BlockType, EntityRange, InlineStyleRange};

/// One structural unit of the document.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    /// Stable unique identifier, assigned at creation and never reused.
    pub key: String,
    /// Block text; offsets everywhere are UTF-16 code units into this.
    pub text: Utf16String,
    pub block_type: BlockType,
    /// List nesting level; meaningful only for list items.
    pub depth: usize,
    pub style_ranges: Vec<InlineStyleRange>,
    pub entity_ranges: Vec<EntityRange>,
}

impl Block {
    /// A paragraph block with the given key and text and no ranges.
    pub fn new(key: impl Into<String>, text: &str) -> Self {
        Self {
            key: key.into(),
            text: Utf16String::from_str(text),
            block_type: BlockType::Paragraph,
            depth: 0,
            style_ranges: Vec::new(),
            entity_ranges: Vec::new(),
        }
    }

    pub fn with_type(mut self, block_type: BlockType) -> Self {
        self.block_type = block_type;
        self
    }

    /// Text length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check the range invariant: every style and entity range lies within
    /// the text, and style ranges are non-empty.
    pub fn validate(&self) -> Result<(), String> {
        let len = self.len();
        for r in &self.style_ranges {
            if r.length == 0 {
                return Err(format!(
                    "block {}: empty {} style range at {}",
                    self.key, r.style, r.offset
                ));
            }
            if r.end() > len {
                return Err(format!(
                    "block {}: style range {}..{} exceeds text length {}",
                    self.key,
                    r.offset,
                    r.end(),
                    len
                ));
            }
        }
        for r in &self.entity_ranges {
            if r.end() > len {
                return Err(format!(
                    "block {}: entity range {}..{} exceeds text length {}",
                    self.key,
                    r.offset,
                    r.end(),
                    len
                ));
            }
        }
        Ok(())
    }
}

/// The ordered block sequence; order is document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockList {
    blocks: Vec<Block>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    /// Index of the block with `key`, or `None` when no such block exists.
    pub fn find_index(&self, key: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.key == key)
    }

    /// The block with `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Block> {
        self.find_index(key).map(|i| &self.blocks[i])
    }

    pub fn at(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// A new sequence with the block at `index` replaced; every other block
    /// is carried over unchanged.
    pub fn replace_at(&self, index: usize, block: Block) -> Self {
        let mut blocks = self.blocks.clone();
        blocks[index] = block;
        Self { blocks }
    }
}

impl FromIterator<Block> for BlockList {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
