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

//! The fixed set of structural block kinds.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The structural kind of a [`Block`].
///
/// Wire names are kebab-case (`paragraph`, `header-one`, ...), matching the
/// persistence format and host commands.
///
/// [`Block`]: crate::Block
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    #[default]
    Paragraph,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    UnorderedListItem,
    OrderedListItem,
    Blockquote,
    CodeBlock,
    Callout,
}

impl BlockType {
    /// Whether this kind participates in list nesting (depth).
    pub fn is_list_item(self) -> bool {
        matches!(
            self,
            BlockType::UnorderedListItem | BlockType::OrderedListItem
        )
    }
}
