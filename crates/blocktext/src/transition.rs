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

//! The closed set of document transitions.
//!
//! A transition is a pure mapping from one document state and one user
//! intent to a new document state. Hosts build these from toolbar, menu,
//! and keyboard events and feed them to
//! [`DocumentModel::apply`](crate::DocumentModel::apply).

use blocktext_mentions::MentionData;
use widestring::Utf16String;

use crate::{
    BlockType, ComponentPayload, ComponentPosition, InlineStyle,
    SelectionState,
};

/// One user intent against the document.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// Toggle an inline style over the current (single-block) selection.
    ToggleInlineStyle(InlineStyle),
    /// Toggle the type of the block holding the selection start; a block
    /// already of that type reverts to a paragraph.
    ToggleBlockType(BlockType),
    /// Replace a block's text wholesale, re-fitting its ranges.
    ReplaceBlockText { key: String, text: Utf16String },
    /// Cover the current selection with a link to `url`.
    SetLink { url: String },
    /// Insert an embedded-component placeholder at the cursor under a
    /// caller-supplied id.
    InsertComponent {
        id: String,
        payload: ComponentPayload,
        position: Option<ComponentPosition>,
    },
    /// Replace an existing component's payload in place.
    UpdateComponent {
        id: String,
        payload: ComponentPayload,
    },
    /// Insert `@name` at the cursor and record the mention payload.
    InsertMention(MentionData),
    /// Nest the current list item one level deeper.
    Indent,
    /// Un-nest the current list item one level.
    Unindent,
    /// Replace the selection; never touches history.
    SetSelection(SelectionState),
    Undo,
    Redo,
}
