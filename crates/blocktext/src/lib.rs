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

//! Model code to power a block-based rich text editor.
//!
//! The document is an ordered sequence of [`Block`]s, each carrying plain
//! UTF-16 text plus two independent sets of range annotations: inline
//! style ranges ([`InlineStyleRange`]) and entity ranges ([`EntityRange`]
//! pointing at components, mentions, and links in side-tables). A host
//! embeds one [`DocumentModel`] per open document, feeds it
//! [`Transition`]s built from user actions, and renders the resulting
//! [`DocumentState`] by passing each block through the segmenter (or the
//! HTML projection).
//!
//! The host's editable surface stays outside this crate; the
//! [`bridge`] module translates between its native selection addressing
//! and the model's `(block key, offset)` coordinates.
//!
//! ```
//! use blocktext::{DocumentModel, InlineStyle, SelectionState};
//!
//! let mut model = DocumentModel::new();
//! let key = model.state().blocks.at(0).unwrap().key.clone();
//! model.replace_block_text(&key, widestring::Utf16String::from_str("Hello world"));
//! model.set_selection(SelectionState::range(&key, 0, 5));
//! model.toggle_inline_style(InlineStyle::Bold);
//! assert_eq!(model.to_html(), "<p><strong>Hello</strong> world</p>");
//! ```

pub mod action_state;
pub mod block;
pub mod block_type;
pub mod bridge;
pub mod document_model;
pub mod entity;
pub mod html;
pub mod inline_style;
pub mod keys;
pub mod segmenter;
pub mod selection;
pub mod serialize;
pub mod stats;
pub mod style_range;
pub mod suggestion;
pub mod transition;
mod utf16;

pub use action_state::{ActionState, EditorAction};
pub use block::{Block, BlockList};
pub use block_type::BlockType;
pub use bridge::{
    apply_selection, capture_selection, HostSurface, RawSelection,
};
pub use document_model::{DocumentModel, DocumentState, Snapshot};
pub use entity::{
    ComponentData, ComponentPayload, ComponentPosition, EntityRange,
    EntityType,
};
pub use inline_style::InlineStyle;
pub use keys::KeyGenerator;
pub use segmenter::{segment, EntityRef, Segment, StyleSet};
pub use selection::SelectionState;
pub use serialize::{DocumentError, RawBlock, RawDocument};
pub use stats::DocumentStats;
pub use style_range::InlineStyleRange;
pub use suggestion::{detect_mention_trigger, MentionTrigger};
pub use transition::Transition;
