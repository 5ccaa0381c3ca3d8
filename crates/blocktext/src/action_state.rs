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

//! Toolbar action identities and their display states.

use crate::{BlockType, InlineStyle};

/// An action a host toolbar or menu can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorAction {
    Style(InlineStyle),
    Block(BlockType),
    Indent,
    Unindent,
    Undo,
    Redo,
}

/// How a host should present an action right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionState {
    /// Available.
    Enabled,
    /// Available and currently in effect (highlight the button).
    Reversed,
    /// Not applicable at the current selection.
    Disabled,
}
