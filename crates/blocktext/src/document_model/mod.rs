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

//! The aggregate document state and its transitions.
//!
//! This module provides [`DocumentState`] (blocks, selection, entity
//! side-tables, and the undo/redo stacks) and [`DocumentModel`], the
//! explicit state holder hosts keep one of per open document. Every
//! mutating transition yields a wholly new state value; a state that has
//! been observed is never mutated afterwards.

mod base;
mod block_ops;
mod components;
mod formatting;
mod links;
mod mentions;
mod selection;
mod state_query;
mod text_ops;
mod undo_redo;

pub use base::{DocumentModel, DocumentState, Snapshot};
