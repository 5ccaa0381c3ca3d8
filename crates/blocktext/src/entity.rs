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

//! Entity ranges and the payloads they reference.
//!
//! An entity range marks a short span of block text as owned by an
//! out-of-band record: a link, an embedded component, or a mention. The
//! range's `key` points into the matching side-table on the document state
//! (components for LINK and COMPONENT, mentions for MENTION).

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// What kind of record an [`EntityRange`] references.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Link,
    Component,
    Mention,
}

/// A half-open run `[offset, offset + length)` bound to one entity record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRange {
    pub key: String,
    pub offset: usize,
    pub length: usize,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
}

impl EntityRange {
    pub fn new(
        key: impl Into<String>,
        offset: usize,
        length: usize,
        entity_type: EntityType,
    ) -> Self {
        Self {
            key: key.into(),
            offset,
            length,
            entity_type,
        }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Re-fit entity ranges after the block text was replaced; ranges pushed
/// out of bounds are truncated, emptied ones dropped. Side-table entries
/// are left alone (an undo can bring the range back).
pub fn clamp_entity_ranges(
    ranges: &[EntityRange],
    len: usize,
) -> Vec<EntityRange> {
    ranges
        .iter()
        .filter(|r| r.offset < len)
        .map(|r| {
            let mut clamped = r.clone();
            clamped.length = r.length.min(len - r.offset);
            clamped
        })
        .collect()
}

/// An anchor position a floating component was placed at, in host
/// coordinates. The model stores it verbatim for the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentPosition {
    pub x: f64,
    pub y: f64,
}

/// The typed payload of a COMPONENT or LINK entity.
///
/// The original dynamic `data` bag is narrowed to the shapes the component
/// catalog actually produces, so render fallbacks stay exhaustive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComponentPayload {
    Image { src: String, alt: String },
    Link { url: String, text: String },
    #[serde(rename = "default")]
    Plain,
}

/// A component record: payload plus placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentData {
    #[serde(flatten)]
    pub payload: ComponentPayload,
    pub position: ComponentPosition,
}

impl ComponentData {
    pub fn new(payload: ComponentPayload, position: ComponentPosition) -> Self {
        Self { payload, position }
    }
}
