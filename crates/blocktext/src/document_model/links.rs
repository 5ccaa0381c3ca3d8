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

//! Link operations.
//!
//! Setting a link covers the current selection with a LINK entity range
//! whose payload (a `ComponentPayload::Link`) lands in the components
//! side-table. Targets are normalized before anything is stored: bare
//! e-mail addresses become `mailto:`, scheme-less hosts get `https://`,
//! and anything that still fails to parse makes the whole operation a
//! no-op.

use email_address::EmailAddress;
use log::{debug, trace};
use url::Url;

use crate::entity::{ComponentData, ComponentPayload, ComponentPosition};
use crate::{utf16, DocumentState, EntityRange, EntityType, KeyGenerator};

use super::DocumentModel;

/// Normalize a raw link target into something a browser can open.
pub fn normalize_link_target(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.parse::<EmailAddress>().is_ok() {
        return Some(format!("mailto:{raw}"));
    }
    if Url::parse(raw).is_ok() {
        return Some(raw.to_owned());
    }
    let with_scheme = format!("https://{raw}");
    Url::parse(&with_scheme).ok().map(|_| with_scheme)
}

impl DocumentState {
    pub(crate) fn with_link_set(
        &self,
        keys: &mut KeyGenerator,
        url: &str,
    ) -> Option<Self> {
        if !self.selection.is_single_block() {
            trace!("set link: cross-block selection, ignoring");
            return None;
        }
        let index = self.selected_block_index()?;
        let block = self.blocks.at(index)?;

        let start = utf16::clamp_offset(&block.text, self.selection.start_offset);
        let end = utf16::clamp_offset(&block.text, self.selection.end_offset);
        if start >= end {
            trace!("set link: nothing selected, ignoring");
            return None;
        }

        let Some(target) = normalize_link_target(url) else {
            debug!("set link: unusable target {url:?}, ignoring");
            return None;
        };

        let key = keys.link_key();
        let display = utf16::slice(&block.text, start, end).to_string();

        let mut updated = block.clone();
        updated.entity_ranges.push(EntityRange::new(
            &key,
            start,
            end - start,
            EntityType::Link,
        ));

        let mut next = self.clone();
        next.push_undo();
        next.blocks = self.blocks.replace_at(index, updated);
        next.components.insert(
            key,
            ComponentData::new(
                ComponentPayload::Link {
                    url: target,
                    text: display,
                },
                ComponentPosition::default(),
            ),
        );
        Some(next)
    }
}

impl DocumentModel {
    /// Cover the current selection with a link to `url`.
    pub fn set_link(&mut self, url: &str) -> bool {
        let next = self.state.with_link_set(&mut self.keys, url);
        self.commit(next)
    }
}
