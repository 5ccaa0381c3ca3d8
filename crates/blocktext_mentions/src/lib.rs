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

//! Mention records for the blocktext editor model.
//!
//! A [`MentionData`] is the out-of-band payload a MENTION entity range
//! points at: who or what was mentioned, plus display metadata. The
//! [`Roster`] holds the candidates a host offers in its mention picker and
//! filters them against the query the user has typed after `@`.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use url::Url;

/// What kind of thing a mention refers to.
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
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    User,
    Topic,
    Team,
}

/// Errors raised while building a [`MentionData`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MentionError {
    #[error("mention id must not be empty")]
    EmptyId,
    #[error("mention display name must not be empty")]
    EmptyName,
    #[error("invalid avatar url: {0}")]
    InvalidAvatarUrl(#[from] url::ParseError),
}

/// The payload behind a MENTION entity range.
///
/// `id` identifies the mentioned subject in the host's own directory; it is
/// distinct from the entity-range key, which is generated by the model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionData {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MentionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl MentionData {
    /// Build a mention record, rejecting empty identity fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: MentionKind,
    ) -> Result<Self, MentionError> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() {
            return Err(MentionError::EmptyId);
        }
        if name.trim().is_empty() {
            return Err(MentionError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            kind,
            avatar_url: None,
        })
    }

    /// Attach an avatar URL, validating that it parses as an absolute URL.
    pub fn with_avatar_url(
        mut self,
        avatar_url: &str,
    ) -> Result<Self, MentionError> {
        Url::parse(avatar_url)?;
        self.avatar_url = Some(avatar_url.to_owned());
        Ok(self)
    }
}

/// The candidate set a host offers in its mention picker.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    members: Vec<MentionData>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, member: MentionData) {
        self.members.push(member);
    }

    pub fn members(&self) -> &[MentionData] {
        &self.members
    }

    /// Filter candidates whose name contains `query`, case-insensitively.
    ///
    /// An empty query matches everyone (the picker opens on a bare `@`).
    pub fn suggest(&self, query: &str) -> Vec<&MentionData> {
        let needle = query.to_lowercase();
        self.members
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl FromIterator<MentionData> for Roster {
    fn from_iter<I: IntoIterator<Item = MentionData>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
