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

//! Session-unique key generation for blocks, mentions, and links.
//!
//! Keys combine a random per-session token with a monotonic counter, so two
//! inserts within the same clock tick cannot collide, and keys minted in
//! this session cannot collide with keys loaded from a document saved by an
//! earlier one. The generator lives on the state holder, outside the
//! immutable document state: undo rewinds the document, never the counter.

use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct KeyGenerator {
    session: String,
    next: u64,
}

impl KeyGenerator {
    pub fn new() -> Self {
        let session = Uuid::new_v4().simple().to_string();
        Self {
            session: session[..8].to_owned(),
            next: 0,
        }
    }

    fn mint(&mut self, prefix: &str) -> String {
        self.next += 1;
        format!("{prefix}-{}-{}", self.session, self.next)
    }

    pub fn block_key(&mut self) -> String {
        self.mint("block")
    }

    pub fn mention_key(&mut self) -> String {
        self.mint("mention")
    }

    pub fn link_key(&mut self) -> String {
        self.mint("link")
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::KeyGenerator;

    #[test]
    fn keys_are_unique_within_a_session() {
        let mut keys = KeyGenerator::new();
        let minted: HashSet<String> =
            (0..1000).map(|_| keys.mention_key()).collect();
        assert_eq!(minted.len(), 1000);
    }

    #[test]
    fn prefixes_name_the_owning_table() {
        let mut keys = KeyGenerator::new();
        assert!(keys.block_key().starts_with("block-"));
        assert!(keys.mention_key().starts_with("mention-"));
        assert!(keys.link_key().starts_with("link-"));
    }

    #[test]
    fn two_sessions_mint_disjoint_keys() {
        let mut a = KeyGenerator::new();
        let mut b = KeyGenerator::new();
        assert_ne!(a.mention_key(), b.mention_key());
    }
}
