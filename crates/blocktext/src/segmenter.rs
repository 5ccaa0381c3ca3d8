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

//! Projection of a block into renderable segments.
//!
//! The block text is cut at every range boundary; each segment carries the
//! full set of styles covering it plus at most one entity reference. The
//! concatenation of all segment texts is exactly the block text, with no
//! gaps and no overlaps, whatever the ranges look like: overlapping ranges
//! of different styles combine, and where entities overlap the one starting
//! first wins (insertion order breaks ties). Adjacent segments that ended
//! up identical are merged.

use widestring::Utf16String;

use crate::{utf16, Block, DocumentState, EntityType, InlineStyle};

/// The styles in effect over one segment, one flag per style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleSet {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub highlight: bool,
    pub subscript: bool,
    pub superscript: bool,
}

impl StyleSet {
    pub fn apply(&mut self, style: InlineStyle) {
        match style {
            InlineStyle::Bold => self.bold = true,
            InlineStyle::Italic => self.italic = true,
            InlineStyle::Underline => self.underline = true,
            InlineStyle::Strikethrough => self.strikethrough = true,
            InlineStyle::Code => self.code = true,
            InlineStyle::Highlight => self.highlight = true,
            InlineStyle::Subscript => self.subscript = true,
            InlineStyle::Superscript => self.superscript = true,
        }
    }

    pub fn contains(&self, style: InlineStyle) -> bool {
        match style {
            InlineStyle::Bold => self.bold,
            InlineStyle::Italic => self.italic,
            InlineStyle::Underline => self.underline,
            InlineStyle::Strikethrough => self.strikethrough,
            InlineStyle::Code => self.code,
            InlineStyle::Highlight => self.highlight,
            InlineStyle::Subscript => self.subscript,
            InlineStyle::Superscript => self.superscript,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The entity a segment belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRef {
    pub key: String,
    pub entity_type: EntityType,
}

/// A contiguous run of block text sharing one styling and entity identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Start offset within the block, UTF-16 code units.
    pub start: usize,
    pub text: Utf16String,
    pub styles: StyleSet,
    pub entity: Option<EntityRef>,
}

/// Project `block` into its ordered, non-overlapping segment sequence.
///
/// Ranges reaching past the text are tolerated (clamped); an empty block
/// yields no segments.
pub fn segment(block: &Block) -> Vec<Segment> {
    let len = block.text.len();
    if len == 0 {
        return Vec::new();
    }

    // Cut points: text ends plus every (clamped) range boundary.
    let mut cuts: Vec<usize> = vec![0, len];
    for r in &block.style_ranges {
        cuts.push(r.offset.min(len));
        cuts.push(r.end().min(len));
    }
    for r in &block.entity_ranges {
        cuts.push(r.offset.min(len));
        cuts.push(r.end().min(len));
    }
    cuts.sort_unstable();
    cuts.dedup();

    let mut segments: Vec<Segment> = Vec::with_capacity(cuts.len() - 1);
    for pair in cuts.windows(2) {
        let (start, end) = (pair[0], pair[1]);

        let mut styles = StyleSet::default();
        for r in &block.style_ranges {
            if r.offset <= start && r.end().min(len) >= end {
                styles.apply(r.style);
            }
        }

        // Among entities covering this cut, the one starting first wins;
        // insertion order breaks ties.
        let entity = block
            .entity_ranges
            .iter()
            .enumerate()
            .filter(|(_, r)| r.offset <= start && r.end().min(len) >= end)
            .min_by_key(|(index, r)| (r.offset, *index))
            .map(|(_, r)| EntityRef {
                key: r.key.clone(),
                entity_type: r.entity_type,
            });

        segments.push(Segment {
            start,
            text: utf16::slice(&block.text, start, end),
            styles,
            entity,
        });
    }

    merge_adjacent(&mut segments);
    segments
}

/// Merge neighbours whose styling and entity identity are the same.
fn merge_adjacent(segments: &mut Vec<Segment>) {
    let mut i = 0;
    while i + 1 < segments.len() {
        if segments[i].styles == segments[i + 1].styles
            && segments[i].entity == segments[i + 1].entity
        {
            let next = segments.remove(i + 1);
            segments[i].text.push_utfstr(&next.text);
        } else {
            i += 1;
        }
    }
}

impl DocumentState {
    /// Segments of `block` with dangling entity references degraded to
    /// plain (still styled) text. The text itself is never dropped.
    pub fn segments(&self, block: &Block) -> Vec<Segment> {
        let mut segments = segment(block);
        for seg in &mut segments {
            let resolvable = match &seg.entity {
                Some(entity) => match entity.entity_type {
                    EntityType::Mention => {
                        self.mentions.contains_key(&entity.key)
                    }
                    EntityType::Component | EntityType::Link => {
                        self.components.contains_key(&entity.key)
                    }
                },
                None => true,
            };
            if !resolvable {
                seg.entity = None;
            }
        }
        merge_adjacent(&mut segments);
        segments
    }
}
