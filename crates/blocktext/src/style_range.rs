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

//! Inline style ranges and the toggle algorithm over them.
//!
//! A toggle over `[start, end)` is a removal when one existing range of the
//! same style fully contains the selection (splitting off any uncovered
//! remainders), and an addition otherwise. Additions are normalized by
//! merging every overlapping or adjacent range of the same style, so two
//! ranges of one style never overlap once a toggle completes. Ranges of
//! different styles are free to overlap.

use serde::{Deserialize, Serialize};

use crate::InlineStyle;

/// A half-open run `[offset, offset + length)` of one [`InlineStyle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineStyleRange {
    pub style: InlineStyle,
    pub offset: usize,
    pub length: usize,
}

impl InlineStyleRange {
    pub fn new(style: InlineStyle, offset: usize, length: usize) -> Self {
        Self {
            style,
            offset,
            length,
        }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    fn contains(&self, start: usize, end: usize) -> bool {
        self.offset <= start && self.end() >= end
    }
}

/// Index of a range of `style` that fully contains `[start, end)`.
///
/// The first match in insertion order wins; after normalization at most one
/// range of a given style can contain any interval.
pub fn find_containing(
    ranges: &[InlineStyleRange],
    style: InlineStyle,
    start: usize,
    end: usize,
) -> Option<usize> {
    ranges
        .iter()
        .position(|r| r.style == style && r.contains(start, end))
}

/// Toggle `style` over `[start, end)`.
///
/// Returns the updated range set, or `None` for a degenerate selection
/// (`start >= end`), which callers treat as a no-op.
pub fn toggle_style(
    ranges: &[InlineStyleRange],
    style: InlineStyle,
    start: usize,
    end: usize,
) -> Option<Vec<InlineStyleRange>> {
    if start >= end {
        return None;
    }

    if let Some(index) = find_containing(ranges, style, start, end) {
        let existing = ranges[index];
        let mut updated: Vec<InlineStyleRange> = ranges.to_vec();
        updated.remove(index);

        // Re-emit the uncovered remainders of the removed range.
        if start > existing.offset {
            updated.push(InlineStyleRange::new(
                style,
                existing.offset,
                start - existing.offset,
            ));
        }
        if end < existing.end() {
            updated.push(InlineStyleRange::new(
                style,
                end,
                existing.end() - end,
            ));
        }
        Some(updated)
    } else {
        let mut updated: Vec<InlineStyleRange> = ranges.to_vec();
        updated.push(InlineStyleRange::new(style, start, end - start));
        merge_same_style(&mut updated, style);
        Some(updated)
    }
}

/// Merge every overlapping or adjacent range of `style` into maximal runs.
///
/// Other styles keep their order; the merged runs are appended in ascending
/// offset order.
fn merge_same_style(ranges: &mut Vec<InlineStyleRange>, style: InlineStyle) {
    let mut intervals: Vec<(usize, usize)> = ranges
        .iter()
        .filter(|r| r.style == style)
        .map(|r| (r.offset, r.end()))
        .collect();
    if intervals.len() < 2 {
        return;
    }

    intervals.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals {
        match merged.last_mut() {
            Some((_, last_end)) if start <= *last_end => {
                *last_end = (*last_end).max(end);
            }
            _ => merged.push((start, end)),
        }
    }

    ranges.retain(|r| r.style != style);
    ranges.extend(
        merged
            .into_iter()
            .map(|(start, end)| InlineStyleRange::new(style, start, end - start)),
    );
}

/// Re-fit ranges after the block text shrank or grew to `len` code units:
/// out-of-bounds ranges are truncated, emptied ones dropped.
pub fn clamp_ranges(
    ranges: &[InlineStyleRange],
    len: usize,
) -> Vec<InlineStyleRange> {
    ranges
        .iter()
        .filter(|r| r.offset < len)
        .map(|r| InlineStyleRange::new(
            r.style,
            r.offset,
            r.length.min(len - r.offset),
        ))
        .collect()
}
