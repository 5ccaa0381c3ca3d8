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

//! UTF-16 offset helpers.
//!
//! All model offsets are UTF-16 code units, matching host text APIs. Host
//! input is untrusted: offsets may run past the end of a block or land on
//! the second half of a surrogate pair, so they are clamped and snapped
//! before any slicing happens.

use widestring::{Utf16Str, Utf16String};

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Clamp `offset` into `text`, stepping off a low-surrogate boundary so the
/// result never splits a surrogate pair.
pub(crate) fn clamp_offset(text: &Utf16Str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while offset > 0
        && offset < text.len()
        && is_low_surrogate(text.as_slice()[offset])
    {
        offset -= 1;
    }
    offset
}

/// Copy out `[start, end)`. Invalid bounds yield an empty string rather
/// than a panic.
pub(crate) fn slice(text: &Utf16Str, start: usize, end: usize) -> Utf16String {
    if start > end {
        return Utf16String::new();
    }
    text.get(start..end)
        .map(ToOwned::to_owned)
        .unwrap_or_default()
}

/// Rebuild `text` with `[start, end)` replaced by `insert`.
pub(crate) fn splice(
    text: &Utf16Str,
    start: usize,
    end: usize,
    insert: &Utf16Str,
) -> Utf16String {
    let mut out = Utf16String::new();
    if let Some(head) = text.get(..start) {
        out.push_utfstr(head);
    }
    out.push_utfstr(insert);
    if let Some(tail) = text.get(end..) {
        out.push_utfstr(tail);
    }
    out
}
