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

//! The selection coordinate bridge.
//!
//! Translates between the model's abstract `(block key, offset)` addressing
//! and a host surface's native node/offset addressing. The host side is a
//! trait so the bridge logic stays testable without a real DOM: the host
//! exposes parent links, block tagging, and the flattened text nodes of a
//! block in document order.
//!
//! Capture walks each endpoint up to the nearest block-tagged ancestor and
//! derives the in-block offset from the cumulative length of the text nodes
//! before the endpoint. Apply does the inverse walk, clamping a past-the-end
//! offset to the end of the block.

use log::trace;

use crate::SelectionState;

/// What the bridge needs from a host rendering surface.
pub trait HostSurface {
    /// The host's node handle (a DOM node id, a widget id, ...).
    type Node: Clone + PartialEq;

    /// The parent of `node`, or `None` at the root.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The block key `node` is tagged with, if `node` is a block boundary.
    fn block_key(&self, node: &Self::Node) -> Option<String>;

    /// The node tagged with `key`, if it exists in the surface.
    fn find_block(&self, key: &str) -> Option<Self::Node>;

    /// All text nodes under `block`, flattened, in document order.
    fn text_children(&self, block: &Self::Node) -> Vec<Self::Node>;

    /// Text length of a text node, UTF-16 code units.
    fn text_len(&self, node: &Self::Node) -> usize;

    /// Position the host cursor/range. Returns whether the host took it.
    fn set_range(
        &mut self,
        start: (Self::Node, usize),
        end: (Self::Node, usize),
    ) -> bool;
}

/// A host-native selection, as delivered by the surface.
#[derive(Clone, Debug)]
pub struct RawSelection<N> {
    pub anchor_node: N,
    pub anchor_offset: usize,
    pub focus_node: N,
    pub focus_offset: usize,
}

/// Map a host-native selection onto the model's coordinates.
///
/// `None` when either endpoint has no block-tagged ancestor: the selection
/// sits outside the document and the caller must ignore it.
pub fn capture_selection<S: HostSurface>(
    surface: &S,
    raw: &RawSelection<S::Node>,
) -> Option<SelectionState> {
    let (start_key, start_offset) =
        resolve_endpoint(surface, &raw.anchor_node, raw.anchor_offset)?;
    let (end_key, end_offset) =
        resolve_endpoint(surface, &raw.focus_node, raw.focus_offset)?;

    Some(SelectionState {
        start_key,
        end_key,
        start_offset,
        end_offset,
        has_focus: true,
    })
}

/// Position the host cursor at an abstract selection.
///
/// `false` when either block key cannot be located in the surface.
pub fn apply_selection<S: HostSurface>(
    surface: &mut S,
    selection: &SelectionState,
) -> bool {
    let Some(start) =
        locate(surface, &selection.start_key, selection.start_offset)
    else {
        trace!(
            "apply selection: block {:?} not in surface",
            selection.start_key
        );
        return false;
    };
    let Some(end) = locate(surface, &selection.end_key, selection.end_offset)
    else {
        trace!(
            "apply selection: block {:?} not in surface",
            selection.end_key
        );
        return false;
    };
    surface.set_range(start, end)
}

/// Walk up from `node` to the nearest block-tagged ancestor (or self).
fn block_ancestor<S: HostSurface>(
    surface: &S,
    node: &S::Node,
) -> Option<(S::Node, String)> {
    let mut current = node.clone();
    loop {
        if let Some(key) = surface.block_key(&current) {
            return Some((current, key));
        }
        current = surface.parent(&current)?;
    }
}

/// Turn one native endpoint into `(block key, in-block offset)`.
fn resolve_endpoint<S: HostSurface>(
    surface: &S,
    node: &S::Node,
    offset: usize,
) -> Option<(String, usize)> {
    let (block, key) = block_ancestor(surface, node)?;
    let children = surface.text_children(&block);

    // Endpoint in a text node: cumulative length of the text nodes before
    // it, plus the in-node offset.
    let mut acc = 0;
    for child in &children {
        if child == node {
            return Some((key, acc + offset));
        }
        acc += surface.text_len(child);
    }

    if *node == block {
        // Element-level endpoint: the native offset counts children, so
        // take the text up to that many text nodes.
        let acc = children
            .iter()
            .take(offset)
            .map(|c| surface.text_len(c))
            .sum();
        return Some((key, acc));
    }

    // Some other descendant (a styled span, say). The best available
    // reading is the native offset as a block offset.
    Some((key, offset))
}

/// Find the text node containing `offset` within the block tagged `key`.
fn locate<S: HostSurface>(
    surface: &S,
    key: &str,
    offset: usize,
) -> Option<(S::Node, usize)> {
    let block = surface.find_block(key)?;
    let children = surface.text_children(&block);
    let Some(last) = children.last() else {
        // Empty block: park the caret on the block node itself.
        return Some((block, 0));
    };

    let mut acc = 0;
    for child in &children {
        let len = surface.text_len(child);
        if acc + len >= offset {
            return Some((child.clone(), offset - acc));
        }
        acc += len;
    }

    // Past the end: clamp to the end of the last text node.
    Some((last.clone(), surface.text_len(last)))
}

#[cfg(test)]
mod tests {
    use crate::SelectionState;

    use super::{
        apply_selection, capture_selection, HostSurface, RawSelection,
    };

    /// A little in-memory stand-in for a DOM: nodes are indices, document
    /// order is index order.
    #[derive(Default)]
    struct MockSurface {
        parents: Vec<Option<usize>>,
        keys: Vec<Option<String>>,
        texts: Vec<Option<String>>,
        pub range: Option<((usize, usize), (usize, usize))>,
    }

    impl MockSurface {
        fn add(
            &mut self,
            parent: Option<usize>,
            key: Option<&str>,
            text: Option<&str>,
        ) -> usize {
            self.parents.push(parent);
            self.keys.push(key.map(str::to_owned));
            self.texts.push(text.map(str::to_owned));
            self.parents.len() - 1
        }

        fn is_descendant(&self, node: usize, ancestor: usize) -> bool {
            let mut current = Some(node);
            while let Some(n) = current {
                if n == ancestor {
                    return true;
                }
                current = self.parents[n];
            }
            false
        }
    }

    impl HostSurface for MockSurface {
        type Node = usize;

        fn parent(&self, node: &usize) -> Option<usize> {
            self.parents[*node]
        }

        fn block_key(&self, node: &usize) -> Option<String> {
            self.keys[*node].clone()
        }

        fn find_block(&self, key: &str) -> Option<usize> {
            self.keys.iter().position(|k| k.as_deref() == Some(key))
        }

        fn text_children(&self, block: &usize) -> Vec<usize> {
            (0..self.parents.len())
                .filter(|&n| {
                    n != *block
                        && self.texts[n].is_some()
                        && self.is_descendant(n, *block)
                })
                .collect()
        }

        fn text_len(&self, node: &usize) -> usize {
            self.texts[*node]
                .as_deref()
                .map(|t| t.encode_utf16().count())
                .unwrap_or(0)
        }

        fn set_range(
            &mut self,
            start: (usize, usize),
            end: (usize, usize),
        ) -> bool {
            self.range = Some((start, end));
            true
        }
    }

    /// root
    /// └─ block "b1"
    ///    ├─ text "Hello "        (node t1)
    ///    └─ span
    ///       └─ text "world"      (node t2)
    /// └─ block "b2"
    ///    └─ text "Second"        (node t3)
    fn surface() -> (MockSurface, [usize; 6]) {
        let mut s = MockSurface::default();
        let root = s.add(None, None, None);
        let b1 = s.add(Some(root), Some("b1"), None);
        let t1 = s.add(Some(b1), None, Some("Hello "));
        let span = s.add(Some(b1), None, None);
        let t2 = s.add(Some(span), None, Some("world"));
        let b2 = s.add(Some(root), Some("b2"), None);
        let t3 = s.add(Some(b2), None, Some("Second"));
        (s, [b1, t1, t2, b2, t3, root])
    }

    // ===================================================================
    // Capture
    // ===================================================================

    #[test]
    fn capture_maps_a_text_node_offset_into_the_block() {
        let (s, [_, t1, ..]) = surface();
        let raw = RawSelection {
            anchor_node: t1,
            anchor_offset: 2,
            focus_node: t1,
            focus_offset: 5,
        };
        let sel = capture_selection(&s, &raw).unwrap();
        assert_eq!(sel.start_key, "b1");
        assert_eq!(sel.start_offset, 2);
        assert_eq!(sel.end_offset, 5);
        assert!(sel.has_focus);
    }

    #[test]
    fn capture_accumulates_preceding_text_nodes() {
        let (s, [_, _, t2, ..]) = surface();
        let raw = RawSelection {
            anchor_node: t2,
            anchor_offset: 3,
            focus_node: t2,
            focus_offset: 3,
        };
        let sel = capture_selection(&s, &raw).unwrap();
        // "Hello " is 6 units, so offset 3 in "world" is 9 in the block.
        assert_eq!(sel.start_offset, 9);
        assert_eq!(sel.start_key, "b1");
    }

    #[test]
    fn capture_spans_blocks() {
        let (s, [_, t1, _, _, t3, _]) = surface();
        let raw = RawSelection {
            anchor_node: t1,
            anchor_offset: 1,
            focus_node: t3,
            focus_offset: 4,
        };
        let sel = capture_selection(&s, &raw).unwrap();
        assert_eq!(sel.start_key, "b1");
        assert_eq!(sel.end_key, "b2");
        assert_eq!(sel.end_offset, 4);
    }

    #[test]
    fn capture_outside_any_block_is_none() {
        let (s, [.., root]) = surface();
        let raw = RawSelection {
            anchor_node: root,
            anchor_offset: 0,
            focus_node: root,
            focus_offset: 0,
        };
        assert!(capture_selection(&s, &raw).is_none());
    }

    #[test]
    fn capture_on_the_block_element_counts_child_text_nodes() {
        let (s, [b1, ..]) = surface();
        let raw = RawSelection {
            anchor_node: b1,
            anchor_offset: 1,
            focus_node: b1,
            focus_offset: 1,
        };
        let sel = capture_selection(&s, &raw).unwrap();
        // One whole text child ("Hello ") precedes the element offset.
        assert_eq!(sel.start_offset, 6);
    }

    // ===================================================================
    // Apply
    // ===================================================================

    #[test]
    fn apply_positions_inside_the_right_text_node() {
        let (mut s, [_, t1, t2, ..]) = surface();
        let ok = apply_selection(&mut s, &SelectionState::range("b1", 2, 9));
        assert!(ok);
        let ((sn, so), (en, eo)) = s.range.unwrap();
        assert_eq!((sn, so), (t1, 2));
        assert_eq!((en, eo), (t2, 3));
    }

    #[test]
    fn apply_clamps_past_the_end_to_the_last_node() {
        let (mut s, [_, _, t2, ..]) = surface();
        let ok =
            apply_selection(&mut s, &SelectionState::collapsed("b1", 999));
        assert!(ok);
        let ((sn, so), _) = s.range.unwrap();
        assert_eq!((sn, so), (t2, 5));
    }

    #[test]
    fn apply_fails_for_unknown_blocks() {
        let (mut s, _) = surface();
        let ok =
            apply_selection(&mut s, &SelectionState::collapsed("ghost", 0));
        assert!(!ok);
        assert!(s.range.is_none());
    }

    #[test]
    fn apply_boundary_prefers_the_earlier_node() {
        // Offset 6 is the boundary between "Hello " and "world"; the walk
        // stops at the first node whose span reaches it.
        let (mut s, [_, t1, ..]) = surface();
        apply_selection(&mut s, &SelectionState::collapsed("b1", 6));
        let ((sn, so), _) = s.range.unwrap();
        assert_eq!((sn, so), (t1, 6));
    }
}
