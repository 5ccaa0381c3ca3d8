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

use blocktext::{
    segment, Block, BlockType, DocumentModel, DocumentState, InlineStyle,
    Segment, SelectionState, Transition,
};
use blocktext_mentions::{MentionData, MentionKind, Roster};
use speculoos::prelude::*;
use speculoos::{assert_that, AssertionFailure, Spec};
use widestring::Utf16String;

fn model_with_text(text: &str) -> (DocumentModel, String) {
    let mut model = DocumentModel::new();
    let key = model.state().blocks.at(0).unwrap().key.clone();
    model.replace_block_text(&key, Utf16String::from_str(text));
    (model, key)
}

// =======================================================================
// Segment coverage assertion
// =======================================================================

trait CoversBlock {
    fn covers(&mut self, block: &Block);
}

impl<'s> CoversBlock for Spec<'s, Vec<Segment>> {
    /// The concatenated segment text must equal the block text exactly:
    /// no gaps, no overlaps, original order.
    fn covers(&mut self, block: &Block) {
        let concatenated: String =
            self.subject.iter().map(|s| s.text.to_string()).collect();
        let expected = block.text.to_string();
        if concatenated != expected {
            AssertionFailure::from_spec(self)
                .with_expected(format!("segments covering {expected:?}"))
                .with_actual(format!("{concatenated:?}"))
                .fail();
        }
        let mut cursor = 0;
        for seg in self.subject.iter() {
            if seg.start != cursor {
                AssertionFailure::from_spec(self)
                    .with_expected(format!("segment starting at {cursor}"))
                    .with_actual(format!("segment starting at {}", seg.start))
                    .fail();
            }
            cursor += seg.text.len();
        }
    }
}

#[test]
fn can_instantiate_a_model_and_call_methods() {
    let (mut model, key) = model_with_text("foo");
    model.set_selection(SelectionState::range(&key, 1, 2));
    assert_that!(model.bold()).is_true();
    assert_that!(model.to_html())
        .is_equal_to("<p>f<strong>o</strong>o</p>".to_owned());
}

// =======================================================================
// The documented scenario, through the transition interface
// =======================================================================

#[test]
fn hello_world_bold_undo_redo_scenario() {
    let (mut model, key) = model_with_text("Hello world");
    model.apply(&Transition::SetSelection(SelectionState::range(&key, 0, 5)));

    let ranges_of = |model: &DocumentModel| {
        model.state().blocks.get(&key).unwrap().style_ranges.clone()
    };

    model.apply(&Transition::ToggleInlineStyle(InlineStyle::Bold));
    let ranges = ranges_of(&model);
    assert_that!(ranges).has_length(1);
    assert_that!(ranges[0].offset).is_equal_to(0);
    assert_that!(ranges[0].length).is_equal_to(5);

    model.apply(&Transition::ToggleInlineStyle(InlineStyle::Bold));
    assert_that!(ranges_of(&model)).has_length(0);

    model.apply(&Transition::Undo);
    assert_that!(ranges_of(&model)).has_length(1);

    model.apply(&Transition::Redo);
    assert_that!(ranges_of(&model)).has_length(0);
}

#[test]
fn undoing_every_transition_restores_the_initial_document() {
    let (mut model, key) = model_with_text("Hello world");
    let initial = model.state().snapshot();

    let alex = MentionData::new("user1", "Alex", MentionKind::User).unwrap();
    let transitions = [
        Transition::SetSelection(SelectionState::range(&key, 0, 5)),
        Transition::ToggleInlineStyle(InlineStyle::Bold),
        Transition::ToggleBlockType(BlockType::HeaderTwo),
        Transition::SetSelection(SelectionState::collapsed(&key, 11)),
        Transition::InsertMention(alex),
        Transition::SetLink {
            url: "example.com".into(),
        },
    ];
    let mut edits = 0;
    for t in &transitions {
        if model.apply(t) && !matches!(t, Transition::SetSelection(_)) {
            edits += 1;
        }
    }
    // The link had a collapsed selection, so it was a silent no-op.
    assert_that!(edits).is_equal_to(3);

    for _ in 0..edits {
        model.apply(&Transition::Undo);
    }
    assert_that!(model.state().blocks).is_equal_to(&initial.blocks);
    assert_that!(model.state().mentions.is_empty()).is_true();
    assert_that!(model.state().components.is_empty()).is_true();
}

// =======================================================================
// No-op safety across the whole transition set
// =======================================================================

#[test]
fn every_selection_bound_transition_ignores_dangling_keys() {
    let (mut model, _key) = model_with_text("text");
    model.set_selection(SelectionState::range("ghost", 0, 3));
    let before = model.state().clone();

    let alex = MentionData::new("user1", "Alex", MentionKind::User).unwrap();
    let attempts = [
        Transition::ToggleInlineStyle(InlineStyle::Bold),
        Transition::ToggleBlockType(BlockType::CodeBlock),
        Transition::InsertMention(alex),
        Transition::InsertComponent {
            id: "c-1".into(),
            payload: blocktext::ComponentPayload::Plain,
            position: None,
        },
        Transition::SetLink {
            url: "https://example.com".into(),
        },
        Transition::Indent,
        Transition::Unindent,
        Transition::ReplaceBlockText {
            key: "ghost".into(),
            text: Utf16String::from_str("boo"),
        },
    ];
    for t in &attempts {
        assert_that!(model.apply(t)).is_false();
        assert_that!(model.state()).is_equal_to(&before);
    }
}

// =======================================================================
// Segmenter coverage over layered documents
// =======================================================================

#[test]
fn segments_cover_blocks_under_heavy_range_layering() {
    let (mut model, key) = model_with_text("The quick brown fox jumps");
    model.set_selection(SelectionState::range(&key, 0, 9));
    model.bold();
    model.set_selection(SelectionState::range(&key, 4, 15));
    model.italic();
    model.set_selection(SelectionState::range(&key, 10, 15));
    model.set_link("example.com");
    model.set_selection(SelectionState::collapsed(&key, 25));
    let sam =
        MentionData::new("user2", "Samantha Lee", MentionKind::User).unwrap();
    model.insert_mention(&sam);

    let state = model.state();
    for block in &state.blocks {
        assert_that!(segment(block)).covers(block);
        assert_that!(state.segments(block)).covers(block);
    }
}

#[test]
fn segments_cover_hand_built_pathological_blocks() {
    use blocktext::{EntityRange, EntityType, InlineStyleRange};

    let mut block = Block::new("a", "abcdefghij");
    block.style_ranges.extend([
        InlineStyleRange::new(InlineStyle::Bold, 0, 7),
        InlineStyleRange::new(InlineStyle::Bold, 3, 7),
        InlineStyleRange::new(InlineStyle::Italic, 2, 3),
        InlineStyleRange::new(InlineStyle::Highlight, 9, 99),
    ]);
    block.entity_ranges.extend([
        EntityRange::new("e1", 1, 4, EntityType::Link),
        EntityRange::new("e2", 3, 4, EntityType::Mention),
    ]);
    assert_that!(segment(&block)).covers(&block);
}

// =======================================================================
// Persistence round trip
// =======================================================================

#[test]
fn a_document_survives_save_and_load() {
    let (mut model, key) = model_with_text("Notes for @");
    model.set_selection(SelectionState::range(&key, 0, 5));
    model.highlight();
    model.set_selection(SelectionState::collapsed(&key, 11));
    let team = MentionData::new("team1", "Engineering", MentionKind::Team)
        .unwrap();
    model.insert_mention(&team);
    model.toggle_block_type(BlockType::Callout);

    let json = model.state().to_json().unwrap();
    let loaded = DocumentState::from_json(&json).unwrap();

    assert_that!(&loaded.blocks).is_equal_to(&model.state().blocks);
    assert_that!(&loaded.mentions).is_equal_to(&model.state().mentions);
    assert_that!(loaded.to_html()).is_equal_to(model.to_html());
}

// =======================================================================
// The mention picker flow, host-side
// =======================================================================

#[test]
fn trigger_roster_and_insert_compose() {
    let roster: Roster = [
        MentionData::new("user1", "Alex Johnson", MentionKind::User).unwrap(),
        MentionData::new("user2", "Samantha Lee", MentionKind::User).unwrap(),
    ]
    .into_iter()
    .collect();

    let (mut model, key) = model_with_text("ping @sam about this");
    model.set_selection(SelectionState::collapsed(&key, 9));

    let trigger = model.state().mention_trigger().unwrap();
    assert_that!(trigger.query).is_equal_to("sam".to_owned());

    let hits = roster.suggest(&trigger.query);
    assert_that!(hits).has_length(1);
    let picked = hits[0].clone();

    // The host removes the trigger run, then inserts at its start. The
    // text is ASCII, so byte offsets and code-unit offsets coincide.
    let block = model.state().blocks.get(&key).unwrap();
    let without_run = {
        let text = block.text.to_string();
        let mut s = String::new();
        s.push_str(&text[..trigger.start]);
        s.push_str(&text[trigger.end..]);
        s
    };
    model.replace_block_text(&key, Utf16String::from_str(&without_run));
    model.set_selection(SelectionState::collapsed(&key, trigger.start));
    model.insert_mention(&picked);

    let final_text = model.state().blocks.get(&key).unwrap().text.to_string();
    assert_that!(final_text)
        .is_equal_to("ping @Samantha Lee about this".to_owned());
    let state = model.state();
    for block in &state.blocks {
        assert_that!(state.segments(block)).covers(block);
    }
}
