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

//! HTML rendering of the document.
//!
//! Blocks map to semantic wrappers:
//!
//! | Block type            | HTML                      |
//! |-----------------------|---------------------------|
//! | `paragraph`           | `<p>…</p>`                |
//! | `header-one/two/three`| `<h1>…</h1>` … `<h3>`     |
//! | `ordered-list-item`   | `<ol><li>…</li></ol>`     |
//! | `unordered-list-item` | `<ul><li>…</li></ul>`     |
//! | `blockquote`          | `<blockquote>…`           |
//! | `code-block`          | `<pre><code>…`            |
//! | `callout`             | `<aside>…</aside>`        |
//!
//! Consecutive list items of the same list type share one `<ol>`/`<ul>`.
//! Entity segments resolve through the side-tables; a LINK whose payload
//! cannot be found renders with `href="#"`.

use crate::segmenter::Segment;
use crate::{
    Block, BlockType, ComponentPayload, DocumentModel, DocumentState,
    EntityType,
};

/// The list wrapper currently open while walking blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ListWrapper {
    None,
    Ordered,
    Unordered,
}

fn wrapper_for(block_type: BlockType) -> ListWrapper {
    match block_type {
        BlockType::OrderedListItem => ListWrapper::Ordered,
        BlockType::UnorderedListItem => ListWrapper::Unordered,
        _ => ListWrapper::None,
    }
}

fn open_wrapper(html: &mut String, wrapper: ListWrapper) {
    match wrapper {
        ListWrapper::Ordered => html.push_str("<ol>"),
        ListWrapper::Unordered => html.push_str("<ul>"),
        ListWrapper::None => {}
    }
}

fn close_wrapper(html: &mut String, wrapper: ListWrapper) {
    match wrapper {
        ListWrapper::Ordered => html.push_str("</ol>"),
        ListWrapper::Unordered => html.push_str("</ul>"),
        ListWrapper::None => {}
    }
}

impl DocumentState {
    /// Render the whole document to an HTML string.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let mut wrapper = ListWrapper::None;

        for block in &self.blocks {
            let desired = wrapper_for(block.block_type);
            if desired != wrapper {
                close_wrapper(&mut html, wrapper);
                open_wrapper(&mut html, desired);
                wrapper = desired;
            }
            self.render_block(&mut html, block);
        }

        close_wrapper(&mut html, wrapper);
        html
    }

    fn render_block(&self, html: &mut String, block: &Block) {
        let (open, close) = match block.block_type {
            BlockType::Paragraph => ("<p>", "</p>"),
            BlockType::HeaderOne => ("<h1>", "</h1>"),
            BlockType::HeaderTwo => ("<h2>", "</h2>"),
            BlockType::HeaderThree => ("<h3>", "</h3>"),
            BlockType::UnorderedListItem | BlockType::OrderedListItem => {
                ("<li>", "</li>")
            }
            BlockType::Blockquote => ("<blockquote>", "</blockquote>"),
            BlockType::CodeBlock => ("<pre><code>", "</code></pre>"),
            BlockType::Callout => ("<aside>", "</aside>"),
        };

        html.push_str(open);
        for segment in self.segments(block) {
            self.render_segment(html, &segment);
        }
        html.push_str(close);
    }

    fn render_segment(&self, html: &mut String, segment: &Segment) {
        let (entity_open, entity_close) = match &segment.entity {
            Some(entity) => match entity.entity_type {
                EntityType::Link => {
                    let href = match self.components.get(&entity.key) {
                        Some(data) => match &data.payload {
                            ComponentPayload::Link { url, .. } => url.clone(),
                            _ => "#".to_owned(),
                        },
                        None => "#".to_owned(),
                    };
                    (
                        format!(
                            "<a href=\"{}\">",
                            html_escape::encode_double_quoted_attribute(&href)
                        ),
                        "</a>".to_owned(),
                    )
                }
                EntityType::Component => (
                    format!(
                        "<span data-component-id=\"{}\">",
                        html_escape::encode_double_quoted_attribute(
                            &entity.key
                        )
                    ),
                    "</span>".to_owned(),
                ),
                EntityType::Mention => (
                    format!(
                        "<span data-mention-id=\"{}\">",
                        html_escape::encode_double_quoted_attribute(
                            &entity.key
                        )
                    ),
                    "</span>".to_owned(),
                ),
            },
            None => (String::new(), String::new()),
        };

        let styles = &segment.styles;
        let mut tags: Vec<&'static str> = Vec::new();
        if styles.bold {
            tags.push("strong");
        }
        if styles.italic {
            tags.push("em");
        }
        if styles.underline {
            tags.push("u");
        }
        if styles.strikethrough {
            tags.push("del");
        }
        if styles.code {
            tags.push("code");
        }
        if styles.highlight {
            tags.push("mark");
        }
        if styles.subscript {
            tags.push("sub");
        }
        if styles.superscript {
            tags.push("sup");
        }

        html.push_str(&entity_open);
        for tag in &tags {
            html.push('<');
            html.push_str(tag);
            html.push('>');
        }
        let text = segment.text.to_string();
        html.push_str(&html_escape::encode_text(&text));
        for tag in tags.iter().rev() {
            html.push_str("</");
            html.push_str(tag);
            html.push('>');
        }
        html.push_str(&entity_close);
    }
}

impl DocumentModel {
    /// Render the current state to an HTML string.
    pub fn to_html(&self) -> String {
        self.state.to_html()
    }
}
