use marginalia_engine::parsing::blocks::{Block, CalloutVariant, TaskItem};
use marginalia_engine::{NormalizeCache, assign_offsets, normalize, parse, parse_message};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn text(content: &str) -> Block {
    Block::Text {
        content: content.to_string(),
        span: None,
    }
}

#[rstest]
#[case("")]
#[case("   \n\t\n  ")]
fn empty_input_yields_single_empty_text_block(#[case] raw: &str) {
    assert_eq!(parse(raw), vec![text("")]);
}

#[test]
fn fenced_block_keeps_body_and_language() {
    let raw = "```python\n\nprint('hi')\n\n```\n";
    assert_eq!(
        parse(raw),
        vec![Block::Code {
            language: "python".to_string(),
            content: "print('hi')".to_string(),
            span: None
        }]
    );
}

#[test]
fn bare_fence_gets_default_language() {
    let blocks = parse("```\nbody\n```");
    assert_eq!(
        blocks,
        vec![Block::Code {
            language: "text".to_string(),
            content: "body".to_string(),
            span: None
        }]
    );
}

#[test]
fn unterminated_fence_is_emitted_best_effort() {
    let blocks = parse("```rust\nlet x = 1;");
    assert_eq!(
        blocks,
        vec![Block::Code {
            language: "rust".to_string(),
            content: "let x = 1;".to_string(),
            span: None
        }]
    );
}

#[test]
fn table_needs_header_then_separator() {
    let raw = "| name | size |\n| --- | ---: |\n| a | 1 |\n| b | 2 |";
    assert_eq!(
        parse(raw),
        vec![Block::Table {
            headers: vec!["name".to_string(), "size".to_string()],
            rows: vec![
                vec!["a".to_string(), "1".to_string()],
                vec!["b".to_string(), "2".to_string()],
            ],
        }]
    );
}

#[test]
fn pipe_line_without_separator_stays_text() {
    let raw = "either | or\nnothing tabular here";
    assert_eq!(parse(raw), vec![text("either | or\nnothing tabular here")]);
}

#[test]
fn callout_tags_map_onto_four_variants() {
    let raw = "> [!IMPORTANT] read this first\n\n> [!SUCCESS] it worked";
    assert_eq!(
        parse(raw),
        vec![
            Block::Callout {
                variant: CalloutVariant::Warning,
                content: "read this first".to_string()
            },
            Block::Callout {
                variant: CalloutVariant::Success,
                content: "it worked".to_string()
            },
        ]
    );
}

#[test]
fn plain_blockquote_stays_a_blockquote() {
    assert_eq!(
        parse("> just quoting\n> someone"),
        vec![Block::Blockquote {
            content: "just quoting\nsomeone".to_string()
        }]
    );
}

#[test]
fn grouped_item_kinds() {
    let raw = "\
- [x] parse blocks
- [ ] assign offsets

Step 1: fetch
Step 2: decode

1. first
2. second";
    assert_eq!(
        parse(raw),
        vec![
            Block::TaskList {
                items: vec![
                    TaskItem {
                        text: "parse blocks".to_string(),
                        checked: true
                    },
                    TaskItem {
                        text: "assign offsets".to_string(),
                        checked: false
                    },
                ]
            },
            Block::Steps {
                items: vec!["fetch".to_string(), "decode".to_string()]
            },
            Block::List {
                items: vec!["first".to_string(), "second".to_string()],
                ordered: true
            },
        ]
    );
}

#[test]
fn deep_headings_collapse_to_level_three() {
    let blocks = parse("##### Deep title");
    assert_eq!(
        blocks,
        vec![Block::Heading {
            level: 3,
            content: "Deep title".to_string(),
            span: None
        }]
    );
}

#[test]
fn definition_line_splits_term_and_body() {
    assert_eq!(
        parse("**Idempotent**: same result when applied twice"),
        vec![Block::Definition {
            term: "Idempotent".to_string(),
            definition: "same result when applied twice".to_string()
        }]
    );
}

#[test]
fn ask_flow_short_circuits_everything() {
    let raw = "[selected]# Not parsed as a heading[/selected] \"translate to French\"";
    assert_eq!(
        parse(raw),
        vec![Block::AskFlow {
            selected_text: "# Not parsed as a heading".to_string(),
            instruction: "translate to French".to_string(),
        }]
    );
}

#[test]
fn action_markers_strip_from_body_and_trail_the_list() {
    let raw = "Here you go.\n<!--action: copy_code-->";
    let blocks = parse(raw);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0], text("Here you go."));
    assert_eq!(
        blocks[1],
        Block::Action {
            data: serde_json::json!({ "name": "copy_code" })
        }
    );
}

#[test]
fn malformed_action_marker_is_dropped() {
    let blocks = parse("Body text.\n<!--action: {not json-->");
    assert_eq!(blocks, vec![text("Body text.")]);
}

#[test]
fn long_output_gets_structural_dividers() {
    let filler = "word ".repeat(40);
    let raw = format!("{filler}\n\n```rust\nlet x = 1;\n```\n\n{filler}");
    let blocks = parse(&raw);
    let dividers = blocks
        .iter()
        .filter(|b| matches!(b, Block::Divider))
        .count();
    assert_eq!(dividers, 2);
    assert!(!matches!(blocks[0], Block::Divider));
    for pair in blocks.windows(2) {
        assert!(!matches!(pair, [Block::Divider, Block::Divider]));
    }
}

#[test]
fn assigned_offsets_satisfy_the_slice_invariant() {
    let raw = "\
# Summary

The **parser** is line oriented.

```rust
let blocks = parse(raw);
```

A closing thought with a [link](https://example.com).";
    let mut cache = NormalizeCache::default();
    let message = parse_message(raw, &mut cache);

    let mut assigned = 0;
    for block in &message.blocks {
        let Some(span) = block.span() else { continue };
        assigned += 1;
        let slice = &message.rendered[span.start..span.end];
        assert_eq!(
            normalize(slice),
            normalize(block.textual_content().unwrap())
        );
    }
    assert!(assigned >= 3, "expected most textual blocks to be assigned");
}

#[test]
fn offset_misses_do_not_fail_the_call() {
    let blocks = vec![text("not present anywhere")];
    let out = assign_offsets(blocks, "different rendered text");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].span(), None);
}
