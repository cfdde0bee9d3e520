//! Out-of-band constructs extracted before line-splitting: the ask-flow
//! wrapper and action markers. Both are independent of block structure.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Value, json};

use crate::parsing::blocks::Block;

/// Whole-input ask-flow template: selected text between `[selected]` tags
/// followed by a double-quoted instruction.
static ASK_FLOW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)^\s*\[selected\]\s*(.*?)\s*\[/selected\]\s*"(.*?)"\s*$"#)
        .expect("ask-flow pattern")
});

/// Inline action marker, `<!--action: … -->`. The payload is either a bare
/// name or an embedded JSON object.
static ACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--\s*action:\s*(.*?)\s*-->").expect("action pattern"));

#[derive(Debug, thiserror::Error)]
enum PayloadError {
    #[error("empty action payload")]
    Empty,
    #[error("malformed action payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// If the whole input matches the ask-flow template, short-circuit the parse
/// into a single `ask_flow` block.
pub fn try_ask_flow(raw: &str) -> Option<Block> {
    let caps = ASK_FLOW_RE.captures(raw)?;
    Some(Block::AskFlow {
        selected_text: caps[1].to_string(),
        instruction: caps[2].to_string(),
    })
}

/// Strips action markers from the body, returning the cleaned body and one
/// `action` block per well-formed marker, in order of appearance.
///
/// Malformed payloads are logged and dropped, never fatal.
pub fn extract_actions(raw: &str) -> (String, Vec<Block>) {
    let mut actions = vec![];
    for caps in ACTION_RE.captures_iter(raw) {
        match parse_payload(&caps[1]) {
            Ok(data) => actions.push(Block::Action { data }),
            Err(err) => {
                tracing::warn!(payload = &caps[1], %err, "dropping malformed action marker");
            }
        }
    }
    let body = ACTION_RE.replace_all(raw, "").into_owned();
    (body, actions)
}

fn parse_payload(payload: &str) -> Result<Value, PayloadError> {
    let t = payload.trim();
    if t.is_empty() {
        return Err(PayloadError::Empty);
    }
    if t.starts_with('{') {
        Ok(serde_json::from_str(t)?)
    } else {
        Ok(json!({ "name": t }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ask_flow_matches_whole_input_only() {
        let raw = "[selected]the second paragraph[/selected] \"make it shorter\"";
        assert_eq!(
            try_ask_flow(raw),
            Some(Block::AskFlow {
                selected_text: "the second paragraph".to_string(),
                instruction: "make it shorter".to_string(),
            })
        );
        assert_eq!(try_ask_flow("prefix [selected]x[/selected] \"y\""), None);
    }

    #[test]
    fn bare_action_name_wraps_into_object() {
        let (body, actions) = extract_actions("before <!--action: regenerate --> after");
        assert_eq!(body, "before  after");
        assert_eq!(
            actions,
            vec![Block::Action {
                data: json!({ "name": "regenerate" })
            }]
        );
    }

    #[test]
    fn structured_payload_parses_as_json() {
        let (_, actions) = extract_actions(r#"<!--action: {"name":"open","file":"a.rs"}-->"#);
        assert_eq!(
            actions,
            vec![Block::Action {
                data: json!({ "name": "open", "file": "a.rs" })
            }]
        );
    }

    #[test]
    fn malformed_payload_is_dropped_not_fatal() {
        let (body, actions) = extract_actions("text <!--action: {broken json--> more");
        assert_eq!(body, "text  more");
        assert!(actions.is_empty());
    }
}
