use crate::parsing::blocks::types::CalloutVariant;

/// Blockquote block type with owned delimiter constant.
///
/// Handles the `[!TAG]` callout sub-form: the tag on the first quoted line
/// selects one of four visual variants.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Strips the leading `>` prefix, returning the quoted content.
    ///
    /// `None` if the line is not a blockquote.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let t = line.trim_start();
        let rest = t.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }

    /// Recognizes a `[!TAG]` callout opener, returning the variant and the
    /// text after the tag.
    pub fn callout_tag(content: &str) -> Option<(CalloutVariant, &str)> {
        let t = content.trim_start();
        let rest = t.strip_prefix("[!")?;
        let close = rest.find(']')?;
        let variant = match rest[..close].to_ascii_uppercase().as_str() {
            "NOTE" | "INFO" => CalloutVariant::Info,
            "TIP" => CalloutVariant::Tip,
            "WARNING" | "IMPORTANT" | "CAUTION" => CalloutVariant::Warning,
            "SUCCESS" => CalloutVariant::Success,
            _ => return None,
        };
        Some((variant, rest[close + 1..].trim_start()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn strip_quote_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), Some("hello"));
    }

    #[test]
    fn callout_note_maps_to_info() {
        assert_eq!(
            BlockQuote::callout_tag("[!NOTE] remember this"),
            Some((CalloutVariant::Info, "remember this"))
        );
    }

    #[test]
    fn callout_caution_maps_to_warning() {
        assert_eq!(
            BlockQuote::callout_tag("[!caution] hot"),
            Some((CalloutVariant::Warning, "hot"))
        );
    }

    #[test]
    fn unknown_tag_is_not_a_callout() {
        assert_eq!(BlockQuote::callout_tag("[!DANGER] nope"), None);
    }
}
