/// Fenced code block type with owned delimiter constant.
///
/// All fence syntax knowledge lives here, not scattered in classifier code.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// Default language when the fence carries no tag.
    pub const DEFAULT_LANGUAGE: &'static str = "text";

    /// Returns the fence's language tag if this line opens or closes a fence.
    ///
    /// `None` means the line is not a fence marker. An empty tag maps to
    /// [`Self::DEFAULT_LANGUAGE`].
    pub fn sig(line: &str) -> Option<String> {
        let t = line.trim();
        let rest = t.strip_prefix(Self::MARKER)?;
        let tag = rest.trim();
        if tag.is_empty() {
            Some(Self::DEFAULT_LANGUAGE.to_string())
        } else {
            Some(tag.to_string())
        }
    }
}
