use thiserror::Error;

/// Outcome of validating a candidate annotation against rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Offsets and quoted text agree exactly.
    Valid,
    /// The recorded offsets were wrong but the quoted text was found once.
    Corrected { start: usize, end: usize },
    Invalid(ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty or inverted range {start}..{end}")]
    EmptyRange { start: usize, end: usize },
    #[error("range {start}..{end} out of bounds for rendered length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("rendered text at {start}..{end} does not equal the quoted text")]
    TextMismatch { start: usize, end: usize },
}

/// Confirms that `quoted` sits at `[start, end)` in `rendered`.
///
/// A range past the end of the text gets one correction attempt: a direct
/// search for the quoted text. Anything else that disagrees is reported as
/// an error for the caller to auto-correct or discard.
pub fn validate(rendered: &str, start: usize, end: usize, quoted: &str) -> Validation {
    if start >= end {
        return Validation::Invalid(ValidationError::EmptyRange { start, end });
    }
    if end > rendered.len() {
        if let Some(found) = rendered.find(quoted) {
            return Validation::Corrected {
                start: found,
                end: found + quoted.len(),
            };
        }
        return Validation::Invalid(ValidationError::OutOfBounds {
            start,
            end,
            len: rendered.len(),
        });
    }
    match rendered.get(start..end) {
        Some(slice) if slice == quoted => Validation::Valid,
        Some(_) => Validation::Invalid(ValidationError::TextMismatch { start, end }),
        // Not a char boundary: treat like any other bad range.
        None => Validation::Invalid(ValidationError::OutOfBounds {
            start,
            end,
            len: rendered.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RENDERED: &str = "The quick brown fox jumps over the lazy dog";

    #[test]
    fn exact_match_is_valid() {
        assert_eq!(validate(RENDERED, 4, 9, "quick"), Validation::Valid);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            validate(RENDERED, 9, 4, "quick"),
            Validation::Invalid(ValidationError::EmptyRange { start: 9, end: 4 })
        );
    }

    #[test]
    fn length_exceeded_gets_one_correction_attempt() {
        assert_eq!(
            validate(RENDERED, 100, 105, "quick"),
            Validation::Corrected { start: 4, end: 9 }
        );
    }

    #[test]
    fn length_exceeded_without_occurrence_fails() {
        assert_eq!(
            validate(RENDERED, 100, 105, "zebra"),
            Validation::Invalid(ValidationError::OutOfBounds {
                start: 100,
                end: 105,
                len: RENDERED.len()
            })
        );
    }

    #[test]
    fn wrong_text_is_a_mismatch() {
        assert_eq!(
            validate(RENDERED, 4, 9, "brown"),
            Validation::Invalid(ValidationError::TextMismatch { start: 4, end: 9 })
        );
    }
}
