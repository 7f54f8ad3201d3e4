use serde::{Deserialize, Serialize};

/// Cursor location inside a text field, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl CursorPosition {
    /// Position just after the last character of `content`
    pub fn end_of(content: &str) -> Self {
        if content.ends_with('\n') {
            return Self {
                line: content.lines().count(),
                column: 0,
            };
        }
        Self {
            line: content.lines().count().saturating_sub(1),
            column: content.lines().last().map(|l| l.chars().count()).unwrap_or(0),
        }
    }
}

/// Selected range inside a text field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_end_of() {
        assert_eq!(CursorPosition::end_of(""), CursorPosition { line: 0, column: 0 });
        assert_eq!(CursorPosition::end_of("abc"), CursorPosition { line: 0, column: 3 });
        assert_eq!(CursorPosition::end_of("ab\ncd"), CursorPosition { line: 1, column: 2 });
        assert_eq!(CursorPosition::end_of("ab\n"), CursorPosition { line: 1, column: 0 });
    }
}
