//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Python, C#).
    pub const FOUR: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript, JSON, YAML).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Tab indentation (Go).
    pub const GO: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }

    /// Visual width of one level, counting a tab as four columns.
    pub fn width(&self) -> usize {
        match self {
            Self::Tab => 4,
            _ => self.as_str().len(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}
