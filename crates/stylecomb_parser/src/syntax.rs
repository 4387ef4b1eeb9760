//! Supported stylesheet dialects.

/// The closed set of stylesheet syntaxes stylecomb understands.
///
/// `Scss` and `Less` are treated as superset dialects of `Css`: the grammar
/// accepted for plain CSS is accepted for both, plus nested rulesets and
/// `//` line comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    Css,
    Scss,
    Less,
}

impl Syntax {
    /// Maps a file extension (without the leading dot) to a syntax.
    ///
    /// Matching is case-insensitive. Unknown extensions return `None`,
    /// which the path filter treats as "not a stylesheet".
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("css") {
            Some(Self::Css)
        } else if extension.eq_ignore_ascii_case("scss") {
            Some(Self::Scss)
        } else if extension.eq_ignore_ascii_case("less") {
            Some(Self::Less)
        } else {
            None
        }
    }

    /// Returns true if the dialect recognizes `//` line comments.
    pub(crate) fn line_comments(self) -> bool {
        !matches!(self, Self::Css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("css", Some(Syntax::Css))]
    #[case("CSS", Some(Syntax::Css))]
    #[case("scss", Some(Syntax::Scss))]
    #[case("less", Some(Syntax::Less))]
    #[case("sass", None)]
    #[case("txt", None)]
    #[case("", None)]
    fn extension_mapping(#[case] ext: &str, #[case] expected: Option<Syntax>) {
        assert_eq!(Syntax::from_extension(ext), expected);
    }
}
