use crate::style::PathStyle;
use std::borrow::Cow;

/// A path split into its parts. Computed from the string alone.
///
/// ```
/// use stdplus_path::PathStyle;
///
/// let parsed = PathStyle::Unix.parse("/srv/data/archive.tar.gz");
/// assert_eq!(parsed.directory, "/srv/data");
/// assert_eq!(parsed.base, "archive.tar.gz");
/// assert_eq!(parsed.stem, "archive.tar");
/// assert_eq!(parsed.extension, "gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath<'a> {
    /// Everything before the last separator, `"."` when there is none.
    pub directory: Cow<'a, str>,
    /// Everything after the last separator.
    pub base: &'a str,
    /// `base` without its extension.
    pub stem: &'a str,
    /// Text after the last dot of `base`; may be empty.
    pub extension: &'a str,
}

impl<'a> ParsedPath<'a> {
    /// Parse with the platform's [`PathStyle`].
    pub fn parse(path: &'a str) -> Self {
        PathStyle::native().parse(path)
    }

    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }
}
