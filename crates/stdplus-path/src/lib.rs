#![doc = include_str!("../README.md")]

mod parsed;
mod style;

pub use parsed::ParsedPath;
pub use style::PathStyle;

use std::borrow::Cow;

/// [`PathStyle::basename`] with the platform style.
///
/// ```
/// assert_eq!(stdplus_path::basename("docs/guide.md", ""), "guide.md");
/// assert_eq!(stdplus_path::basename("docs/guide.md", ".md"), "guide");
/// ```
pub fn basename<'a>(path: &'a str, suffix: &str) -> &'a str {
    PathStyle::native().basename(path, suffix)
}

/// [`PathStyle::dirname`] with the platform style.
///
/// ```
/// assert_eq!(stdplus_path::dirname("sub/name.ext", 1), "sub");
/// assert_eq!(stdplus_path::dirname("name.ext", 1), ".");
/// ```
pub fn dirname(path: &str, levels: usize) -> Cow<'_, str> {
    PathStyle::native().dirname(path, levels)
}

/// [`PathStyle::extension`] with the platform style.
///
/// ```
/// assert_eq!(stdplus_path::extension("/root/dir/sub/name.suf.ext"), "ext");
/// assert_eq!(stdplus_path::extension("/root/dir/sub/.ext"), "ext");
/// assert_eq!(stdplus_path::extension("/root/dir/sub/name"), "");
/// ```
pub fn extension(path: &str) -> &str {
    PathStyle::native().extension(path)
}

/// [`PathStyle::filename`] with the platform style.
///
/// ```
/// assert_eq!(stdplus_path::filename("/root/dir/sub/name.suf.ext", ""), "name.suf");
/// assert_eq!(stdplus_path::filename("/root/dir/sub/.ext", ""), "");
/// ```
pub fn filename<'a>(path: &'a str, suffix: &str) -> &'a str {
    PathStyle::native().filename(path, suffix)
}

/// [`PathStyle::extension_replace`] with the platform style.
///
/// ```
/// assert_eq!(stdplus_path::extension_replace("dir/name.ext", "new", ""), "dir/name.new");
/// assert_eq!(stdplus_path::extension_replace("dir/name.ext", "", ""), "dir/name");
/// ```
pub fn extension_replace(path: &str, replacement: &str, suffix: &str) -> String {
    PathStyle::native().extension_replace(path, replacement, suffix)
}
