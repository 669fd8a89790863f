//! Separator conventions and the string algorithms built on them.
//!
//! Parsing is byte-oriented over UTF-8. Separators, the drive colon and the
//! extension dot are all ASCII, so every split lands on a char boundary and
//! multibyte names pass through untouched.

use crate::parsed::ParsedPath;
use std::borrow::Cow;

/// Which characters separate path components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// `/` only.
    Unix,
    /// `/` and `\`, with an optional `X:` drive prefix. Roots render as `\`.
    Windows,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl PathStyle {
    /// The style of the target platform.
    pub const fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Unix
        }
    }

    /// The separator used when a path has to be rebuilt.
    pub const fn separator(self) -> char {
        match self {
            PathStyle::Unix => '/',
            PathStyle::Windows => '\\',
        }
    }

    pub const fn is_separator(self, byte: u8) -> bool {
        match self {
            PathStyle::Unix => byte == b'/',
            PathStyle::Windows => byte == b'/' || byte == b'\\',
        }
    }

    /// Length of a leading drive designator (`C:`), if any.
    fn drive_len(self, path: &str) -> usize {
        match (self, path.as_bytes()) {
            (PathStyle::Windows, [letter, b':', ..]) if letter.is_ascii_alphabetic() => 2,
            _ => 0,
        }
    }

    fn root<'a>(self, drive: &str) -> Cow<'a, str> {
        match (self, drive.is_empty()) {
            (PathStyle::Unix, true) => Cow::Borrowed("/"),
            (PathStyle::Windows, true) => Cow::Borrowed("\\"),
            _ => Cow::Owned(format!("{}{}", drive, self.separator())),
        }
    }

    /// Byte range of the last component, ignoring trailing separators.
    fn base_range(self, path: &str) -> (usize, usize) {
        let bytes = path.as_bytes();
        let floor = self.drive_len(path);
        let mut end = bytes.len();
        while end > floor && self.is_separator(bytes[end - 1]) {
            end -= 1;
        }
        let mut start = end;
        while start > floor && !self.is_separator(bytes[start - 1]) {
            start -= 1;
        }
        (start, end)
    }

    /// Trailing component of `path`, with `suffix` removed when it is a
    /// strict suffix of it.
    ///
    /// ```
    /// use stdplus_path::PathStyle;
    ///
    /// assert_eq!(PathStyle::Unix.basename("/srv/www/index.html", ""), "index.html");
    /// assert_eq!(PathStyle::Unix.basename("/srv/www/", ""), "www");
    /// assert_eq!(PathStyle::Unix.basename("index.html", ".html"), "index");
    /// assert_eq!(PathStyle::Unix.basename(".html", ".html"), ".html");
    /// ```
    pub fn basename<'a>(self, path: &'a str, suffix: &str) -> &'a str {
        let (start, end) = self.base_range(path);
        strip_strict_suffix(&path[start..end], suffix)
    }

    /// Parent directory of `path`, `levels` times over.
    ///
    /// A path without separators yields `"."`; a path of only separators
    /// yields the root. Levels beyond the depth of the path stop at `"."` or
    /// the root. Zero levels returns the path as given.
    ///
    /// ```
    /// use stdplus_path::PathStyle;
    ///
    /// assert_eq!(PathStyle::Unix.dirname("/usr/local/lib", 1), "/usr/local");
    /// assert_eq!(PathStyle::Unix.dirname("/usr/local/lib", 2), "/usr");
    /// assert_eq!(PathStyle::Unix.dirname("/usr/local/lib", 9), "/");
    /// assert_eq!(PathStyle::Unix.dirname("lib", 1), ".");
    /// ```
    pub fn dirname<'a>(self, path: &'a str, levels: usize) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(path);
        for _ in 0..levels {
            let next = match &current {
                Cow::Borrowed(p) => self.dirname_once(p),
                Cow::Owned(p) => Cow::Owned(self.dirname_once(p).into_owned()),
            };
            let shrunk = next.len() < current.len();
            current = next;
            if !shrunk {
                break;
            }
        }
        current
    }

    fn dirname_once<'a>(self, path: &'a str) -> Cow<'a, str> {
        let bytes = path.as_bytes();
        let drive = self.drive_len(path);
        if bytes.len() == drive {
            return if drive == 0 {
                Cow::Borrowed(".")
            } else {
                Cow::Borrowed(path)
            };
        }

        let mut end = bytes.len();
        while end > drive && self.is_separator(bytes[end - 1]) {
            end -= 1;
        }
        if end == drive {
            return self.root(&path[..drive]);
        }

        while end > drive && !self.is_separator(bytes[end - 1]) {
            end -= 1;
        }
        if end == drive {
            return if drive == 0 {
                Cow::Borrowed(".")
            } else {
                Cow::Owned(format!("{}.", &path[..drive]))
            };
        }

        while end > drive && self.is_separator(bytes[end - 1]) {
            end -= 1;
        }
        if end == drive {
            return self.root(&path[..drive]);
        }
        Cow::Borrowed(&path[..end])
    }

    /// Text after the last `.` of the basename. Empty when there is no dot
    /// or nothing follows it. A basename such as `.ext` has extension `ext`.
    pub fn extension<'a>(self, path: &'a str) -> &'a str {
        let base = self.basename(path, "");
        match base.rfind('.') {
            Some(dot) => &base[dot + 1..],
            None => "",
        }
    }

    /// Basename without its extension and separating dot, then without
    /// `suffix` when it is a strict suffix of what remains.
    ///
    /// ```
    /// use stdplus_path::PathStyle;
    ///
    /// assert_eq!(PathStyle::Unix.filename("a/b/name.suf.ext", ""), "name.suf");
    /// assert_eq!(PathStyle::Unix.filename("a/b/name.suf.ext", ".suf"), "name");
    /// assert_eq!(PathStyle::Unix.filename("a/b/.ext", ""), "");
    /// ```
    pub fn filename<'a>(self, path: &'a str, suffix: &str) -> &'a str {
        let base = self.basename(path, "");
        let stem = match base.rfind('.') {
            Some(dot) => &base[..dot],
            None => base,
        };
        strip_strict_suffix(stem, suffix)
    }

    /// Rebuild `path` with its extension swapped for `replacement`, or
    /// dropped when `replacement` is empty. `suffix` is stripped from the
    /// stem as in [`filename`](Self::filename).
    ///
    /// ```
    /// use stdplus_path::PathStyle;
    ///
    /// assert_eq!(PathStyle::Unix.extension_replace("dir/name.ext", "new", ""), "dir/name.new");
    /// assert_eq!(PathStyle::Unix.extension_replace("dir/name.ext", "", ""), "dir/name");
    /// assert_eq!(PathStyle::Unix.extension_replace("name.min.js", "css", ".min"), "name.css");
    /// ```
    pub fn extension_replace(self, path: &str, replacement: &str, suffix: &str) -> String {
        let (start, _) = self.base_range(path);
        let drive = self.drive_len(path);
        let stem = self.filename(path, suffix);

        let mut out = String::with_capacity(path.len() + replacement.len() + 1);
        if start > drive {
            let dir = self.dirname_once(path);
            out.push_str(&dir);
            if !dir.ends_with(|c: char| c.is_ascii() && self.is_separator(c as u8)) {
                out.push(char::from(path.as_bytes()[start - 1]));
            }
        } else {
            out.push_str(&path[..drive]);
        }
        out.push_str(stem);
        if !replacement.is_empty() {
            out.push('.');
            out.push_str(replacement);
        }
        out
    }

    /// Decompose `path` into directory, base, stem and extension.
    pub fn parse<'a>(self, path: &'a str) -> ParsedPath<'a> {
        ParsedPath {
            directory: self.dirname_once(path),
            base: self.basename(path, ""),
            stem: self.filename(path, ""),
            extension: self.extension(path),
        }
    }
}

fn strip_strict_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() || suffix.len() >= name.len() {
        return name;
    }
    name.strip_suffix(suffix).unwrap_or(name)
}
