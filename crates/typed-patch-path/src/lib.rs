//! Path segments for typed patch documents.
//!
//! A patch path is a `/`-separated string such as `/Norf/0/Foo/1`. Parsing
//! turns it into an ordered list of [`PathSegment`]s: purely numeric
//! components become [`PathSegment::Index`], everything else is a
//! [`PathSegment::Property`].
//!
//! # Example
//!
//! ```
//! use typed_patch_path::{format_path, parse_path, PathSegment};
//!
//! let path = parse_path("/Norf/0/Foo");
//! assert_eq!(
//!     path,
//!     vec![
//!         PathSegment::property("Norf"),
//!         PathSegment::Index(0),
//!         PathSegment::property("Foo"),
//!     ]
//! );
//! assert_eq!(format_path(&path), "/Norf/0/Foo");
//! ```

pub mod types;
pub use types::{Path, PathSegment};

/// Path component separator.
pub const SEPARATOR: char = '/';

/// Check if a path component addresses a sequence position.
///
/// Only plain base-10 digits qualify: no sign, no leading `+`, no fraction.
/// Leading zeros are accepted. A component that overflows `usize` is not an
/// index.
///
/// # Example
///
/// ```
/// use typed_patch_path::is_index;
///
/// assert!(is_index("0"));
/// assert!(is_index("042"));
/// assert!(!is_index("-1"));
/// assert!(!is_index("+1"));
/// assert!(!is_index("1.5"));
/// assert!(!is_index(""));
/// ```
pub fn is_index(component: &str) -> bool {
    parse_index(component).is_some()
}

fn parse_index(component: &str) -> Option<usize> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

/// Classify a single path component.
pub fn parse_segment(component: &str) -> PathSegment {
    match parse_index(component) {
        Some(i) => PathSegment::Index(i),
        None => PathSegment::Property(component.to_owned()),
    }
}

/// Parse a path string into segments.
///
/// Parsing is total. A single leading `/` is optional and stripped; every
/// remaining component, empty ones included, becomes one segment. Components
/// are taken literally (no escape sequences).
///
/// # Example
///
/// ```
/// use typed_patch_path::{parse_path, PathSegment};
///
/// assert_eq!(parse_path("Foo"), parse_path("/Foo"));
/// assert_eq!(parse_path("/"), vec![PathSegment::property("")]);
/// assert_eq!(
///     parse_path("Foo//1"),
///     vec![
///         PathSegment::property("Foo"),
///         PathSegment::property(""),
///         PathSegment::Index(1),
///     ]
/// );
/// ```
pub fn parse_path(path: &str) -> Path {
    let rest = path.strip_prefix(SEPARATOR).unwrap_or(path);
    rest.split(SEPARATOR).map(parse_segment).collect()
}

/// Format segments into their canonical absolute form.
///
/// # Example
///
/// ```
/// use typed_patch_path::{format_path, PathSegment};
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(
///     format_path(&[PathSegment::property("Foo"), PathSegment::Index(2)]),
///     "/Foo/2"
/// );
/// ```
pub fn format_path(path: &[PathSegment]) -> String {
    let mut out = String::with_capacity(path.len() * 8);
    for segment in path {
        out.push(SEPARATOR);
        match segment {
            PathSegment::Property(name) => out.push_str(name),
            PathSegment::Index(i) => out.push_str(&i.to_string()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(name: &str) -> PathSegment {
        PathSegment::property(name)
    }

    #[test]
    fn test_parse_single_property() {
        assert_eq!(parse_path("Foo"), vec![prop("Foo")]);
        assert_eq!(parse_path("/Foo"), vec![prop("Foo")]);
    }

    #[test]
    fn test_parse_mixed() {
        assert_eq!(
            parse_path("/Norf/0/Foo/1"),
            vec![prop("Norf"), PathSegment::Index(0), prop("Foo"), PathSegment::Index(1)]
        );
    }

    #[test]
    fn test_parse_only_one_leading_separator_stripped() {
        assert_eq!(parse_path("//Foo"), vec![prop(""), prop("Foo")]);
    }

    #[test]
    fn test_parse_empty_components() {
        assert_eq!(parse_path(""), vec![prop("")]);
        assert_eq!(parse_path("/"), vec![prop("")]);
        assert_eq!(parse_path("/Foo/"), vec![prop("Foo"), prop("")]);
        assert_eq!(parse_path("Foo///"), vec![prop("Foo"), prop(""), prop(""), prop("")]);
    }

    #[test]
    fn test_parse_keeps_case() {
        assert_eq!(parse_path("/foo"), vec![prop("foo")]);
        assert_ne!(parse_path("/foo"), parse_path("/Foo"));
    }

    #[test]
    fn test_parse_no_escapes() {
        assert_eq!(parse_path("/a~1b"), vec![prop("a~1b")]);
    }

    #[test]
    fn test_signed_and_fractional_are_properties() {
        assert_eq!(parse_path("/-1"), vec![prop("-1")]);
        assert_eq!(parse_path("/+1"), vec![prop("+1")]);
        assert_eq!(parse_path("/1.5"), vec![prop("1.5")]);
        assert_eq!(parse_path("/1e3"), vec![prop("1e3")]);
        assert_eq!(parse_path("/-"), vec![prop("-")]);
    }

    #[test]
    fn test_leading_zero_is_index() {
        assert_eq!(parse_path("/007"), vec![PathSegment::Index(7)]);
    }

    #[test]
    fn test_overflowing_index_is_property() {
        let huge = "99999999999999999999999999999";
        assert_eq!(parse_segment(huge), prop(huge));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_path(&[]), "");
        assert_eq!(format_path(&[prop("")]), "/");
        assert_eq!(
            format_path(&[prop("Foo"), PathSegment::Index(5)]),
            "/Foo/5"
        );
    }
}
