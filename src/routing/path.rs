//! Lexical import-path normalization.
//!
//! # Responsibilities
//! - Join a request host and URL path into one effective import path
//! - Clean paths lexically (duplicate slashes, `.`/`..` elements, trailing slash)
//!
//! # Design Decisions
//! - Purely lexical: nothing touches the filesystem or the network
//! - Empty elements are skipped when joining, so `join(["", "/x"])` is `/x`
//! - Cleaning an empty path yields `.`; joining only empty elements yields `""`

/// Clean `path` lexically.
///
/// Repeated slashes collapse into one, `.` elements are dropped, `..`
/// removes the preceding element, and a trailing slash is removed unless
/// the path is the root itself.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut out: Vec<&str> = Vec::new();

    for elem in path.split('/') {
        match elem {
            "" | "." => {}
            ".." => match out.last() {
                Some(&last) if last != ".." => {
                    out.pop();
                }
                // `..` at the root is dropped, elsewhere it is kept
                _ if rooted => {}
                _ => out.push(".."),
            },
            _ => out.push(elem),
        }
    }

    let joined = out.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Join path elements with `/` and clean the result.
///
/// Empty elements are ignored. If every element is empty, the result is
/// the empty string.
pub fn join<S: AsRef<str>>(elems: &[S]) -> String {
    let parts: Vec<&str> = elems
        .iter()
        .map(AsRef::as_ref)
        .filter(|e| !e.is_empty())
        .collect();

    if parts.is_empty() {
        return String::new();
    }
    clean(&parts.join("/"))
}

/// The import path a request refers to: its host followed by its URL path.
pub fn effective_path(host: &str, url_path: &str) -> String {
    join(&[host, url_path])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        let cases = [
            ("", "."),
            ("/", "/"),
            ("acln.ro/", "acln.ro"),
            ("acln.ro//foo///bar", "acln.ro/foo/bar"),
            ("acln.ro/./foo", "acln.ro/foo"),
            ("acln.ro/foo/../bar", "acln.ro/bar"),
            ("/../foo", "/foo"),
            ("../foo", "../foo"),
            ("foo/..", "."),
        ];
        for (input, want) in cases {
            assert_eq!(clean(input), want, "clean({input:?})");
        }
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&["acln.ro", "/foo/"]), "acln.ro/foo");
        assert_eq!(join(&["", "/foo"]), "/foo");
        assert_eq!(join::<&str>(&["", ""]), "");
    }

    #[test]
    fn test_effective_path() {
        assert_eq!(effective_path("acln.ro", "/foo/bar"), "acln.ro/foo/bar");
        assert_eq!(effective_path("acln.ro", "/"), "acln.ro");
        assert_eq!(effective_path("acln.ro", ""), "acln.ro");
        assert_eq!(effective_path("", "acln.ro/foo"), "acln.ro/foo");
    }
}
