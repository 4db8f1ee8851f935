//! Remote path normalization and URL encoding.
//!
//! Remote paths are slash-delimited. They are normalized before use as a
//! protocol segment and percent-encoded segment by segment whenever they are
//! embedded in a URL; reserved characters in names must round-trip intact.

/// Normalize a remote path: collapse repeated separators, trim the trailing
/// slash, force a leading slash.
pub fn normalize(path: &str) -> String {
    let mut result = path.to_string();
    while result.contains("//") {
        result = result.replace("//", "/");
    }
    while result.ends_with('/') && result.len() > 1 {
        result.pop();
    }
    if !result.starts_with('/') {
        result.insert(0, '/');
    }
    result
}

/// Percent-encode every segment of a path, preserving the separators.
///
/// The path is normalized first, so the result always starts with `/`.
pub fn encode_path(path: &str) -> String {
    normalize(path)
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-encode a path for endpoints that address folders with a trailing
/// slash. The root stays a single slash instead of doubling.
pub fn encode_dir(path: &str) -> String {
    let encoded = encode_path(path);
    if encoded == "/" {
        encoded
    } else {
        format!("{}/", encoded)
    }
}

/// Percent-encode a single file or folder name.
pub fn encode_segment(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("/foo"), "/foo");
        assert_eq!(normalize("/foo/"), "/foo");
        assert_eq!(normalize("/foo//bar"), "/foo/bar");
        assert_eq!(normalize("foo///bar/"), "/foo/bar");
        assert_eq!(normalize("foo"), "/foo");
    }

    #[test]
    fn test_encode_path_preserves_separators() {
        assert_eq!(encode_path("/plain/path"), "/plain/path");
        assert_eq!(encode_path("demo folder/file#1"), "/demo%20folder/file%231");
        assert_eq!(encode_path("/100%/done"), "/100%25/done");
    }

    #[test]
    fn test_encode_dir_keeps_root_a_single_slash() {
        assert_eq!(encode_dir("/"), "/");
        assert_eq!(encode_dir("///"), "/");
        assert_eq!(encode_dir("/reports"), "/reports/");
        assert_eq!(encode_dir("demo folder"), "/demo%20folder/");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("report.pdf"), "report.pdf");
        assert_eq!(encode_segment("a b#c%d"), "a%20b%23c%25d");
    }

    #[test]
    fn test_reserved_characters_round_trip() {
        for name in ["a b", "x#y", "50%", "päth", "a+b&c=d"] {
            let encoded = encode_segment(name);
            let decoded = urlencoding::decode(&encoded).expect("valid encoding");
            assert_eq!(decoded, name);
        }
    }
}
