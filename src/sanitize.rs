use regex::Regex;
use std::sync::OnceLock;

/// Replace every character which is not allowed in a download file name with "_".
///
/// Unlike a path sanitizer, each disallowed character becomes its own "_", so
/// `"AB#12 34"` turns into `"AB_12_34"`.
pub(crate) fn sanitize_filename_part<S: AsRef<str>>(s: S) -> String {
    INVALID_CHAR_RE
        .get_or_init(|| Regex::new(r#"[^A-Za-z0-9\-_]"#).unwrap())
        .replace_all(s.as_ref(), "_")
        .to_string()
}

static INVALID_CHAR_RE: OnceLock<Regex> = OnceLock::new();
