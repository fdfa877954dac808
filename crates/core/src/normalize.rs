//! Title normalization.
//!
//! Canonicalizes free-text titles into a comparable token form: accents are
//! stripped via NFKD decomposition, everything non-alphanumeric becomes a
//! single space, and the result is lowercased and trimmed. Both catalog
//! titles and search queries pass through here, so visually equivalent
//! strings ("Amélie" / "amelie") collapse to the same form.

use unicode_normalization::UnicodeNormalization;

/// Normalizes a title for indexing and search.
///
/// A missing title yields the empty string, not an error. Deterministic,
/// no I/O.
///
/// ```
/// use cinematch_core::normalize::normalize_title;
///
/// assert_eq!(normalize_title(Some("Amélie (1996)")), "amelie 1996");
/// assert_eq!(normalize_title(None), "");
/// ```
pub fn normalize_title(title: Option<&str>) -> String {
    let Some(raw) = title else {
        return String::new();
    };
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    // NFKD splits accented characters into base + combining marks; dropping
    // every non-ASCII scalar afterwards removes the marks and leaves "amelie".
    for c in raw.nfkd() {
        if !c.is_ascii() {
            continue;
        }
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}
