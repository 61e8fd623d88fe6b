/// Formats a clan, player, or war tag for use in a URL path.
///
/// Tags are accepted with or without the leading `#`; the hash is added when
/// missing and percent-encoded so reqwest does not treat it as a fragment
/// marker. An empty tag is returned unchanged so the server can reject it
/// with a proper 404 instead of this library guessing.
pub fn fmt_tag(tag: &str) -> String {
    if tag.is_empty() {
        return String::new();
    }
    let bare = tag.strip_prefix('#').unwrap_or(tag);
    format!("%23{}", bare)
}
