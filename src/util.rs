//! Content-string utilities shared by the lifecycle controller and hosts

/// Marker span inserted at the caret for the transient position probe
pub const CARET_MARKER: &str = "<span data-caret-probe></span>";

/// Opening tag of internal bookkeeping spans stripped from content copies
const CLEANME_OPEN: &str = "<span data-cleanme>";
const SPAN_CLOSE: &str = "</span>";

/// True if the content is empty for editing purposes: absent, whitespace
/// only, or the lone `<br/>` placeholder some engines leave behind.
pub fn is_empty_content(content: Option<&str>) -> bool {
    match content {
        None => true,
        Some(s) => {
            let trimmed = s.trim();
            trimmed.is_empty() || trimmed == "<br/>"
        }
    }
}

/// Strip internal bookkeeping markup from a content copy: the caret-probe
/// marker and any `<span data-cleanme>…</span>` spans the engine or its
/// plugins left behind.
pub fn strip_internal_markup(content: &str) -> String {
    let mut out = content.replace(CARET_MARKER, "");
    while let Some(start) = out.find(CLEANME_OPEN) {
        let after_open = start + CLEANME_OPEN.len();
        match out[after_open..].find(SPAN_CLOSE) {
            Some(rel_end) => {
                let end = after_open + rel_end + SPAN_CLOSE.len();
                out.replace_range(start..end, "");
            }
            None => {
                // Unterminated span: drop the tag itself and stop
                out.replace_range(start..after_open, "");
                break;
            }
        }
    }
    out
}

/// Insert `marker` into `content` at `offset`, clamping to the nearest
/// character boundary at or below the requested position.
pub fn insert_marker(content: &str, offset: usize, marker: &str) -> String {
    let mut at = offset.min(content.len());
    while at > 0 && !content.is_char_boundary(at) {
        at -= 1;
    }
    let mut out = String::with_capacity(content.len() + marker.len());
    out.push_str(&content[..at]);
    out.push_str(marker);
    out.push_str(&content[at..]);
    out
}
