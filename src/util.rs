// src/util.rs — Shared utility functions

/// Cut `s` to at most `max_len` bytes on a char boundary.
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        &s[..end]
    }
}

/// One-line preview of model output for log fields.
///
/// Newlines are escaped so the preview stays on a single log line, and an
/// ellipsis marks text that was cut.
pub fn log_preview(s: &str, max_len: usize) -> String {
    let cut = truncate_str(s, max_len);
    let mut preview = cut.replace('\r', "").replace('\n', "\\n");
    if cut.len() < s.len() {
        preview.push('…');
    }
    preview
}
