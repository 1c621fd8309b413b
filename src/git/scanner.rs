use crate::domain::TagList;

const TAG_MARKER: &str = "tag: ";
const TAG_DELIMITERS: &[char] = &[',', '\n', '\r'];

/// Extract tag names from decorated log text, in text order.
///
/// Each `tag: <name>` runs up to the next `,`, newline or carriage return.
/// A trailing `)` with no matching `(` in the name closes a `%d` style
/// decoration list and is dropped. Empty names are skipped. A name with no
/// delimiter after it means the text was truncated; scanning stops there.
pub fn scan_tags(log: &str) -> TagList {
    let mut tags = Vec::new();
    let mut rest = log;

    while let Some(start) = rest.find(TAG_MARKER) {
        rest = &rest[start + TAG_MARKER.len()..];
        let Some(end) = rest.find(TAG_DELIMITERS) else {
            break;
        };

        let name = trim_decoration_close(&rest[..end]);
        if !name.is_empty() {
            tags.push(name.to_string());
        }
        // delimiters are all single-byte
        rest = &rest[end + 1..];
    }

    TagList::new(tags)
}

fn trim_decoration_close(name: &str) -> &str {
    match name.strip_suffix(')') {
        Some(inner) if name.matches(')').count() > name.matches('(').count() => inner,
        _ => name,
    }
}
