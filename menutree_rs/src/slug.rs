//! Label-to-anchor helpers shared by menu resolution and the view layer.

/// Link target for entries that have nowhere real to go.
pub const PLACEHOLDER_HREF: &str = "#";

/// Lower-cases a label and collapses each whitespace run into a single
/// hyphen. This is the contract page anchors are built from, so the exact
/// output matters: `"Modular for  scalability"` -> `"modular-for-scalability"`.
pub fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_gap = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_gap {
                out.push('-');
                in_gap = true;
            }
        } else {
            in_gap = false;
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Composes the link target for a bare-label leaf: `{parent}#{slug(label)}`.
///
/// Parents sitting on the placeholder target have no anchor worth pointing
/// into, so their leaves stay on the placeholder as well.
pub fn anchor_href(parent_href: Option<&str>, label: &str) -> String {
    match parent_href {
        Some(href) if !href.is_empty() && href != PLACEHOLDER_HREF => {
            format!("{href}#{}", slug(label))
        }
        _ => PLACEHOLDER_HREF.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(
            slug("Line Interactive for SMB and Server Rooms"),
            "line-interactive-for-smb-and-server-rooms"
        );
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(slug("Modular  for\tscalability"), "modular-for-scalability");
    }

    #[test]
    fn slug_keeps_single_word_intact() {
        assert_eq!(slug("Downloads"), "downloads");
    }

    #[test]
    fn anchor_composes_against_real_parent() {
        assert_eq!(
            anchor_href(Some("#commercial-ups"), "Modular for scalability"),
            "#commercial-ups#modular-for-scalability"
        );
    }

    #[test]
    fn anchor_falls_back_on_placeholder_parent() {
        assert_eq!(anchor_href(Some("#"), "Aluminum Profiles"), "#");
        assert_eq!(anchor_href(None, "Aluminum Profiles"), "#");
        assert_eq!(anchor_href(Some(""), "Aluminum Profiles"), "#");
    }
}
