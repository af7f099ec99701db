//! Shaping of child-process output into response bodies.

/// Body sent when a script or the helper fails or prints nothing.
pub const SCRIPT_ERROR: &str = "script error";

const PAIR_MARKERS: [&[u8]; 2] = [b"\": \"", b"\", \""];
const EDGE_MARKERS: [&[u8]; 2] = [b"{\"", b"\"}"];

/// Escape stray double quotes in helper output.
///
/// The helper formats its JSON by hand and does not escape quotes inside
/// values. One left-to-right pass copies the structural markers `": "`,
/// `", "`, `{"` and `"}` verbatim and turns every other `"` into `\"`.
/// This is a heuristic: a value that itself contains one of the markers is
/// copied as if it were structure.
pub fn repair_quotes(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    let mut run_start = 0;
    let mut i = 0;

    // Markers and '"' are ASCII, so every split point is a char boundary.
    while i < bytes.len() {
        let rest = &bytes[i..];
        if let Some(marker) = PAIR_MARKERS.iter().find(|m| rest.starts_with(m)) {
            i += marker.len();
        } else if let Some(marker) = EDGE_MARKERS.iter().find(|m| rest.starts_with(m)) {
            i += marker.len();
        } else if bytes[i] == b'"' {
            out.push_str(&raw[run_start..i]);
            out.push_str("\\\"");
            i += 1;
            run_start = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&raw[run_start..]);
    out
}

/// Wrap comma-separated, individually quoted list items into a JSON array.
pub fn wrap_list(raw: &str) -> String {
    format!("[{raw}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_without_quotes_is_unchanged() {
        let input = "no quotes here, just text: {and} braces";
        assert_eq!(repair_quotes(input), input);
    }

    #[test]
    fn test_well_formed_object_is_unchanged() {
        let input = r#"[{"zone": "Spotify", "artist": "Daft Punk", "album": "Discovery", "track": "One More Time"}]"#;
        assert_eq!(repair_quotes(input), input);
    }

    #[test]
    fn test_internal_quote_is_escaped() {
        let input = r#"{"a": "b"c", "d": "e"}"#;
        let expected = r#"{"a": "b\"c", "d": "e"}"#;
        assert_eq!(repair_quotes(input), expected);
    }

    #[test]
    fn test_repaired_helper_output_parses() {
        let input = r#"[{"zone": "Apple Music", "artist": "The "Band"", "album": "Live", "track": "Intro"},{"zone": "Spotify", "status": "idle"}]"#;
        let repaired = repair_quotes(input);
        let value: serde_json::Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(value[0]["artist"], "The \"Band\"");
        assert_eq!(value[1]["status"], "idle");
    }

    #[test]
    fn test_markers_are_never_split() {
        let input = r#"{"k": "v", "q": "x"y"}"#;
        let out = repair_quotes(input);
        assert!(out.starts_with("{\"k\": \"v\", \"q\": \"x"));
        assert!(out.ends_with("\\\"y\"}"));
    }

    #[test]
    fn test_output_never_shrinks() {
        for input in ["", "\"", "\"\"\"", "{\"", "\"}", "é\"ü", "\": \"\", \""] {
            assert!(repair_quotes(input).len() >= input.len(), "{input:?}");
        }
    }

    #[test]
    fn test_lone_quotes_and_multibyte_text() {
        assert_eq!(repair_quotes("\""), "\\\"");
        assert_eq!(repair_quotes("Beyoncé \"Live\""), "Beyoncé \\\"Live\\\"");
    }

    #[test]
    fn test_marker_at_end_of_input() {
        assert_eq!(repair_quotes("x\"}"), "x\"}");
        assert_eq!(repair_quotes("{\""), "{\"");
    }

    #[test]
    fn test_wrap_list() {
        assert_eq!(
            wrap_list(r#""Artist A","Artist B""#),
            r#"["Artist A","Artist B"]"#
        );
        assert_eq!(wrap_list(""), "[]");
    }
}
