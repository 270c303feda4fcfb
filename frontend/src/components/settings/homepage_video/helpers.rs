//! URL helpers for the homepage video setting.
//!
//! Identifier extraction is deliberately a pure function: the same code
//! decides whether a save is allowed and whether the preview player is
//! rendered, and it carries the unit tests for both.

use regex::Regex;

/// Extracts a YouTube video identifier from `input`.
///
/// Two shapes are tried in order, first match wins:
/// 1. a watch/short/embed URL — the segment after `youtu.be/`,
///    `youtube.com/watch?v=`, `youtube.com/embed/`, or `youtube.com/v/`,
///    up to the next `&`, `?`, `#`, or newline — accepted when it is an
///    11-character id;
/// 2. a bare 11-character id matching the whole (trimmed) input.
pub fn extract_video_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let url_re =
        Regex::new(r"(?:youtu\.be/|youtube\.com/(?:watch\?v=|embed/|v/))([^#&?\n]*)").unwrap();
    let id_re = Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap();

    if let Some(candidate) = url_re.captures(trimmed).and_then(|caps| caps.get(1)) {
        if id_re.is_match(candidate.as_str()) {
            return Some(candidate.as_str().to_string());
        }
    }

    if id_re.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    None
}

/// Decides whether `draft` may be saved. An empty draft is always allowed
/// (it clears the setting); a non-empty draft must yield an identifier.
pub fn validate_draft(draft: &str) -> Result<(), String> {
    if draft.trim().is_empty() {
        return Ok(());
    }
    match extract_video_id(draft) {
        Some(_) => Ok(()),
        None => Err(
            "Enter a YouTube watch, youtu.be, or embed URL — or a bare video id.".to_string(),
        ),
    }
}

/// Player URL for the preview iframe.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

#[cfg(test)]
mod tests {
    use super::{embed_url, extract_video_id, validate_draft};

    #[test]
    fn extracts_from_a_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_from_a_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_from_an_embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn extracts_a_bare_id() {
        assert_eq!(
            extract_video_id("dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("a-b_c-d_e-f").as_deref(),
            Some("a-b_c-d_e-f")
        );
    }

    #[test]
    fn stops_at_the_next_delimiter() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30s").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=share").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ#start").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn rejects_non_matching_input() {
        assert_eq!(extract_video_id("not a url"), None);
        assert_eq!(extract_video_id("hello"), None);
        assert_eq!(extract_video_id(""), None);
        // right prefix, wrong id length
        assert_eq!(extract_video_id("https://youtu.be/tooshort"), None);
        assert_eq!(extract_video_id("https://youtu.be/abcdefghijkl"), None);
    }

    #[test]
    fn empty_draft_is_always_saveable() {
        assert!(validate_draft("").is_ok());
        assert!(validate_draft("   ").is_ok());
    }

    #[test]
    fn malformed_draft_is_rejected_locally() {
        assert!(validate_draft("hello").is_err());
    }

    #[test]
    fn recognized_draft_is_saveable_and_previewable() {
        let draft = "https://youtu.be/dQw4w9WgXcQ";
        assert!(validate_draft(draft).is_ok());
        let id = extract_video_id(draft).unwrap();
        assert_eq!(id, "dQw4w9WgXcQ");
        assert_eq!(embed_url(&id), "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }
}
