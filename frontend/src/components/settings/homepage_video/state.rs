//! Component state for the homepage video setting screen.

/// Main state container for the `HomepageVideoSettings` component.
///
/// The screen tracks two copies of the URL: `draft` is whatever sits in the
/// input, `baseline` is the last value confirmed loaded or saved. Their
/// divergence drives the revert control and the unsaved-changes hint.
pub struct HomepageVideoSettings {
    /// Value currently being edited in the input.
    pub draft: String,

    /// Last value confirmed saved or loaded. Only a successful save moves
    /// it forward.
    pub baseline: String,

    /// True until the initial settings read settles.
    pub loading: bool,

    /// True while a PUT is in flight; the save control is disabled so
    /// writes cannot overlap.
    pub saving: bool,

    /// Fetch or save failure, rendered as a dismissible banner.
    pub error: Option<String>,

    /// Local validation failure from the last save attempt. Cleared as
    /// soon as the draft changes again.
    pub validation_error: Option<String>,

    /// Guard so the first-render fetch runs exactly once.
    pub loaded: bool,
}

impl HomepageVideoSettings {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            baseline: String::new(),
            loading: true,
            saving: false,
            error: None,
            validation_error: None,
            loaded: false,
        }
    }

    /// Whether the draft has diverged from the saved baseline.
    pub fn has_changes(&self) -> bool {
        self.draft != self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::HomepageVideoSettings;

    #[test]
    fn a_fresh_screen_has_no_changes() {
        assert!(!HomepageVideoSettings::new().has_changes());
    }

    #[test]
    fn editing_the_draft_marks_changes_until_the_baseline_catches_up() {
        let mut screen = HomepageVideoSettings::new();
        screen.baseline = "https://youtu.be/dQw4w9WgXcQ".to_string();
        screen.draft = screen.baseline.clone();
        assert!(!screen.has_changes());

        screen.draft = "https://youtu.be/aqz-KE-bpKQ".to_string();
        assert!(screen.has_changes());

        // what a successful save does
        screen.baseline = screen.draft.clone();
        assert!(!screen.has_changes());
    }
}
