//! Component state for the student roster screen.

use yew::prelude::*;

use common::model::student::StudentAccount;

/// The student whose deletion is awaiting confirmation. Exists only between
/// "delete clicked" and "confirmed or cancelled"; the name is carried so
/// the prompt can spell out who is about to disappear.
pub struct DeleteTarget {
    pub id: i64,
    pub name: String,
}

/// Main state container for the `StudentRoster` component.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct StudentRoster {
    /// The last fetched list. Cleared when a fetch fails so a stale roster
    /// is never shown under an error banner.
    pub students: Vec<StudentAccount>,

    /// True from activation (or a post-delete reload) until the list
    /// request settles.
    pub loading: bool,

    /// Human-readable text of the last fetch or delete failure, rendered
    /// as a dismissible banner.
    pub error: Option<String>,

    /// Deletion awaiting confirmation, if any. Owned exclusively by this
    /// view.
    pub delete_target: Option<DeleteTarget>,

    /// True while a DELETE request is in flight; the confirm button is
    /// disabled so a second deletion cannot overlap the first.
    pub deleting: bool,

    /// Guard so the first-render fetch runs exactly once.
    pub loaded: bool,

    /// Reference to the confirmation sheet container node.
    pub confirm_sheet_ref: NodeRef,
}

impl StudentRoster {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            loading: true,
            error: None,
            delete_target: None,
            deleting: false,
            loaded: false,
            confirm_sheet_ref: Default::default(),
        }
    }
}
