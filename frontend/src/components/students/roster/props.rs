use yew::prelude::*;

use crate::session::AdminSession;

/// Properties for the `StudentRoster` component.
#[derive(Properties, PartialEq, Clone)]
pub struct RosterProps {
    /// Credential and base URL for every backend call this screen issues.
    pub session: AdminSession,
}
