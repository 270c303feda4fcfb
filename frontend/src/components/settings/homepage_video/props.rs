use yew::prelude::*;

use crate::session::AdminSession;

/// Properties for the `HomepageVideoSettings` component.
#[derive(Properties, PartialEq, Clone)]
pub struct HomepageVideoProps {
    /// Credential and base URL for the settings read and write.
    pub session: AdminSession,
}
