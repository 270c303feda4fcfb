//! Update function for the homepage video setting component.
//!
//! Key behaviors
//! - Edits touch only the draft; the backend hears nothing until `Save`.
//! - A non-empty draft with no recognizable YouTube shape is rejected
//!   locally with a validation message and never issues a request.
//! - Only `SaveSucceeded` advances the baseline; a failed save leaves it
//!   untouched so the unsaved-changes state stays accurate.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::toast::show_toast;

use super::helpers::validate_draft;
use super::messages::Msg;
use super::state::HomepageVideoSettings;

pub fn update(
    component: &mut HomepageVideoSettings,
    ctx: &Context<HomepageVideoSettings>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SettingLoaded(value) => {
            component.loading = false;
            component.error = None;
            component.baseline = value.clone();
            component.draft = value;
            true
        }
        Msg::LoadFailed(message) => {
            component.loading = false;
            component.error = Some(message);
            true
        }
        Msg::UpdateDraft(value) => {
            component.draft = value;
            component.validation_error = None;
            true
        }
        Msg::Save => {
            if component.saving {
                return false;
            }
            if let Err(message) = validate_draft(&component.draft) {
                component.validation_error = Some(message);
                return true;
            }
            component.validation_error = None;
            component.saving = true;

            let value = component.draft.clone();
            let session = ctx.props().session.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::save_homepage_video_url(&session, &value).await {
                    Ok(()) => link.send_message(Msg::SaveSucceeded),
                    Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SaveSucceeded => {
            component.saving = false;
            component.baseline = component.draft.clone();
            show_toast("Homepage video saved.");
            true
        }
        Msg::SaveFailed(message) => {
            component.saving = false;
            component.error = Some(message);
            true
        }
        Msg::Revert => {
            component.draft = component.baseline.clone();
            component.validation_error = None;
            true
        }
        Msg::DismissError => {
            component.error = None;
            true
        }
    }
}
