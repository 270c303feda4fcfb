//! Update function for the student roster component.
//!
//! Elm-style: receives the current `StudentRoster` state, the `Context`,
//! and a `Msg`, mutates the state accordingly, and returns whether the
//! view should re-render.
//!
//! Key behaviors
//! - List loading with an explicit error path that leaves zero rows.
//! - Two-step deletion: a confirmation sheet holds the target until the
//!   administrator confirms or cancels.
//! - A confirmed deletion re-fetches the whole list rather than patching
//!   it locally, then acknowledges with a single toast.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::sheet::{close_sheet, open_sheet};
use crate::toast::show_toast;

use super::helpers::load_students;
use super::messages::Msg;
use super::state::{DeleteTarget, StudentRoster};

pub fn update(component: &mut StudentRoster, ctx: &Context<StudentRoster>, msg: Msg) -> bool {
    match msg {
        Msg::StudentsLoaded(students) => {
            component.loading = false;
            component.error = None;
            component.students = students;
            true
        }
        Msg::LoadFailed(message) => {
            component.loading = false;
            component.students.clear();
            component.error = Some(message);
            true
        }
        Msg::RequestDelete { id, name } => {
            component.delete_target = Some(DeleteTarget { id, name });
            open_sheet(component.confirm_sheet_ref.clone());
            true
        }
        Msg::CancelDelete => {
            component.delete_target = None;
            close_sheet(component.confirm_sheet_ref.clone());
            true
        }
        Msg::ConfirmDelete => {
            // The confirm button is disabled while deleting, but a queued
            // click could still land here; drop it.
            if component.deleting {
                return false;
            }
            let Some(target) = &component.delete_target else {
                return false;
            };
            component.deleting = true;

            let id = target.id;
            let session = ctx.props().session.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_student(&session, id).await {
                    Ok(()) => link.send_message(Msg::DeleteSucceeded),
                    Err(err) => link.send_message(Msg::DeleteFailed(err.to_string())),
                }
            });
            true
        }
        Msg::DeleteSucceeded => {
            component.deleting = false;
            component.delete_target = None;
            close_sheet(component.confirm_sheet_ref.clone());
            show_toast("Student deleted.");

            component.loading = true;
            load_students(ctx.link().clone(), ctx.props().session.clone());
            true
        }
        Msg::DeleteFailed(message) => {
            component.deleting = false;
            component.delete_target = None;
            close_sheet(component.confirm_sheet_ref.clone());
            component.error = Some(message);
            true
        }
        Msg::DismissError => {
            component.error = None;
            true
        }
    }
}
