//! View rendering for the student roster component.
//!
//! One table row per student with edit/delete actions, plus the three
//! exclusive list states: loading spinner, explicit empty-state message,
//! and a dismissible error banner. A failed fetch shows the banner over
//! zero rows, never together with the empty-state message.

use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::Link;

use common::model::student::StudentAccount;

use crate::router::Route;
use crate::sheet::ConfirmSheet;

use super::helpers::{confirm_prompt, format_registration_date};
use super::messages::Msg;
use super::state::StudentRoster;

/// Main view function: header, banner, then whichever list state applies.
pub fn view(component: &StudentRoster, ctx: &Context<StudentRoster>) -> Html {
    let link = ctx.link();

    html! {
        <div class="admin-page students-page" style="max-width:960px;margin:0 auto;padding:24px 16px;">
            { build_header() }
            { build_error_banner(component, link) }
            {
                if component.loading {
                    build_loading_indicator()
                } else if component.error.is_none() && component.students.is_empty() {
                    build_empty_state()
                } else if !component.students.is_empty() {
                    build_table(component, link)
                } else {
                    html! {}
                }
            }
            { build_confirm_sheet(component, link) }
        </div>
    }
}

fn build_header() -> Html {
    html! {
        <div class="page-header" style="display:flex;justify-content:space-between;align-items:center;margin-bottom:16px;">
            <h1 style="margin:0;">{"Students"}</h1>
            <Link<Route> to={Route::StudentNew} classes="icon-btn">
                <i class="material-icons">{"person_add"}</i>
                <span class="icon-label">{"New student"}</span>
            </Link<Route>>
        </div>
    }
}

fn build_error_banner(component: &StudentRoster, link: &Scope<StudentRoster>) -> Html {
    let Some(message) = &component.error else {
        return html! {};
    };

    html! {
        <div
            class="error-banner"
            style="display:flex;justify-content:space-between;align-items:center;background:#fdecea;color:#b71c1c;border:1px solid #f5c6cb;border-radius:4px;padding:10px 14px;margin-bottom:16px;"
        >
            <span>{ message }</span>
            <button
                title="Dismiss"
                style="background:none;border:none;color:inherit;cursor:pointer;font-size:1rem;"
                onclick={link.callback(|_| Msg::DismissError)}
            >
                { "✕" }
            </button>
        </div>
    }
}

fn build_loading_indicator() -> Html {
    html! {
        <div style="display:flex;flex-direction:column;align-items:center;padding:48px 0;">
            <div class="spin" style="width:48px;height:48px;border:6px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;"></div>
            <div style="margin-top:12px;color:#555;">{"Loading students..."}</div>
            <style>{r#"
                @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
            "#}</style>
        </div>
    }
}

fn build_empty_state() -> Html {
    html! {
        <div class="empty-state" style="text-align:center;padding:48px 0;color:#555;">
            <p style="margin:0 0 8px 0;font-size:1.1rem;">{"No students yet."}</p>
            <p style="margin:0;">{"Create the first account with \"New student\"."}</p>
        </div>
    }
}

fn build_table(component: &StudentRoster, link: &Scope<StudentRoster>) -> Html {
    html! {
        <table class="roster-table" style="width:100%;border-collapse:collapse;">
            <thead>
                <tr style="text-align:left;border-bottom:2px solid #ddd;">
                    <th style="padding:8px;">{"Name"}</th>
                    <th style="padding:8px;">{"Email"}</th>
                    <th style="padding:8px;">{"Code"}</th>
                    <th style="padding:8px;text-align:right;">{"Mastered cards"}</th>
                    <th style="padding:8px;">{"Registered"}</th>
                    <th style="padding:8px;"></th>
                </tr>
            </thead>
            <tbody>
                { for component.students.iter().map(|student| build_row(student, link)) }
            </tbody>
        </table>
    }
}

fn build_row(student: &StudentAccount, link: &Scope<StudentRoster>) -> Html {
    let id = student.id;
    let name = student.name.clone();

    html! {
        <tr key={student.id.to_string()} style="border-bottom:1px solid #eee;">
            <td style="padding:8px;">{ &student.name }</td>
            <td style="padding:8px;">{ &student.email }</td>
            <td style="padding:8px;"><code>{ &student.student_code }</code></td>
            <td style="padding:8px;text-align:right;">{ student.mastered_cards }</td>
            <td style="padding:8px;">{ format_registration_date(&student.created_at) }</td>
            <td class="row-actions" style="padding:8px;white-space:nowrap;">
                <Link<Route> to={Route::StudentEdit { id }} classes="icon-btn">
                    <i class="material-icons">{"edit"}</i>
                </Link<Route>>
                <button
                    class="icon-btn"
                    title="Delete student"
                    onclick={link.callback(move |_| Msg::RequestDelete { id, name: name.clone() })}
                >
                    <i class="material-icons">{"delete"}</i>
                </button>
            </td>
        </tr>
    }
}

fn build_confirm_sheet(component: &StudentRoster, link: &Scope<StudentRoster>) -> Html {
    html! {
        <ConfirmSheet node_ref={component.confirm_sheet_ref.clone()}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;align-items:center;justify-content:center;">
                <div style="background:#fff;border-radius:8px;padding:24px;max-width:420px;width:90%;box-shadow:0 4px 24px rgba(0,0,0,0.3);">
                    {
                        if let Some(target) = &component.delete_target {
                            html! {
                                <>
                                    <h2 style="margin-top:0;">{"Delete student"}</h2>
                                    <p>{ confirm_prompt(&target.name) }</p>
                                    <div style="display:flex;justify-content:flex-end;gap:8px;">
                                        <button
                                            style="padding:0.5rem 1rem;background:#eee;border:none;border-radius:4px;cursor:pointer;"
                                            disabled={component.deleting}
                                            onclick={link.callback(|_| Msg::CancelDelete)}
                                        >
                                            { "Cancel" }
                                        </button>
                                        <button
                                            style="padding:0.5rem 1rem;background:#d32f2f;color:#fff;border:none;border-radius:4px;cursor:pointer;"
                                            disabled={component.deleting}
                                            onclick={link.callback(|_| Msg::ConfirmDelete)}
                                        >
                                            { if component.deleting { "Deleting..." } else { "Delete" } }
                                        </button>
                                    </div>
                                </>
                            }
                        } else {
                            html! { <span>{"No student selected"}</span> }
                        }
                    }
                </div>
            </div>
        </ConfirmSheet>
    }
}
