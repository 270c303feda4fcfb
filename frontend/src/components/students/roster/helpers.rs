//! Utility functions for the student roster component.

use wasm_bindgen::JsValue;
use yew::html::Scope;
use yew::platform::spawn_local;

use crate::api;
use crate::session::AdminSession;

use super::messages::Msg;
use super::state::StudentRoster;

/// Requests the full student list and reports the outcome back to the
/// component. Used for the first-render load and for the reload after a
/// confirmed deletion.
pub fn load_students(link: Scope<StudentRoster>, session: AdminSession) {
    spawn_local(async move {
        match api::fetch_students(&session).await {
            Ok(students) => link.send_message(Msg::StudentsLoaded(students)),
            Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
        }
    });
}

/// Renders the registration timestamp with the browser's own locale-aware
/// day/month/year formatting. A string the `Date` parser cannot digest is
/// shown as-is.
pub fn format_registration_date(raw: &str) -> String {
    let parsed = js_sys::Date::new(&JsValue::from_str(raw));
    if parsed.get_time().is_nan() {
        return raw.to_string();
    }
    String::from(parsed.to_locale_date_string("default", &JsValue::UNDEFINED))
}

/// Text of the confirmation prompt. Deleting an account also deletes its
/// progress data server-side, and the prompt says so.
pub fn confirm_prompt(name: &str) -> String {
    format!(
        "Delete {name}? This permanently removes the account and all of its card progress."
    )
}

#[cfg(test)]
mod tests {
    use super::confirm_prompt;

    #[test]
    fn confirm_prompt_names_the_student_and_the_consequence() {
        let prompt = confirm_prompt("Ada Lovelace");
        assert!(prompt.contains("Ada Lovelace"));
        assert!(prompt.contains("card progress"));
    }
}
