//! Routed pages for creating and editing a student account.
//!
//! The actual form lives in a separate screen outside this repository's
//! scope; these pages keep the navigation surface complete so the roster's
//! create/edit links land somewhere sensible.

use yew::{html, Component, Context, Html, Properties};
use yew_router::prelude::Link;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct StudentFormProps {
    /// Id of the account being edited; `None` for the create page.
    #[prop_or_default]
    pub id: Option<i64>,
}

pub struct StudentFormPage;

impl Component for StudentFormPage {
    type Message = ();
    type Properties = StudentFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StudentFormPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let title = match ctx.props().id {
            Some(id) => format!("Edit student #{id}"),
            None => "New student".to_string(),
        };

        html! {
            <div class="admin-page" style="max-width:640px;margin:0 auto;padding:24px 16px;">
                <h1>{ title }</h1>
                <p style="color:#555;">
                    {"The account form is part of the enrollment flow and opens in its own screen."}
                </p>
                <Link<Route> to={Route::Students}>{"← Back to students"}</Link<Route>>
            </div>
        }
    }
}
