//! Client-side navigation surface of the admin panel.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::settings::homepage_video::HomepageVideoSettings;
use crate::components::students::form::StudentFormPage;
use crate::components::students::roster::StudentRoster;
use crate::session::AdminSession;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/admin/bridge-cards/students")]
    Students,
    #[at("/admin/bridge-cards/students/new")]
    StudentNew,
    #[at("/admin/bridge-cards/students/edit/:id")]
    StudentEdit { id: i64 },
    #[at("/admin/homepage-video")]
    HomepageVideo,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route, session: AdminSession) -> Html {
    match route {
        Route::Students => html! { <StudentRoster {session} /> },
        Route::StudentNew => html! { <StudentFormPage /> },
        Route::StudentEdit { id } => html! { <StudentFormPage id={Some(id)} /> },
        Route::HomepageVideo => html! { <HomepageVideoSettings {session} /> },
        Route::NotFound => html! {
            <div class="admin-page" style="text-align:center;padding:48px 16px;">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Students}>{"Back to students"}</Link<Route>>
            </div>
        },
    }
}
