use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

use crate::router::{self, Route};
use crate::session::AdminSession;

/// Root component: owns the admin session for the lifetime of the page and
/// hands it to every routed screen.
pub struct App {
    session: AdminSession,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: AdminSession::from_window(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let session = self.session.clone();
        html! {
            <BrowserRouter>
                <Switch<Route> render={move |route| router::switch(route, session.clone())} />
            </BrowserRouter>
        }
    }
}
