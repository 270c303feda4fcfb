//! Student roster: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `RosterProps`, `StudentRoster`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, request the full student list from the backend.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RosterProps;
pub use state::StudentRoster;

impl Component for StudentRoster {
    type Message = Msg;
    type Properties = RosterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StudentRoster::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            helpers::load_students(ctx.link().clone(), ctx.props().session.clone());
        }
    }
}
