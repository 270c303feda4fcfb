//! Homepage video setting: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and the URL helpers.
//!
//! On first render the current value is fetched and stored as both the
//! editable draft and the saved baseline; everything afterwards is local
//! until an explicit save.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::HomepageVideoProps;
pub use state::HomepageVideoSettings;

impl Component for HomepageVideoSettings {
    type Message = Msg;
    type Properties = HomepageVideoProps;

    fn create(_ctx: &Context<Self>) -> Self {
        HomepageVideoSettings::new()
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

            let link = ctx.link().clone();
            let session = ctx.props().session.clone();
            spawn_local(async move {
                match api::fetch_homepage_video_url(&session).await {
                    Ok(value) => link.send_message(Msg::SettingLoaded(value)),
                    Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                }
            });
        }
    }
}
