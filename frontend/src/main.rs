use crate::app::App;

mod api;
mod app;
mod components;
mod router;
mod session;
mod sheet;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
