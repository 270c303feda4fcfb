//! Sheet dialog primitive used for confirmation prompts.
//!
//! The sheet renders its children permanently and is shown or hidden by
//! toggling a `show` class on the container, addressed through a `NodeRef`
//! owned by the embedding component.

use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct ConfirmSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for ConfirmSheet {
    type Message = ();
    type Properties = SheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="confirm-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_sheet(sheet_ref: NodeRef) {
    toggle_sheet_class(sheet_ref, "classList.add");
}

pub fn close_sheet(sheet_ref: NodeRef) {
    toggle_sheet_class(sheet_ref, "classList.remove");
}

// The class flip is deferred through setTimeout so the browser applies the
// CSS transition instead of snapping to the final state.
fn toggle_sheet_class(sheet_ref: NodeRef, operation: &str) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').{}('show')",
            sheet.id(),
            operation
        ));
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50);
        }
    }
}
