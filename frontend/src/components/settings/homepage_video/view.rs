//! View rendering for the homepage video setting component.
//!
//! A single URL input with save/revert controls, a validation hint that
//! appears only after a rejected save attempt, and a live embedded preview
//! whenever an identifier can be extracted from the draft.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{embed_url, extract_video_id};
use super::messages::Msg;
use super::state::HomepageVideoSettings;

pub fn view(component: &HomepageVideoSettings, ctx: &Context<HomepageVideoSettings>) -> Html {
    let link = ctx.link();

    html! {
        <div class="admin-page homepage-video-page" style="max-width:720px;margin:0 auto;padding:24px 16px;">
            <h1 style="margin-top:0;">{"Homepage video"}</h1>
            <p style="color:#555;">
                {"The video shown on the landing page. Paste a YouTube link, or clear the field to show none."}
            </p>
            { build_error_banner(component, link) }
            {
                if component.loading {
                    build_loading_indicator()
                } else {
                    html! {
                        <>
                            { build_editor(component, link) }
                            { build_preview(component) }
                        </>
                    }
                }
            }
        </div>
    }
}

fn build_error_banner(component: &HomepageVideoSettings, link: &Scope<HomepageVideoSettings>) -> Html {
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
            <div style="margin-top:12px;color:#555;">{"Loading setting..."}</div>
            <style>{r#"
                @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
            "#}</style>
        </div>
    }
}

fn build_editor(component: &HomepageVideoSettings, link: &Scope<HomepageVideoSettings>) -> Html {
    html! {
        <div class="setting-editor" style="margin-bottom:24px;">
            <label for="homepage-video-url" style="display:block;margin-bottom:4px;font-weight:600;">
                {"Video URL"}
            </label>
            <input
                id="homepage-video-url"
                type="text"
                value={component.draft.clone()}
                placeholder="https://www.youtube.com/watch?v=..."
                style="width:100%;padding:8px;border:1px solid #ccc;border-radius:4px;box-sizing:border-box;"
                oninput={link.callback(|e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    Msg::UpdateDraft(value)
                })}
            />
            {
                if let Some(message) = &component.validation_error {
                    html! { <div style="color:#b71c1c;margin-top:4px;">{ message }</div> }
                } else {
                    html! {}
                }
            }
            <div style="display:flex;align-items:center;gap:8px;margin-top:12px;">
                <button
                    style="padding:0.5rem 1.25rem;background:#1976d2;color:#fff;border:none;border-radius:4px;cursor:pointer;"
                    disabled={component.saving}
                    onclick={link.callback(|_| Msg::Save)}
                >
                    { if component.saving { "Saving..." } else { "Save" } }
                </button>
                {
                    if component.has_changes() {
                        html! {
                            <button
                                style="padding:0.5rem 1.25rem;background:#eee;border:none;border-radius:4px;cursor:pointer;"
                                disabled={component.saving}
                                onclick={link.callback(|_| Msg::Revert)}
                            >
                                { "Revert" }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if component.has_changes() {
                        html! { <span style="color:#888;">{"Unsaved changes"}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

fn build_preview(component: &HomepageVideoSettings) -> Html {
    let Some(video_id) = extract_video_id(&component.draft) else {
        return html! {};
    };

    html! {
        <div class="video-preview">
            <h2 style="margin-bottom:8px;">{"Preview"}</h2>
            <iframe
                src={embed_url(&video_id)}
                title="Homepage video preview"
                style="width:100%;aspect-ratio:16/9;border:none;border-radius:4px;background:#000;"
            />
        </div>
    }
}
