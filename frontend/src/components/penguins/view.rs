//! View rendering for the penguin catalog component.
//!
//! Header, an "Add New Penguin" button, a grid of record cards (favorite, edit
//! and delete actions on each), the "no penguins found" placeholder, and the
//! form and delete dialogs.

use super::dialogs::delete::delete_dialog;
use super::dialogs::form::form_dialog;
use super::helpers::favorite_icon;
use super::messages::Msg;
use super::state::PenguinApp;
use common::model::penguin::{Penguin, DEFAULT_IMAGE};
use yew::html::Scope;
use yew::prelude::*;

/// Main view function for the penguin catalog component.
pub fn view(component: &PenguinApp, ctx: &Context<PenguinApp>) -> Html {
    let link = ctx.link();

    html! {
        <div class="penguin-root" style="min-height:100vh;background:linear-gradient(135deg,#eff6ff,#ecfeff);padding:16px;">
            <div style="max-width:1280px;margin:0 auto;">
                { build_header() }
                <div style="display:flex;justify-content:center;margin-bottom:24px;">
                    { icon_button("add", "Add New Penguin", link.callback(|_| Msg::OpenCreateForm), "icon-btn primary") }
                </div>
                { build_grid(component, link) }
                { build_empty_state(component) }
                { form_dialog(component, link) }
                { delete_dialog(component, link) }
            </div>
        </div>
    }
}

fn build_header() -> Html {
    html! {
        <div style="text-align:center;margin-bottom:32px;">
            <h1 style="font-size:3rem;margin-bottom:16px;">{ format!("{} Penguin Explorer", DEFAULT_IMAGE) }</h1>
            <p style="font-size:1.1rem;color:#4b5563;max-width:640px;margin:0 auto;">
                { "Discover the amazing world of penguins! Learn about different species, their habitats, and fascinating facts." }
            </p>
        </div>
    }
}

fn build_grid(component: &PenguinApp, link: &Scope<PenguinApp>) -> Html {
    let state = component.controller.state();
    html! {
        <div class="penguin-grid" style="display:grid;grid-template-columns:repeat(auto-fill,minmax(320px,1fr));gap:24px;">
            { for state.records.iter().map(|penguin| build_card(penguin, link)) }
        </div>
    }
}

/// One record card: image cover, details, fun fact and the three actions.
fn build_card(penguin: &Penguin, link: &Scope<PenguinApp>) -> Html {
    let on_favorite = {
        let penguin = penguin.clone();
        link.callback(move |_| Msg::ToggleFavorite(penguin.clone()))
    };
    let on_edit = {
        let penguin = penguin.clone();
        link.callback(move |_| Msg::OpenEditForm(penguin.clone()))
    };
    let on_delete = {
        let penguin = penguin.clone();
        link.callback(move |_| Msg::RequestDelete(penguin.clone()))
    };

    html! {
        <div key={penguin.id.clone()} class="penguin-card" style="background:#fff;border-radius:8px;box-shadow:0 4px 12px rgba(0,0,0,0.1);display:flex;flex-direction:column;overflow:hidden;">
            <div style="height:192px;background:linear-gradient(135deg,#dbeafe,#cffafe);display:flex;align-items:center;justify-content:center;font-size:4rem;">
                { penguin.display_image().to_string() }
            </div>
            <div style="padding:16px;flex:1;">
                <div style="display:flex;align-items:center;justify-content:space-between;">
                    <h3 style="margin:0;">{ penguin.species.clone() }</h3>
                    {
                        if penguin.is_favorite {
                            html! { <span class="tag" style="color:#c62828;border:1px solid #ef9a9a;background:#ffebee;border-radius:4px;padding:0 6px;font-size:12px;">{ "Favorite" }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                { detail("Habitat", &penguin.habitat) }
                { detail("Height", &penguin.height) }
                { detail("Diet", &penguin.diet) }
                <div style="margin-top:16px;padding:12px;background:#eff6ff;border-radius:8px;">
                    <strong style="color:#1d4ed8;">{ "Fun Fact:" }</strong>
                    <p style="margin:4px 0 0 0;font-size:0.9rem;">{ penguin.fun_fact.clone() }</p>
                </div>
            </div>
            <div style="display:flex;justify-content:space-around;border-top:1px solid #f0f0f0;">
                { icon_button(favorite_icon(penguin.is_favorite), "", on_favorite, "icon-btn") }
                { icon_button("edit", "", on_edit, "icon-btn") }
                { icon_button("delete", "", on_delete, "icon-btn") }
            </div>
        </div>
    }
}

fn detail(label: &str, value: &str) -> Html {
    html! {
        <div style="margin-top:8px;">
            <strong>{ format!("{}: ", label) }</strong>
            <span>{ value.to_string() }</span>
        </div>
    }
}

fn build_empty_state(component: &PenguinApp) -> Html {
    if !component.controller.state().show_empty_state() {
        return html! {};
    }
    html! {
        <div style="text-align:center;padding:48px 0;">
            <div style="font-size:4rem;margin-bottom:16px;">{ DEFAULT_IMAGE }</div>
            <h3>{ "No penguins found" }</h3>
            <span style="color:#6b7280;">{ "Add some penguins to get started!" }</span>
        </div>
    }
}

/// Renders a button with a Material icon and an optional label.
fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>, class: &str) -> Html {
    html! {
        <button class={class.to_string()} onclick={on_click}>
            <i class="material-icons">{ icon_name.to_string() }</i>
            {
                if label.is_empty() {
                    html! {}
                } else {
                    html! { <span class="icon-label">{ label.to_string() }</span> }
                }
            }
        </button>
    }
}
