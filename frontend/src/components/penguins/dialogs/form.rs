//! Add/edit form dialog.
//!
//! Inputs are bound to `CatalogState::form` through `Msg::UpdateField`; the
//! required-field messages come from the last submit attempt.

use crate::components::modal::Modal;
use crate::components::penguins::{Msg, PenguinApp};
use common::catalog::{CatalogState, FormField};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

pub fn form_dialog(component: &PenguinApp, link: &Scope<PenguinApp>) -> Html {
    let state = component.controller.state();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let on_favorite = link.callback(|e: Event| {
        Msg::SetFavorite(e.target_unchecked_into::<HtmlInputElement>().checked())
    });

    html! {
        <Modal
            open={state.is_modal_open}
            title={state.form_title()}
            on_close={link.callback(|_| Msg::CloseForm)}
        >
            <form {onsubmit}>
                { for FormField::ALL.into_iter().map(|field| form_item(&state, field, link)) }

                <label style="display:flex;align-items:center;gap:8px;margin-bottom:16px;">
                    <input type="checkbox" checked={state.form.is_favorite} onchange={on_favorite} />
                    { "Mark as favorite" }
                </label>

                <div style="display:flex;gap:8px;">
                    <button type="submit" class="btn btn-primary">{ state.submit_label() }</button>
                    <button type="button" class="btn" onclick={link.callback(|_| Msg::CloseForm)}>
                        { "Cancel" }
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// One labelled input with its validation message, if any.
fn form_item(state: &CatalogState, field: FormField, link: &Scope<PenguinApp>) -> Html {
    let value = state.form.value(field).to_string();
    let error = state.error_for(field);
    let border = if error.is_some() { "#e53935" } else { "#ccc" };
    let input_style = format!(
        "width:100%;padding:6px 8px;border:1px solid {};border-radius:4px;box-sizing:border-box;",
        border
    );

    let input = if field.is_multiline() {
        html! {
            <textarea
                rows={3}
                style={input_style}
                placeholder={field.placeholder()}
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::UpdateField(field, e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        }
    } else {
        html! {
            <input
                type="text"
                style={input_style}
                placeholder={field.placeholder()}
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::UpdateField(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        }
    };

    html! {
        <div style="margin-bottom:16px;">
            <label style="display:block;margin-bottom:4px;font-weight:600;">
                {
                    if field.is_required() {
                        html! { <span style="color:#e53935;">{ "* " }</span> }
                    } else {
                        html! {}
                    }
                }
                { field.label() }
            </label>
            { input }
            {
                match error {
                    Some(message) => html! { <div style="color:#e53935;font-size:12px;margin-top:4px;">{ message }</div> },
                    None => html! {},
                }
            }
        </div>
    }
}
