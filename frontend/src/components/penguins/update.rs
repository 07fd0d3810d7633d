//! Update function for the penguin catalog component.
//!
//! Every message is forwarded to the controller. Synchronous actions (opening
//! and closing dialogs, typing into the form) run inline; store-backed actions
//! are spawned on the local executor. Re-rendering is driven solely by
//! `Msg::Refresh`, which the controller's observer sends after each state
//! change, so action messages return `false`.

use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PenguinApp;

pub fn update(component: &mut PenguinApp, _ctx: &Context<PenguinApp>, msg: Msg) -> bool {
    let controller = component.controller.clone();
    match msg {
        Msg::Refresh => true,
        Msg::ToggleFavorite(penguin) => {
            spawn_local(async move {
                controller.toggle_favorite(penguin).await;
            });
            false
        }
        Msg::OpenCreateForm => {
            controller.open_create_form();
            false
        }
        Msg::OpenEditForm(penguin) => {
            controller.open_edit_form(penguin);
            false
        }
        Msg::CloseForm => {
            controller.close_form();
            false
        }
        Msg::UpdateField(field, value) => {
            controller.set_field(field, value);
            false
        }
        Msg::SetFavorite(is_favorite) => {
            controller.set_favorite_field(is_favorite);
            false
        }
        Msg::Submit => {
            spawn_local(async move {
                controller.submit_form().await;
            });
            false
        }
        Msg::RequestDelete(penguin) => {
            controller.request_delete(penguin);
            false
        }
        Msg::ConfirmDelete => {
            controller.confirm_delete();
            false
        }
        Msg::CancelDelete => {
            controller.cancel_delete();
            false
        }
    }
}
