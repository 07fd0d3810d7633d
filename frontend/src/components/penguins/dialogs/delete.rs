use crate::components::modal::Modal;
use crate::components::penguins::{Msg, PenguinApp};
use yew::html::Scope;
use yew::prelude::*;

/// Confirmation dialog shown after a delete request.
pub fn delete_dialog(component: &PenguinApp, link: &Scope<PenguinApp>) -> Html {
    let Some(prompt) = component.controller.state().delete_prompt() else {
        return html! {};
    };

    html! {
        <Modal open={true} title={prompt.title} on_close={link.callback(|_| Msg::CancelDelete)}>
            <p>{ prompt.content }</p>
            <div style="display:flex;gap:8px;justify-content:flex-end;">
                <button class="btn" onclick={link.callback(|_| Msg::CancelDelete)}>{ "Cancel" }</button>
                <button class="btn btn-danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>{ "OK" }</button>
            </div>
        </Modal>
    }
}
