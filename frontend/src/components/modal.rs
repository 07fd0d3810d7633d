use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Centered dialog over a dimmed backdrop. Renders nothing while closed.
pub struct Modal;

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Modal
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_close = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <div class="modal-backdrop" style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.45);z-index:9999;display:flex;align-items:center;justify-content:center;">
                <div class="modal" style="position:relative;width:600px;max-width:92vw;max-height:90vh;overflow-y:auto;background:#fff;border-radius:8px;padding:24px;box-shadow:0 6px 24px rgba(0,0,0,0.25);">
                    <button
                        onclick={on_close}
                        style="position:absolute;top:12px;right:16px;font-size:1.25rem;background:none;border:none;cursor:pointer;"
                    >
                        { "✕" }
                    </button>
                    <h2 style="margin-top:0;">{ props.title.clone() }</h2>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
