use crate::components::monetization::Monetization;
use crate::components::penguins::PenguinApp;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <Monetization>
                <PenguinApp />
            </Monetization>
        }
    }
}
