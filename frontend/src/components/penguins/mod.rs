//! Penguin catalog page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, dialogs and helpers.
//!
//! The page's behavior lives in `common::catalog::CatalogController`; this
//! component owns one controller, forwards user actions to it and re-renders
//! whenever it reports a state change. On first render it starts the session
//! (load, then seed an empty store).

use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PenguinAppProps;
pub use state::PenguinApp;

impl Component for PenguinApp {
    type Message = Msg;
    type Properties = PenguinAppProps;

    fn create(ctx: &Context<Self>) -> Self {
        PenguinApp::new(ctx)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.initialized {
            self.initialized = true;
            let controller = self.controller.clone();
            spawn_local(async move {
                controller.initialize().await;
            });
        }
    }
}
