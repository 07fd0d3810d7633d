//! Component state for the penguin catalog page.

use std::rc::Rc;

use common::catalog::{CatalogController, CatalogObserver, Notification};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::show_toast;
use super::messages::Msg;
use crate::store::HttpPenguinStore;

/// Main state container for the `PenguinApp` component.
///
/// Catalog data, modal flags and the form all live inside `controller`; the
/// component only keeps what the Yew lifecycle needs on top of that.
pub struct PenguinApp {
    /// Drives loading, seeding and every mutation of the catalog.
    pub controller: CatalogController<HttpPenguinStore>,

    /// Guard to avoid running first-render initialization more than once.
    pub initialized: bool,
}

/// Bridges controller side effects into the component: state changes become
/// `Msg::Refresh`, notifications become toasts.
struct ComponentObserver {
    link: Scope<PenguinApp>,
}

impl CatalogObserver for ComponentObserver {
    fn state_changed(&self) {
        self.link.send_message(Msg::Refresh);
    }

    fn notify(&self, notification: Notification) {
        show_toast(notification.level, &notification.message);
    }
}

impl PenguinApp {
    pub fn new(ctx: &Context<Self>) -> Self {
        let store = HttpPenguinStore::new(ctx.props().api_base.to_string());
        let observer = ComponentObserver {
            link: ctx.link().clone(),
        };
        Self {
            controller: CatalogController::new(Rc::new(store), Rc::new(observer)),
            initialized: false,
        }
    }
}
