use crate::store::DEFAULT_API_BASE;
use yew::prelude::*;

/// Properties for the `PenguinApp` component.
#[derive(Properties, PartialEq, Clone)]
pub struct PenguinAppProps {
    /// Base path of the penguin API. Read once, when the component is created.
    #[prop_or(AttrValue::Static(DEFAULT_API_BASE))]
    pub api_base: AttrValue,
}
