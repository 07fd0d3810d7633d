use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct MonetizationProps {
    pub children: Children,
}

/// Placement wrapper around the app. Renders its children unchanged.
pub struct Monetization;

impl Component for Monetization {
    type Message = ();
    type Properties = MonetizationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Monetization
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                { for ctx.props().children.iter() }
            </>
        }
    }
}
