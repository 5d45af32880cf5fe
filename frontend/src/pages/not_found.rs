use yew::{classes, html, Component, Context, Html};
use yew_router::prelude::*;

use crate::route::Route;

pub struct NotFound;

impl Component for NotFound {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="container page empty-state">
                <i class="material-icons large">{"explore_off"}</i>
                <h1>{"Page not found"}</h1>
                <p class="muted">{"The page you are looking for does not exist or has moved."}</p>
                <Link<Route> to={Route::Home} classes={classes!("btn", "primary")}>{"Back to home"}</Link<Route>>
            </section>
        }
    }
}
