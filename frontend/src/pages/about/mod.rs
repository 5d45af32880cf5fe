//! About page: hero, bio, the interactive skill browser, experience and
//! education timelines, achievements and interests.
//!
//! The skill browser is the only stateful part. It combines a
//! [`CollectionFilter`](common::filter::CollectionFilter) over the skills with
//! a [`ViewModeState`](common::view_mode::ViewModeState) that tracks the
//! active rendering mode and the expanded skill card.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::About;

impl Component for About {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        About::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
