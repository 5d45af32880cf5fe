//! Contact page: profile details plus the message form.
//!
//! The form itself is a [`ContactForm`](common::contact::ContactForm); this
//! component only feeds it input events and drives the two timed steps of a
//! submission (simulated delivery, then hiding the success panel).

use yew::prelude::*;
use yew_router::history::Location;
use yew_router::prelude::*;

use crate::route::ContactQuery;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::Contact;

impl Component for Contact {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let service = ctx.link().location().and_then(|location| selected_service(&location));
        let mut contact = Contact::new(service);
        // Back/forward between two `?service=` entries reuses this instance.
        contact.location = ctx.link().add_location_listener(
            ctx.link()
                .callback(|location: Location| Msg::ServiceChanged(selected_service(&location))),
        );
        contact
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

fn selected_service(location: &Location) -> Option<String> {
    location
        .query::<ContactQuery>()
        .ok()
        .and_then(|query| query.service)
}
