use yew::prelude::*;

use super::messages::Msg;
use super::state::About;

pub fn update(about: &mut About, _ctx: &Context<About>, msg: Msg) -> bool {
    match msg {
        Msg::SetSearch(term) => {
            about.filter.set_search(term);
            true
        }
        Msg::SetCategory(category) => {
            if about.filter.category == category {
                return false;
            }
            about.filter.set_category(category);
            true
        }
        Msg::ClearFilters => {
            about.filter.reset();
            true
        }
        Msg::SetView(mode) => about.view.select(mode),
        Msg::ToggleSkill(name) => {
            about.view.toggle_expanded(name);
            true
        }
    }
}
