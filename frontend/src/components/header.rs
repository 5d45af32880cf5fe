//! Sticky site header: brand, desktop navigation with the active route
//! highlighted, theme switcher and the mobile navigation sheet.
//!
//! The header subscribes to two things for its whole lifetime: window scroll
//! (to switch to the compact "scrolled" style) and router location changes
//! (to re-evaluate the active link and close the mobile sheet).

use common::content::profile::BRAND;
use common::model::theme::Theme;
use yew::{classes, html, Callback, Component, Context, Html, NodeRef, Properties};
use yew_router::prelude::*;

use crate::browser::{scroll_y, ScrollListener};
use crate::components::sheet::{close_sheet, open_sheet, Sheet};
use crate::components::theme_switcher::ThemeSwitcher;
use crate::route::{nav_items, Route};

const SCROLLED_AFTER: f64 = 50.0;

pub struct Header {
    scrolled: bool,
    menu_ref: NodeRef,
    _scroll: Option<ScrollListener>,
    _location: Option<LocationHandle>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub theme: Theme,
    pub on_theme_change: Callback<Theme>,
}

pub enum Msg {
    Scrolled(bool),
    LocationChanged,
    OpenMenu,
    CloseMenu,
}

impl Component for Header {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let scroll = ScrollListener::new(move || {
            link.send_message(Msg::Scrolled(scroll_y() > SCROLLED_AFTER));
        });
        let location = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_| Msg::LocationChanged));

        Self {
            scrolled: scroll_y() > SCROLLED_AFTER,
            menu_ref: NodeRef::default(),
            _scroll: scroll,
            _location: location,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scrolled(scrolled) => {
                let changed = self.scrolled != scrolled;
                self.scrolled = scrolled;
                changed
            }
            Msg::LocationChanged => {
                close_sheet(&self.menu_ref);
                true
            }
            Msg::OpenMenu => {
                open_sheet(&self.menu_ref);
                false
            }
            Msg::CloseMenu => {
                close_sheet(&self.menu_ref);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let current = link.route::<Route>();

        let nav_links = |class: &'static str| -> Html {
            nav_items()
                .into_iter()
                .map(|item| {
                    let active = current.as_ref() == Some(&item.route);
                    html! {
                        <Link<Route>
                            to={item.route}
                            classes={classes!(class, active.then_some("active"))}
                        >
                            <i class="material-icons">{ item.icon }</i>
                            <span>{ item.label }</span>
                        </Link<Route>>
                    }
                })
                .collect()
        };

        html! {
            <header class={classes!("site-header", self.scrolled.then_some("scrolled"))}>
                <div class="container header-row">
                    <Link<Route> to={Route::Home} classes={classes!("brand")}>
                        <i class="material-icons">{"home"}</i>
                        <span>{ BRAND }</span>
                    </Link<Route>>

                    <nav class="desktop-nav">
                        { nav_links("nav-link") }
                        <ThemeSwitcher theme={props.theme} on_change={props.on_theme_change.clone()} />
                    </nav>

                    <div class="mobile-nav">
                        <ThemeSwitcher theme={props.theme} on_change={props.on_theme_change.clone()} />
                        <button
                            class="btn icon round"
                            aria-label="Open menu"
                            onclick={link.callback(|_| Msg::OpenMenu)}
                        >
                            <i class="material-icons">{"menu"}</i>
                        </button>
                    </div>
                </div>

                <Sheet node_ref={self.menu_ref.clone()} title={Some("Navigation Menu".to_string())}>
                    <button
                        class="btn icon side-sheet-close"
                        aria-label="Close menu"
                        onclick={link.callback(|_| Msg::CloseMenu)}
                    >
                        <i class="material-icons">{"close"}</i>
                    </button>
                    <p class="muted">{"Browse through the site sections"}</p>
                    <nav class="sheet-nav">
                        { nav_links("sheet-link") }
                    </nav>
                </Sheet>
            </header>
        }
    }
}
