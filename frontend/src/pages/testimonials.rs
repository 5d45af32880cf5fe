//! Testimonials page with two layouts.
//!
//! The carousel autoplays every [`AUTOPLAY_INTERVAL`]; hovering one of the
//! arrow controls pauses it. The interval handle exists only while the
//! carousel layout is active, so the grid layout never wakes the component.
//! The grid layout adds a search box and project tabs.

use common::carousel::{Carousel, AUTOPLAY_INTERVAL};
use common::content::testimonials;
use common::filter::CollectionFilter;
use common::model::testimonial::Testimonial;
use common::view_mode::{TestimonialView, ViewModeState};
use gloo_timers::callback::Interval;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

pub struct Testimonials {
    items: Vec<Testimonial>,
    projects: Vec<String>,
    view: ViewModeState<TestimonialView, ()>,
    carousel: Carousel,
    filter: CollectionFilter<String>,
    autoplay: Option<Interval>,
}

pub enum Msg {
    SetView(TestimonialView),
    Tick,
    Next,
    Previous,
    GoTo(usize),
    Hover(bool),
    SetSearch(String),
    SetProject(Option<String>),
    ClearFilters,
}

impl Component for Testimonials {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let items = testimonials::testimonials();
        let projects = items.iter().filter_map(|t| t.project.clone()).collect();
        let view = ViewModeState::default();
        let autoplay = start_autoplay(view.mode(), ctx.link());

        Self {
            carousel: Carousel::new(items.len()),
            items,
            projects,
            view,
            filter: CollectionFilter::new(),
            autoplay,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetView(mode) => {
                if !self.view.select(mode) {
                    return false;
                }
                // Dropping the old handle clears the browser interval.
                self.autoplay = start_autoplay(mode, ctx.link());
                self.carousel.set_hovering(false);
                true
            }
            Msg::Tick => self.carousel.tick(),
            Msg::Next => {
                self.carousel.next();
                true
            }
            Msg::Previous => {
                self.carousel.previous();
                true
            }
            Msg::GoTo(index) => {
                self.carousel.go_to(index);
                true
            }
            Msg::Hover(hovering) => {
                self.carousel.set_hovering(hovering);
                false
            }
            Msg::SetSearch(term) => {
                self.filter.set_search(term);
                true
            }
            Msg::SetProject(project) => {
                self.filter.set_category(project);
                true
            }
            Msg::ClearFilters => {
                self.filter.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <section class="container page">
                <div class="page-header">
                    <h1 class="page-title">{"Client "}<span class="accent">{"Testimonials"}</span></h1>
                    <p class="muted page-lead">
                        {"Don't just take my word for it. Here's what clients have to say about working with me on various projects."}
                    </p>
                    <div class="toggle-group">
                        { for [TestimonialView::Carousel, TestimonialView::Grid].into_iter().map(|mode| html! {
                            <button
                                class={classes!("btn", "small", if self.view.mode() == mode { "primary" } else { "outline" })}
                                onclick={link.callback(move |_| Msg::SetView(mode))}
                            >
                                { format!("{} View", mode.label()) }
                            </button>
                        }) }
                    </div>
                </div>

                { match self.view.mode() {
                    TestimonialView::Carousel => self.build_carousel(link),
                    TestimonialView::Grid => self.build_grid(link),
                } }

                <div class="card cta centered">
                    <h2>{"Ready to Work Together?"}</h2>
                    <p class="muted">
                        {"I'm currently available for freelance projects. Let's discuss how I can help bring your vision to life."}
                    </p>
                    <Link<Route> to={Route::Contact} classes={classes!("btn", "primary")}>{"Get in Touch"}</Link<Route>>
                </div>
            </section>
        }
    }
}

fn start_autoplay(mode: TestimonialView, link: &Scope<Testimonials>) -> Option<Interval> {
    if mode != TestimonialView::Carousel {
        return None;
    }
    let link = link.clone();
    let millis = u32::try_from(AUTOPLAY_INTERVAL.as_millis()).unwrap_or(u32::MAX);
    Some(Interval::new(millis, move || link.send_message(Msg::Tick)))
}

impl Testimonials {
    fn build_carousel(&self, link: &Scope<Self>) -> Html {
        let Some(active) = self.items.get(self.carousel.index()) else {
            return html! { <p class="muted centered">{"No testimonials yet."}</p> };
        };

        html! {
            <div class="carousel">
                <div class="card testimonial-slide">
                    <div class="testimonial-author">
                        { avatar(active) }
                        <div>
                            <h3>{ active.name.clone() }</h3>
                            <p class="muted">{ active.title.clone() }</p>
                            if let Some(company) = &active.company {
                                <p class="accent small">{ company.clone() }</p>
                            }
                            if let Some(project) = &active.project {
                                <span class="tag"><i class="material-icons small">{"work_outline"}</i>{ project.clone() }</span>
                            }
                        </div>
                    </div>
                    <div class="testimonial-quote">
                        <i class="material-icons large quote-mark">{"format_quote"}</i>
                        { stars(active) }
                        <p class="quote">{ format!("\"{}\"", active.quote) }</p>
                    </div>
                </div>

                <div class="carousel-dots">
                    { for (0..self.carousel.len()).map(|index| html! {
                        <button
                            class={classes!("dot", (index == self.carousel.index()).then_some("active"))}
                            aria-label={format!("Go to testimonial {}", index + 1)}
                            onclick={link.callback(move |_| Msg::GoTo(index))}
                        />
                    }) }
                </div>

                <div class="carousel-controls">
                    { control(link, "chevron_left", || Msg::Previous) }
                    { control(link, "chevron_right", || Msg::Next) }
                </div>
            </div>
        }
    }

    fn build_grid(&self, link: &Scope<Self>) -> Html {
        let shown = self.filter.apply(&self.items);
        let selected = self.filter.category.as_ref();

        html! {
            <>
                <div class="filters centered">
                    <div class="search-box">
                        <i class="material-icons">{"search"}</i>
                        <input
                            type="text"
                            placeholder="Search testimonials..."
                            value={self.filter.search.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </div>
                    <div class="chips">
                        <button
                            class={classes!("chip", selected.is_none().then_some("active"))}
                            onclick={link.callback(|_| Msg::SetProject(None))}
                        >
                            {"All"}
                        </button>
                        { for self.projects.iter().map(|project| {
                            let value = project.clone();
                            html! {
                                <button
                                    class={classes!("chip", (selected == Some(project)).then_some("active"))}
                                    onclick={link.callback(move |_| Msg::SetProject(Some(value.clone())))}
                                >
                                    { project.clone() }
                                </button>
                            }
                        }) }
                    </div>
                </div>

                if shown.is_empty() {
                    <div class="empty-state">
                        <i class="material-icons large muted">{"search_off"}</i>
                        <h3>{"No testimonials match your search."}</h3>
                        <button class="btn outline" onclick={link.callback(|_| Msg::ClearFilters)}>
                            {"Clear filters"}
                        </button>
                    </div>
                } else {
                    <div class="card-grid">
                        { for shown.into_iter().map(grid_card) }
                    </div>
                }
            </>
        }
    }
}

fn control(link: &Scope<Testimonials>, icon: &'static str, msg: fn() -> Msg) -> Html {
    html! {
        <button
            class="btn icon round"
            onclick={link.callback(move |_| msg())}
            onmouseenter={link.callback(|_| Msg::Hover(true))}
            onmouseleave={link.callback(|_| Msg::Hover(false))}
        >
            <i class="material-icons">{ icon }</i>
        </button>
    }
}

fn grid_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="card testimonial-card">
            <div class="testimonial-author">
                { avatar(testimonial) }
                <div>
                    <h4>{ testimonial.name.clone() }</h4>
                    <p class="muted small">
                        { testimonial.title.clone() }
                        if let Some(company) = &testimonial.company {
                            { format!(", {}", company) }
                        }
                    </p>
                </div>
            </div>
            { stars(testimonial) }
            if let Some(project) = &testimonial.project {
                <span class="tag">{ project.clone() }</span>
            }
            <p class="quote small">{ format!("\"{}\"", testimonial.excerpt(150)) }</p>
        </div>
    }
}

fn avatar(testimonial: &Testimonial) -> Html {
    match &testimonial.image {
        Some(src) => html! { <img class="avatar" src={src.clone()} alt={testimonial.name.clone()} /> },
        None => html! { <i class="material-icons avatar placeholder">{"person"}</i> },
    }
}

fn stars(testimonial: &Testimonial) -> Html {
    let Some(stars) = testimonial.stars() else {
        return Html::default();
    };
    html! {
        <div class="stars">
            { for stars.into_iter().map(|filled| html! {
                <i class={classes!("material-icons", "small", filled.then_some("filled"))}>
                    { if filled { "star" } else { "star_border" } }
                </i>
            }) }
        </div>
    }
}
