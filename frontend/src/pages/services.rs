//! Services catalogue with category tabs and a search box. Each card links
//! to the contact form with the service's title carried in the query string.

use common::content::services;
use common::filter::CollectionFilter;
use common::model::service::{Service, ServiceCategory};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::{ContactQuery, Route};

pub struct Services {
    items: Vec<Service>,
    filter: CollectionFilter<ServiceCategory>,
}

pub enum Msg {
    SetCategory(Option<ServiceCategory>),
    SetSearch(String),
    ClearFilters,
}

impl Component for Services {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            items: services::services(),
            filter: CollectionFilter::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetCategory(category) => {
                if self.filter.category == category {
                    return false;
                }
                self.filter.set_category(category);
            }
            Msg::SetSearch(term) => self.filter.set_search(term),
            Msg::ClearFilters => self.filter.reset(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let shown = self.filter.apply(&self.items);

        html! {
            <section class="container page">
                <div class="page-header">
                    <h1 class="page-title">{"My "}<span class="accent">{"Services"}</span></h1>
                    <p class="muted page-lead">
                        {"I offer a comprehensive range of services to help businesses and individuals establish a strong online presence and achieve their digital goals."}
                    </p>
                    { self.build_filters(link) }
                </div>

                if shown.is_empty() {
                    <div class="empty-state">
                        <i class="material-icons large muted">{"search_off"}</i>
                        <h3>{"No services found"}</h3>
                        <button class="btn outline" onclick={link.callback(|_| Msg::ClearFilters)}>
                            {"Clear filters"}
                        </button>
                    </div>
                } else {
                    <div class="card-grid">
                        { for shown.into_iter().map(service_card) }
                    </div>
                }

                <div class="card cta centered">
                    <h2>{"Need a Custom Solution?"}</h2>
                    <p class="muted">
                        {"Don't see exactly what you need? Contact me for a custom quote tailored to your specific project requirements. I specialize in creating bespoke solutions that perfectly match your vision."}
                    </p>
                    <Link<Route> to={Route::Contact} classes={classes!("btn", "primary")}>
                        {"Get In Touch"}
                        <i class="material-icons small">{"arrow_forward"}</i>
                    </Link<Route>>
                </div>
            </section>
        }
    }
}

impl Services {
    fn build_filters(&self, link: &Scope<Self>) -> Html {
        let selected = self.filter.category;

        html! {
            <div class="filters centered">
                <div class="chips">
                    <button
                        class={classes!("chip", selected.is_none().then_some("active"))}
                        onclick={link.callback(|_| Msg::SetCategory(None))}
                    >
                        {"All"}
                    </button>
                    { for ServiceCategory::ALL.into_iter().map(|category| html! {
                        <button
                            class={classes!("chip", (selected == Some(category)).then_some("active"))}
                            onclick={link.callback(move |_| Msg::SetCategory(Some(category)))}
                        >
                            { category.label() }
                        </button>
                    }) }
                </div>
                <div class="search-box">
                    <i class="material-icons">{"search"}</i>
                    <input
                        type="text"
                        placeholder="Search services..."
                        value={self.filter.search.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
            </div>
        }
    }
}

fn service_card(service: &Service) -> Html {
    let query = ContactQuery {
        service: Some(service.title.clone()),
    };

    html! {
        <div class="card service-card">
            <span class={classes!("price-badge", "gradient", service.color.clone())}>{ service.price.clone() }</span>
            <div class={classes!("service-icon", "gradient", service.color.clone())}>
                <i class="material-icons">{ service.icon.clone() }</i>
            </div>
            <h3>{ service.title.clone() }</h3>
            <p class="muted">{ service.description.clone() }</p>
            <h4 class="features-title"><i class="material-icons small accent">{"chevron_right"}</i>{"Key Features:"}</h4>
            <ul class="feature-list">
                { for service.features.iter().map(|feature| html! {
                    <li><i class="material-icons small accent">{"check"}</i>{ feature.clone() }</li>
                }) }
            </ul>
            <Link<Route, ContactQuery>
                to={Route::Contact}
                query={Some(query)}
                classes={classes!("btn", "block", "gradient", service.color.clone())}
            >
                {"Request Service"}
                <i class="material-icons small">{"arrow_forward"}</i>
            </Link<Route, ContactQuery>>
        </div>
    }
}
