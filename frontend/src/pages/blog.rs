//! Blog index: search box, tag bar, featured articles and the result grid.
//!
//! The featured section is shown only while no filter is active; once the
//! visitor searches or picks a tag, a results summary replaces it.

use common::content::blog;
use common::filter::{results_label, unique_tags, CollectionFilter};
use common::model::blog::BlogPost;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

pub struct Blog {
    posts: Vec<BlogPost>,
    tags: Vec<String>,
    filter: CollectionFilter<String>,
}

pub enum Msg {
    SetSearch(String),
    SetTag(Option<String>),
    ClearFilters,
}

impl Component for Blog {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let posts = blog::posts();
        let tags = unique_tags(&posts);
        Self {
            posts,
            tags,
            filter: CollectionFilter::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetSearch(term) => self.filter.set_search(term),
            Msg::SetTag(tag) => self.filter.set_category(tag),
            Msg::ClearFilters => self.filter.reset(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let shown = self.filter.apply(&self.posts);

        html! {
            <section class="container page">
                <div class="page-header">
                    <h1 class="page-title">{"Blog & Articles"}</h1>
                    <p class="muted page-lead">
                        {"Insights, tutorials, and thoughts on web development, design, and technology."}
                    </p>
                    { self.build_filters(link) }
                </div>

                if self.filter.is_active() {
                    <p class="muted results-label">
                        { results_label(shown.len(), self.filter.category.as_deref(), &self.filter.search) }
                    </p>
                } else {
                    { self.build_featured() }
                }

                if shown.is_empty() {
                    <div class="empty-state">
                        <i class="material-icons large muted">{"search"}</i>
                        <h3>{"No articles found"}</h3>
                        <p class="muted">{"Try adjusting your search or filter to find what you're looking for."}</p>
                        <button class="btn outline" onclick={link.callback(|_| Msg::ClearFilters)}>
                            {"Clear filters"}
                        </button>
                    </div>
                } else {
                    <div class="card-grid">
                        { for shown.into_iter().map(post_card) }
                    </div>
                }
            </section>
        }
    }
}

impl Blog {
    fn build_filters(&self, link: &Scope<Self>) -> Html {
        let selected = self.filter.category.as_ref();

        html! {
            <div class="filters centered">
                <div class="search-box">
                    <i class="material-icons">{"search"}</i>
                    <input
                        type="text"
                        placeholder="Search articles..."
                        value={self.filter.search.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </div>
                <div class="chips">
                    <button
                        class={classes!("chip", selected.is_none().then_some("active"))}
                        onclick={link.callback(|_| Msg::SetTag(None))}
                    >
                        {"All"}
                    </button>
                    { for self.tags.iter().map(|tag| {
                        let value = tag.clone();
                        html! {
                            <button
                                class={classes!("chip", (selected == Some(tag)).then_some("active"))}
                                onclick={link.callback(move |_| Msg::SetTag(Some(value.clone())))}
                            >
                                <i class="material-icons small">{"sell"}</i>
                                { tag.clone() }
                            </button>
                        }
                    }) }
                </div>
            </div>
        }
    }

    fn build_featured(&self) -> Html {
        html! {
            <div class="featured">
                <h2 class="section-title left">{"Featured Articles"}</h2>
                <div class="two-columns">
                    { for self.posts.iter().filter(|p| p.featured).map(|post| html! {
                        <Link<Route> to={Route::BlogPost { slug: post.slug.clone() }} classes={classes!("card", "featured-card")}>
                            <div class="featured-image">
                                <img src={post.image.clone()} alt={post.title.clone()} />
                                <div class="featured-overlay">
                                    <div class="tags">
                                        { for post.tags.iter().take(2).map(|tag| html! { <span class="tag solid">{ tag.clone() }</span> }) }
                                    </div>
                                    <h3>{ post.title.clone() }</h3>
                                </div>
                            </div>
                            <div class="card-body">
                                <p class="muted">{ post.summary.clone() }</p>
                                { post_meta(post) }
                            </div>
                        </Link<Route>>
                    }) }
                </div>
            </div>
        }
    }
}

fn post_meta(post: &BlogPost) -> Html {
    html! {
        <div class="post-meta muted small">
            <span><i class="material-icons small">{"calendar_today"}</i>{ post.date.clone() }</span>
            if let Some(read_time) = &post.read_time {
                <span><i class="material-icons small">{"schedule"}</i>{ read_time.clone() }</span>
            }
        </div>
    }
}

fn post_card(post: &BlogPost) -> Html {
    html! {
        <Link<Route> to={Route::BlogPost { slug: post.slug.clone() }} classes={classes!("card", "post-card")}>
            <div class="card-image-wrap">
                <img class="card-image" src={post.image.clone()} alt={post.title.clone()} />
                if let Some(read_time) = &post.read_time {
                    <span class="badge corner"><i class="material-icons small">{"schedule"}</i>{ read_time.clone() }</span>
                }
            </div>
            <div class="card-body">
                <div class="tags">
                    { for post.tags.iter().take(3).map(|tag| html! { <span class="tag">{ tag.clone() }</span> }) }
                </div>
                <h3>{ post.title.clone() }</h3>
                <p class="muted small">{ post.summary.clone() }</p>
            </div>
            <div class="card-footer muted small">
                <span><i class="material-icons small">{"calendar_today"}</i>{ post.date.clone() }</span>
                <span class="accent">{"Read more"}<i class="material-icons small">{"arrow_forward"}</i></span>
            </div>
        </Link<Route>>
    }
}
