//! Article page at `/blog/{slug}`.
//!
//! Unknown slugs are replaced with the blog index in history, so the back
//! button never returns to a dead URL. While an article is shown, a window
//! scroll listener keeps the reading progress bar current.

use common::blog::{lookup, reading_progress, BlogLookup};
use common::content::blog;
use common::model::blog::BlogPostDetail;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::{self, ScrollListener};
use crate::route::Route;

mod markdown;
mod view;

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

pub struct BlogPostPage {
    posts: Vec<BlogPostDetail>,
    /// Percentage in `0..=100`.
    progress: f64,
    share_open: bool,
    bookmarked: bool,
    liked: bool,
    article_ref: NodeRef,
    _scroll: Option<ScrollListener>,
}

pub enum Msg {
    Scrolled,
    ToggleShare,
    ToggleBookmark,
    ToggleLike,
}

impl Component for BlogPostPage {
    type Message = Msg;
    type Properties = BlogPostProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let scroll = ScrollListener::new(move || link.send_message(Msg::Scrolled));
        if scroll.is_none() {
            gloo_console::warn!("reading progress unavailable: no window to listen on");
        }

        Self {
            posts: blog::post_details(),
            progress: 0.0,
            share_open: false,
            bookmarked: false,
            liked: false,
            article_ref: NodeRef::default(),
            _scroll: scroll,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().slug == old_props.slug {
            return false;
        }
        self.progress = 0.0;
        self.share_open = false;
        self.bookmarked = false;
        self.liked = false;
        browser::scroll_to_top();
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scrolled => {
                let Some(article) = self.article_ref.cast::<HtmlElement>() else {
                    return false;
                };
                let progress = reading_progress(
                    browser::scroll_y(),
                    f64::from(article.offset_top()),
                    f64::from(article.scroll_height()),
                    browser::viewport_height(),
                );
                if (progress - self.progress).abs() < f64::EPSILON {
                    return false;
                }
                self.progress = progress;
            }
            Msg::ToggleShare => self.share_open = !self.share_open,
            Msg::ToggleBookmark => self.bookmarked = !self.bookmarked,
            Msg::ToggleLike => self.liked = !self.liked,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match lookup(&self.posts, &ctx.props().slug) {
            BlogLookup::Found {
                post,
                previous,
                next,
            } => view::view(self, ctx, post, previous, next),
            BlogLookup::Redirect => Html::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if lookup(&self.posts, &ctx.props().slug) != BlogLookup::Redirect {
            return;
        }
        match ctx.link().navigator() {
            Some(navigator) => navigator.replace(&Route::Blog),
            None => gloo_console::error!("no router available to leave unknown article"),
        }
    }
}
