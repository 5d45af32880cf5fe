use common::blog::share_links;
use common::model::blog::BlogPostDetail;
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;
use yew_router::prelude::*;

use super::markdown::render_markdown;
use super::{BlogPostPage, Msg};
use crate::browser;
use crate::route::Route;

pub fn view(
    page: &BlogPostPage,
    ctx: &Context<BlogPostPage>,
    post: &BlogPostDetail,
    previous: Option<&BlogPostDetail>,
    next: Option<&BlogPostDetail>,
) -> Html {
    let link = ctx.link();
    let body = AttrValue::from(render_markdown(&post.body));

    html! {
        <article class="container narrow page">
            <div class="reading-progress">
                <div class="progress-bar" style={format!("width: {:.1}%", page.progress)}></div>
            </div>

            <Link<Route> to={Route::Blog} classes={classes!("btn", "ghost", "back-link")}>
                <i class="material-icons small">{"arrow_back"}</i>
                {"Back to all articles"}
            </Link<Route>>

            <img class="article-image" src={post.image.clone()} alt={post.title.clone()} />

            <div class="tags">
                { for post.tags.iter().map(|tag| html! { <span class="tag">{ tag.clone() }</span> }) }
            </div>
            <h1 class="article-title">{ post.title.clone() }</h1>

            <div class="article-meta muted small">
                <span><i class="material-icons small">{"person"}</i>{ post.author.clone() }</span>
                <span><i class="material-icons small">{"calendar_today"}</i>{ post.date.clone() }</span>
                if let Some(read_time) = &post.read_time {
                    <span><i class="material-icons small">{"schedule"}</i>{ read_time.clone() }</span>
                }
                { build_actions(page, post, link) }
            </div>

            <div class="markdown-body" ref={page.article_ref.clone()}>
                { Html::from_html_unchecked(body) }
            </div>

            <div class="card author-card">
                <i class="material-icons large accent">{"person"}</i>
                <div>
                    <h3>{ format!("About {}", post.author) }</h3>
                    <p class="muted small">
                        { format!("{} is a passionate writer and developer who specializes in frontend technologies and UI/UX design.", post.author) }
                    </p>
                </div>
            </div>

            <div class="comments">
                <h3><i class="material-icons accent">{"chat_bubble_outline"}</i>{"Comments"}</h3>
                <div class="card muted centered">{"Comments are currently disabled for this article."}</div>
            </div>

            { build_adjacent(previous, next) }
        </article>
    }
}

fn build_actions(page: &BlogPostPage, post: &BlogPostDetail, link: &Scope<BlogPostPage>) -> Html {
    let links = share_links(
        &browser::encode_component(&browser::page_url()),
        &browser::encode_component(&post.title),
    );

    html! {
        <div class="article-actions">
            <div class="share-menu">
                <button class="btn outline small" onclick={link.callback(|_| Msg::ToggleShare)}>
                    <i class="material-icons small">{"share"}</i>
                    <span class="hide-mobile">{"Share"}</span>
                </button>
                if page.share_open {
                    <div class="dropdown">
                        { for links.into_iter().map(|share| html! {
                            <a
                                class="dropdown-item"
                                href={share.url}
                                target="_blank"
                                rel="noopener noreferrer"
                                onclick={link.callback(|_| Msg::ToggleShare)}
                            >
                                <i class="material-icons small">{ share.icon }</i>
                                { share.network }
                            </a>
                        }) }
                    </div>
                }
            </div>
            <button
                class={classes!("btn", "small", if page.bookmarked { "primary" } else { "outline" })}
                onclick={link.callback(|_| Msg::ToggleBookmark)}
            >
                <i class="material-icons small">{ if page.bookmarked { "bookmark" } else { "bookmark_border" } }</i>
                <span class="hide-mobile">{ if page.bookmarked { "Saved" } else { "Save" } }</span>
            </button>
            <button
                class={classes!("btn", "small", if page.liked { "primary" } else { "outline" })}
                onclick={link.callback(|_| Msg::ToggleLike)}
            >
                <i class="material-icons small">{ if page.liked { "thumb_up" } else { "thumb_up_off_alt" } }</i>
                <span class="hide-mobile">{ if page.liked { "Liked" } else { "Like" } }</span>
            </button>
        </div>
    }
}

fn build_adjacent(previous: Option<&BlogPostDetail>, next: Option<&BlogPostDetail>) -> Html {
    html! {
        <nav class="adjacent">
            <h3 class="section-title left">{"Continue Reading"}</h3>
            <div class="two-columns">
                if let Some(post) = previous {
                    { adjacent_card(post, "Previous Article", "arrow_back") }
                } else {
                    <div></div>
                }
                if let Some(post) = next {
                    { adjacent_card(post, "Next Article", "arrow_forward") }
                }
            </div>
        </nav>
    }
}

fn adjacent_card(post: &BlogPostDetail, label: &'static str, icon: &'static str) -> Html {
    html! {
        <Link<Route> to={Route::BlogPost { slug: post.slug.clone() }} classes={classes!("card", "adjacent-card")}>
            <span class="muted small"><i class="material-icons small">{ icon }</i>{ label }</span>
            <h4>{ post.title.clone() }</h4>
        </Link<Route>>
    }
}
