use common::content::profile::{BRAND, SOCIAL_LINKS};
use yew::{classes, html, Component, Context, Html};
use yew_router::prelude::*;

use crate::browser::{current_year, scroll_to_top};
use crate::route::Route;

pub struct Footer;

pub enum Msg {
    BackToTop,
}

struct LinkSection {
    title: &'static str,
    links: Vec<(&'static str, Route)>,
}

fn link_sections() -> [LinkSection; 2] {
    [
        LinkSection {
            title: "Navigation",
            links: vec![
                ("About", Route::About),
                ("Projects", Route::Projects),
                ("Services", Route::Services),
                ("Blog", Route::Blog),
                ("Contact", Route::Contact),
            ],
        },
        LinkSection {
            title: "Services",
            links: vec![
                ("Web Development", Route::Services),
                ("UI/UX Design", Route::Services),
                ("Data Analytics", Route::Services),
                ("Mobile Development", Route::Services),
                ("SEO Optimization", Route::Services),
            ],
        },
    ]
}

impl Component for Footer {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::BackToTop => scroll_to_top(),
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <footer class="site-footer">
                <div class="container footer-grid">
                    <div class="footer-about">
                        <Link<Route> to={Route::Home} classes={classes!("brand")}>{ BRAND }</Link<Route>>
                        <p class="muted">
                            {"Creating clean, user-friendly digital experiences using modern technologies. \
                              Focused on building scalable, high-performance solutions to empower businesses."}
                        </p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a href={social.url} target="_blank" rel="noopener noreferrer" aria-label={social.name}>
                                    <i class="material-icons">{ social.icon }</i>
                                </a>
                            }) }
                        </div>
                    </div>

                    { for link_sections().into_iter().map(|section| html! {
                        <div class="footer-section">
                            <h3>{ section.title }</h3>
                            <ul>
                                { for section.links.into_iter().map(|(label, route)| html! {
                                    <li><Link<Route> to={route}>{ label }</Link<Route>></li>
                                }) }
                            </ul>
                        </div>
                    }) }

                    <div class="footer-section">
                        <h3>{"Legal"}</h3>
                        <ul>
                            <li><a href="#">{"Privacy Policy"}</a></li>
                            <li><a href="#">{"Terms of Service"}</a></li>
                        </ul>
                    </div>
                </div>

                <div class="container footer-updates">
                    <div>
                        <h3>{"Stay Updated"}</h3>
                        <p class="muted">{"Subscribe for the latest articles, projects and updates."}</p>
                    </div>
                    <button class="btn outline" onclick={ctx.link().callback(|_| Msg::BackToTop)}>
                        <i class="material-icons">{"arrow_upward"}</i>
                        <span>{"Back to top"}</span>
                    </button>
                </div>

                <div class="footer-bottom">
                    <div class="container">
                        { format!("\u{a9} {} {}. All rights reserved.", current_year(), BRAND) }
                    </div>
                </div>
            </footer>
        }
    }
}
