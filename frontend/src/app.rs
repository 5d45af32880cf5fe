use common::model::theme::Theme;
use common::theme::{StoredTheme, ThemeStore};
use yew::{html, Component, Context, Html};
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::about::About;
use crate::pages::blog::Blog;
use crate::pages::blog_post::BlogPostPage;
use crate::pages::contact::Contact;
use crate::pages::not_found::NotFound;
use crate::pages::projects::Projects;
use crate::pages::services::Services;
use crate::pages::testimonials::Testimonials;
use crate::route::Route;
use crate::theme::{BodyThemeSurface, LocalThemeStorage, SiteThemeStore};

/// Root component. Owns the theme store and hands the current theme and a
/// change callback down to the header.
pub struct App {
    theme: SiteThemeStore,
}

pub enum Msg {
    SetTheme(Theme),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let theme = ThemeStore::load(LocalThemeStorage, BodyThemeSurface);
        if let StoredTheme::Ignored(raw) = theme.stored() {
            gloo_console::warn!(format!("ignoring unknown stored theme `{}`", raw));
        }
        Self { theme }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTheme(theme) => self.theme.set(theme),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <div class="app-shell">
                    <Header
                        theme={self.theme.theme()}
                        on_theme_change={ctx.link().callback(Msg::SetTheme)}
                    />
                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </BrowserRouter>
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::About => html! { <About /> },
        Route::Projects => html! { <Projects /> },
        Route::Contact => html! { <Contact /> },
        Route::Blog => html! { <Blog /> },
        Route::BlogPost { slug } => html! { <BlogPostPage {slug} /> },
        Route::Testimonials => html! { <Testimonials /> },
        Route::Services => html! { <Services /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
