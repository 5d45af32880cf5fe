//! URL space of the site.

use serde::{Deserialize, Serialize};
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/testimonials")]
    Testimonials,
    #[at("/services")]
    Services,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string of `/contact`. `service` pre-fills the subject line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Header navigation entries, in display order.
pub fn nav_items() -> [NavItem; 6] {
    [
        NavItem { route: Route::About, label: "About", icon: "person" },
        NavItem { route: Route::Projects, label: "Projects", icon: "code" },
        NavItem { route: Route::Blog, label: "Blog", icon: "article" },
        NavItem { route: Route::Contact, label: "Contact", icon: "mail" },
        NavItem { route: Route::Testimonials, label: "Testimonials", icon: "forum" },
        NavItem { route: Route::Services, label: "Services", icon: "work" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_post_slug_is_captured() {
        assert_eq!(
            Route::recognize("/blog/mastering-react-hooks"),
            Some(Route::BlogPost {
                slug: "mastering-react-hooks".to_string()
            })
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/blog/a/b"), Some(Route::NotFound));
    }

    #[test]
    fn paths_round_trip() {
        for item in nav_items() {
            assert_eq!(Route::recognize(&item.route.to_path()), Some(item.route));
        }
        let post = Route::BlogPost {
            slug: "intro-to-typescript".to_string(),
        };
        assert_eq!(post.to_path(), "/blog/intro-to-typescript");
    }
}
