//! Article lookup by slug and the small helpers of the article page.

use crate::model::blog::BlogPostDetail;

/// Result of resolving `/blog/{slug}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlogLookup<'a> {
    Found {
        post: &'a BlogPostDetail,
        /// Entry just before `post` in the list, if any.
        previous: Option<&'a BlogPostDetail>,
        /// Entry just after `post` in the list, if any.
        next: Option<&'a BlogPostDetail>,
    },
    /// Unknown slug; the page replaces the URL with the blog index.
    Redirect,
}

pub fn lookup<'a>(posts: &'a [BlogPostDetail], slug: &str) -> BlogLookup<'a> {
    match posts.iter().position(|p| p.slug == slug) {
        Some(index) => BlogLookup::Found {
            post: &posts[index],
            previous: index.checked_sub(1).and_then(|i| posts.get(i)),
            next: posts.get(index + 1),
        },
        None => BlogLookup::Redirect,
    }
}

/// Percentage of the article the reader has scrolled past, in `0..=100`.
///
/// `content_top` is the article's offset from the top of the document and
/// `content_height` its full height. Content shorter than the viewport
/// counts as fully read once its top has been reached.
pub fn reading_progress(
    scroll_y: f64,
    content_top: f64,
    content_height: f64,
    viewport_height: f64,
) -> f64 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return if scroll_y >= content_top { 100.0 } else { 0.0 };
    }
    ((scroll_y - content_top) / scrollable * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub network: &'static str,
    pub icon: &'static str,
    pub url: String,
}

/// Share targets for an article. Both arguments must already be URI
/// component encoded.
pub fn share_links(encoded_url: &str, encoded_title: &str) -> Vec<ShareLink> {
    vec![
        ShareLink {
            network: "Facebook",
            icon: "thumb_up",
            url: format!("https://www.facebook.com/sharer/sharer.php?u={}", encoded_url),
        },
        ShareLink {
            network: "Twitter",
            icon: "alternate_email",
            url: format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                encoded_url, encoded_title
            ),
        },
        ShareLink {
            network: "LinkedIn",
            icon: "work",
            url: format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                encoded_url
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::blog::{post_details, posts};

    #[test]
    fn known_slug_is_found_with_neighbours() {
        let details = post_details();
        match lookup(&details, "mastering-react-hooks") {
            BlogLookup::Found {
                post,
                previous,
                next,
            } => {
                assert_eq!(post.title, "Mastering React Hooks: Tips and Tricks");
                assert_eq!(previous.map(|p| p.slug.as_str()), Some("future-of-web-development"));
                assert_eq!(next.map(|p| p.slug.as_str()), Some("demystifying-css-grid"));
            }
            BlogLookup::Redirect => panic!("expected a post"),
        }
    }

    #[test]
    fn unknown_slug_redirects() {
        let details = post_details();
        assert_eq!(lookup(&details, "does-not-exist"), BlogLookup::Redirect);
        assert_eq!(lookup(&[], "mastering-react-hooks"), BlogLookup::Redirect);
    }

    #[test]
    fn ends_of_the_list_have_one_neighbour() {
        let details = post_details();
        let first = &details[0].slug;
        let last = &details[details.len() - 1].slug;

        assert!(matches!(
            lookup(&details, first),
            BlogLookup::Found { previous: None, next: Some(_), .. }
        ));
        assert!(matches!(
            lookup(&details, last),
            BlogLookup::Found { previous: Some(_), next: None, .. }
        ));
    }

    #[test]
    fn some_index_cards_have_no_article() {
        let details = post_details();
        let unresolved: Vec<String> = posts()
            .into_iter()
            .filter(|p| lookup(&details, &p.slug) == BlogLookup::Redirect)
            .map(|p| p.slug)
            .collect();
        assert!(unresolved.contains(&"demystifying-microservices".to_string()));
        assert!(!unresolved.contains(&"mastering-react-hooks".to_string()));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(reading_progress(0.0, 400.0, 2400.0, 800.0), 0.0);
        assert_eq!(reading_progress(1200.0, 400.0, 2400.0, 800.0), 50.0);
        assert_eq!(reading_progress(9000.0, 400.0, 2400.0, 800.0), 100.0);
    }

    #[test]
    fn short_content_is_all_or_nothing() {
        assert_eq!(reading_progress(100.0, 400.0, 300.0, 800.0), 0.0);
        assert_eq!(reading_progress(400.0, 400.0, 300.0, 800.0), 100.0);
    }

    #[test]
    fn share_links_embed_encoded_values() {
        let links = share_links("https%3A%2F%2Fsite%2Fblog%2Fx", "A%20title");
        assert_eq!(links.len(), 3);
        assert!(links[1].url.ends_with("&text=A%20title"));
        assert!(links.iter().all(|l| l.url.contains("https%3A%2F%2Fsite%2Fblog%2Fx")));
    }
}
