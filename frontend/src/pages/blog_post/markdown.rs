use pulldown_cmark::{html, Options, Parser};

/// Renders an article body to HTML.
///
/// Line endings are normalized first so bodies written on any platform
/// produce the same markup.
pub fn render_markdown(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(normalized.trim_start(), options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_paragraphs() {
        let html = render_markdown("## Why hooks\n\nState without classes.");
        assert!(html.contains("<h2>Why hooks</h2>"));
        assert!(html.contains("<p>State without classes.</p>"));
    }

    #[test]
    fn fenced_code_keeps_language_class() {
        let html = render_markdown("```ts\nconst x: number = 1;\n```\n");
        assert!(html.contains("<code class=\"language-ts\">"));
        assert!(html.contains("const x: number = 1;"));
    }

    #[test]
    fn crlf_bodies_render_like_lf_bodies() {
        assert_eq!(
            render_markdown("- one\r\n- two\r\n"),
            render_markdown("- one\n- two\n")
        );
    }

    #[test]
    fn every_article_renders_a_heading() {
        for post in common::content::blog::post_details() {
            let html = render_markdown(&post.body);
            assert!(html.contains("<h2>"), "{} has no section heading", post.slug);
        }
    }
}
