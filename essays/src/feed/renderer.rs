//! Essay card renderer
//!
//! Projects articles into the card markup the portfolio page styles. Pure
//! string building; writing the result into a page is the service's job.

use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::{Config, DEFAULT_DETAIL_PAGE, DEFAULT_EXCERPT_LENGTH};
use crate::domain::entities::Article;

/// Appended to every truncated excerpt
pub const ELLIPSIS: &str = "...";

/// Excerpt used when an article has no content
pub const READ_MORE_PLACEHOLDER: &str = "Read more...";

pub const NO_ESSAYS_MESSAGE: &str = "No essays published yet. Check back soon!";

pub const LOAD_ERROR_MESSAGE: &str = "Unable to load essays. Please try again later.";

/// Knobs for card rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub detail_page: String,
    pub excerpt_length: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            detail_page: DEFAULT_DETAIL_PAGE.to_string(),
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            detail_page: config.detail_page.clone(),
            excerpt_length: config.excerpt_length,
        }
    }
}

/// Render the full container markup for a list of articles.
///
/// Cards keep the input order. An empty list yields the single
/// "no essays" placeholder card, never an empty string.
pub fn render_articles(articles: &[Article], options: &RenderOptions) -> String {
    if articles.is_empty() {
        return render_placeholder();
    }

    articles
        .iter()
        .map(|article| render_card(article, options))
        .collect()
}

/// Static card shown for every failure
pub fn render_error() -> String {
    render_message_card(LOAD_ERROR_MESSAGE, "color: var(--text-secondary);")
}

fn render_placeholder() -> String {
    render_message_card(
        NO_ESSAYS_MESSAGE,
        "color: var(--text-secondary); font-style: italic;",
    )
}

fn render_message_card(message: &str, style: &str) -> String {
    let mut buf = String::new();
    buf.push_str("<div class=\"essay-card animate-on-scroll\">\n");
    buf.push_str("  <div class=\"essay-content\">\n");
    buf.push_str(&format!("    <p style=\"{}\">{}</p>\n", style, message));
    buf.push_str("  </div>\n");
    buf.push_str("</div>\n");
    buf
}

fn render_card(article: &Article, options: &RenderOptions) -> String {
    let href = detail_href(&options.detail_page, &article.slug);
    let excerpt = excerpt(article.content.as_deref(), options.excerpt_length);

    let mut buf = String::new();
    buf.push_str("<div class=\"essay-card animate-on-scroll\">\n");
    buf.push_str("  <div class=\"essay-content\">\n");
    buf.push_str(&format!(
        "    <span class=\"essay-date\">{}</span>\n",
        format_month_year(&article.created_at)
    ));
    buf.push_str("    <h3>\n");
    buf.push_str(&format!(
        "      <a href=\"{}\" style=\"color: var(--text-primary); text-decoration: none;\">\n",
        encode_double_quoted_attribute(&href)
    ));
    buf.push_str(&format!("        {}\n", encode_text(&article.title)));
    buf.push_str("      </a>\n");
    buf.push_str("    </h3>\n");
    buf.push_str(&format!("    <p>{}</p>\n", encode_text(&excerpt)));
    buf.push_str("  </div>\n");
    buf.push_str("</div>\n");
    buf
}

/// Link to the article's detail page, e.g. `writing.html?slug=on-systems`
pub fn detail_href(detail_page: &str, slug: &str) -> String {
    format!("{}?slug={}", detail_page, urlencoding::encode(slug))
}

/// Human-readable month and year, e.g. `March 2024`
pub fn format_month_year(at: &DateTime<Utc>) -> String {
    at.format("%B %Y").to_string()
}

/// Excerpt of an article body.
///
/// Keeps the first `max_chars` characters, trims surrounding whitespace and
/// appends `...`. Cuts mid-word. Missing or empty content yields
/// `Read more...`; whitespace-only content is kept and trims to `...`.
pub fn excerpt(content: Option<&str>, max_chars: usize) -> String {
    match content {
        Some(text) if !text.is_empty() => {
            let prefix: String = text.chars().take(max_chars).collect();
            format!("{}{}", prefix.trim(), ELLIPSIS)
        }
        _ => READ_MORE_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_article, test_article_dated, test_article_without_content};

    fn card_count(markup: &str) -> usize {
        markup.matches("class=\"essay-card animate-on-scroll\"").count()
    }

    // ===== render_articles tests =====

    #[test]
    fn render_articles_empty_shows_placeholder() {
        let result = render_articles(&[], &RenderOptions::default());

        assert_eq!(card_count(&result), 1);
        assert!(result.contains(NO_ESSAYS_MESSAGE));
        assert!(result.contains("font-style: italic"));
    }

    #[test]
    fn render_articles_one_card_per_article_in_order() {
        let articles = vec![
            test_article("third-post", "Third"),
            test_article("second-post", "Second"),
            test_article("first-post", "First"),
        ];

        let result = render_articles(&articles, &RenderOptions::default());

        assert_eq!(card_count(&result), 3);
        assert!(!result.contains(NO_ESSAYS_MESSAGE));
        let third = result.find("Third").unwrap();
        let second = result.find("Second").unwrap();
        let first = result.find("First").unwrap();
        assert!(third < second && second < first);
    }

    #[test]
    fn render_articles_card_contents() {
        let mut article = test_article_dated("on-systems", "On Systems", "2024-03-01");
        article.content = Some("A".repeat(200));

        let result = render_articles(&[article], &RenderOptions::default());

        assert!(result.contains("<span class=\"essay-date\">March 2024</span>"));
        assert!(result.contains("href=\"writing.html?slug=on-systems\""));
        assert!(result.contains("        On Systems\n"));
        assert!(result.contains(&format!("<p>{}...</p>", "A".repeat(150))));
    }

    #[test]
    fn render_articles_is_deterministic() {
        let articles = vec![
            test_article("a", "Alpha"),
            test_article_without_content("b", "Beta"),
        ];
        let options = RenderOptions::default();

        assert_eq!(
            render_articles(&articles, &options),
            render_articles(&articles, &options)
        );
    }

    #[test]
    fn render_articles_escapes_title_and_excerpt() {
        let mut article = test_article("xss", "<script>alert(1)</script>");
        article.content = Some("Tom & Jerry <b>bold</b>".to_string());

        let result = render_articles(&[article], &RenderOptions::default());

        assert!(!result.contains("<script>"));
        assert!(result.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(result.contains("Tom &amp; Jerry &lt;b&gt;bold&lt;/b&gt;..."));
    }

    #[test]
    fn render_articles_encodes_slug() {
        let article = test_article("hello world&more", "Spaces");

        let result = render_articles(&[article], &RenderOptions::default());

        assert!(result.contains("href=\"writing.html?slug=hello%20world%26more\""));
    }

    #[test]
    fn render_articles_respects_options() {
        let mut article = test_article("post", "Post");
        article.content = Some("abcdefghij".to_string());
        let options = RenderOptions {
            detail_page: "post.html".to_string(),
            excerpt_length: 4,
        };

        let result = render_articles(&[article], &options);

        assert!(result.contains("href=\"post.html?slug=post\""));
        assert!(result.contains("<p>abcd...</p>"));
    }

    // ===== render_error tests =====

    #[test]
    fn render_error_is_single_static_card() {
        let result = render_error();

        assert_eq!(card_count(&result), 1);
        assert!(result.contains(LOAD_ERROR_MESSAGE));
        assert_eq!(result, render_error());
    }

    // ===== excerpt tests =====

    #[test]
    fn excerpt_long_content_is_cut_at_limit() {
        let content = "A".repeat(200);
        let result = excerpt(Some(&content), 150);

        assert_eq!(result, format!("{}...", "A".repeat(150)));
        assert!(result.len() < content.len());
    }

    #[test]
    fn excerpt_short_content_still_gets_ellipsis() {
        assert_eq!(excerpt(Some("Short"), 150), "Short...");
    }

    #[test]
    fn excerpt_trims_after_cutting() {
        // 150th character is a space
        let content = format!("{}tail", "word ".repeat(30));
        let result = excerpt(Some(&content), 150);

        assert_eq!(result, format!("{}...", "word ".repeat(30).trim_end()));
        assert_eq!(excerpt(Some("   padded"), 150), "padded...");
    }

    #[test]
    fn excerpt_cuts_mid_word() {
        assert_eq!(excerpt(Some("abcdefgh"), 3), "abc...");
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let content = "é".repeat(200);
        let result = excerpt(Some(&content), 150);

        assert_eq!(result.chars().count(), 153);
        assert!(result.starts_with("ééé"));
    }

    #[test]
    fn excerpt_missing_content_is_placeholder() {
        assert_eq!(excerpt(None, 150), "Read more...");
    }

    #[test]
    fn excerpt_empty_content_is_placeholder() {
        assert_eq!(excerpt(Some(""), 150), "Read more...");
    }

    #[test]
    fn excerpt_whitespace_content_is_bare_ellipsis() {
        assert_eq!(excerpt(Some("   "), 150), "...");
    }

    #[test]
    fn render_articles_empty_content_shows_placeholder() {
        let mut article = test_article("empty", "Empty");
        article.content = Some(String::new());

        let result = render_articles(&[article], &RenderOptions::default());

        assert!(result.contains("<p>Read more...</p>"));
    }

    // ===== formatting tests =====

    #[test]
    fn format_month_year_uses_full_month_name() {
        let at = crate::domain::entities::parse_timestamp("2024-03-01").unwrap();
        assert_eq!(format_month_year(&at), "March 2024");

        let at = crate::domain::entities::parse_timestamp("2023-12-31T23:59:59Z").unwrap();
        assert_eq!(format_month_year(&at), "December 2023");
    }

    #[test]
    fn detail_href_leaves_plain_slugs_alone() {
        assert_eq!(
            detail_href("writing.html", "on-systems"),
            "writing.html?slug=on-systems"
        );
    }
}
