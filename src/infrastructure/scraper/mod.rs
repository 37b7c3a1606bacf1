use async_trait::async_trait;
use scraper::{Html, Selector};
use thiserror::Error;
use tracing::debug;

/// Paragraph selectors tried first, in priority order. Covers semantic
/// `<article>` markup plus the class names most blog themes use.
const ARTICLE_SELECTORS: &str = "article p, .post-content p, .entry-content p";

/// Below this many bytes the targeted selectors are assumed to have missed
/// the article body and the whole `<body>` text is used instead.
const MIN_ARTICLE_LENGTH: usize = 200;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch URL: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request failed with status code: {0}")]
    Status(u16),

    #[error("failed to parse HTML: {0}")]
    Parse(String),

    #[error("could not extract meaningful content from the page")]
    EmptyContent,
}

/// Fetches a URL and reduces the page to plain article text.
#[async_trait]
pub trait ArticleScraper: Send + Sync {
    async fn scrape(&self, url: &str) -> Result<String, ScrapeError>;
}

#[derive(Clone)]
pub struct ScraperService {
    client: reqwest::Client,
}

impl Default for ScraperService {
    fn default() -> Self {
        Self::new()
    }
}

impl ScraperService {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch `url` and extract the main text content of the page.
    pub async fn scrape_article(&self, url: &str) -> Result<String, ScrapeError> {
        debug!(url = %url, "fetching article");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(ScrapeError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        extract_article_text(&html)
    }
}

#[async_trait]
impl ArticleScraper for ScraperService {
    async fn scrape(&self, url: &str) -> Result<String, ScrapeError> {
        self.scrape_article(url).await
    }
}

/// Reduce an HTML document to article text.
///
/// Concatenates the text of every paragraph matching `ARTICLE_SELECTORS`,
/// one blank line between paragraphs. When that yields less than
/// `MIN_ARTICLE_LENGTH` bytes the full `<body>` text is taken instead,
/// which recovers something on pages without the expected markup at the
/// cost of pulling in navigation noise.
fn extract_article_text(html: &str) -> Result<String, ScrapeError> {
    let document = Html::parse_document(html);

    let paragraphs =
        Selector::parse(ARTICLE_SELECTORS).map_err(|e| ScrapeError::Parse(e.to_string()))?;

    let mut content = String::new();
    for paragraph in document.select(&paragraphs) {
        for chunk in paragraph.text() {
            content.push_str(chunk);
        }
        content.push_str("\n\n");
    }

    if content.len() < MIN_ARTICLE_LENGTH {
        let body = Selector::parse("body").map_err(|e| ScrapeError::Parse(e.to_string()))?;
        content = document
            .select(&body)
            .next()
            .map(|b| b.text().collect())
            .unwrap_or_default();
    }

    let cleaned = content.trim();
    if cleaned.is_empty() {
        return Err(ScrapeError::EmptyContent);
    }

    Ok(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, response::Html as HtmlResponse, routing::get};

    fn long_paragraph(seed: &str) -> String {
        seed.repeat(10)
    }

    #[test]
    fn extracts_article_paragraphs_separated_by_blank_lines() {
        let first = long_paragraph("First paragraph of the article. ");
        let second = long_paragraph("Second paragraph with more detail. ");
        let third = long_paragraph("Closing thoughts. ");
        let html = format!(
            "<html><body><nav>menu</nav><article><p>{first}</p><p>{second}</p><p>{third}</p></article></body></html>"
        );

        let text = extract_article_text(&html).unwrap();

        assert_eq!(
            text,
            format!("{first}\n\n{second}\n\n{third}").trim_end().to_string()
        );
        assert!(!text.contains("menu"));
    }

    #[test]
    fn falls_back_to_body_text_when_selectors_come_up_short() {
        let filler = long_paragraph("Body text outside any article container. ");
        let html = format!(
            "<html><body><article><p>tiny</p></article><div>{filler}</div></body></html>"
        );

        let text = extract_article_text(&html).unwrap();

        // Fallback takes the whole body, navigation noise included.
        assert!(text.contains("tiny"));
        assert!(text.contains("Body text outside any article container."));
    }

    #[test]
    fn rejects_pages_with_no_extractable_text() {
        let err = extract_article_text("<html><body>   </body></html>").unwrap_err();
        assert!(matches!(err, ScrapeError::EmptyContent));
    }

    #[test]
    fn post_content_class_is_recognized() {
        let para = long_paragraph("Class-marked entry content paragraph. ");
        let html = format!("<html><body><div class=\"post-content\"><p>{para}</p></div></body></html>");

        let text = extract_article_text(&html).unwrap();
        assert_eq!(text, para.trim_end());
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn non_200_response_fails_with_status_code() {
        let base = serve(Router::new()).await;

        let err = ScraperService::new()
            .scrape_article(&format!("{base}/missing"))
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::Status(404)));
    }

    #[tokio::test]
    async fn fetches_and_extracts_a_real_page() {
        let para = long_paragraph("Served over HTTP by the test listener. ");
        let page = format!("<html><body><article><p>{para}</p></article></body></html>");
        let router = Router::new().route("/post", get(move || async move { HtmlResponse(page) }));
        let base = serve(router).await;

        let text = ScraperService::new()
            .scrape_article(&format!("{base}/post"))
            .await
            .unwrap();

        assert_eq!(text, para.trim_end());
    }
}
