//! Handlers for the operational endpoints served next to the rendered
//! pages: the crawler-facing sitemap and robots files.

use axum::http::StatusCode;
use axum::response::Response;
use core::fmt::Write as _;
use std::env;
use tracing::error;

/// Origin used for absolute URLs when `SITE_ORIGIN` is not set.
const DEFAULT_SITE_ORIGIN: &str = "https://skylark.dev";

/// Routes advertised to crawlers, with change frequency and priority.
const SITEMAP_ROUTES: [(&str, &str, &str); 4] = [
    ("/", "weekly", "1.0"),
    ("/pricing", "monthly", "0.8"),
    ("/blog", "daily", "0.7"),
    ("/sign-up", "monthly", "0.9"),
];

pub fn site_origin() -> String {
    env::var("SITE_ORIGIN").unwrap_or_else(|_| DEFAULT_SITE_ORIGIN.to_owned())
}

fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

fn render_sitemap(origin: &str) -> Result<String, core::fmt::Error> {
    let mut sitemap = String::new();
    sitemap.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    sitemap.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for (path, freq, priority) in SITEMAP_ROUTES {
        sitemap.push_str("<url>\n");
        writeln!(sitemap, "<loc>{origin}{path}</loc>")?;
        writeln!(sitemap, "<changefreq>{freq}</changefreq>")?;
        writeln!(sitemap, "<priority>{priority}</priority>")?;
        sitemap.push_str("</url>\n");
    }
    sitemap.push_str("</urlset>");
    Ok(sitemap)
}

pub async fn sitemap_handler() -> Response<String> {
    match render_sitemap(&site_origin()) {
        Ok(sitemap) => build_response(sitemap, "application/xml", StatusCode::OK),
        Err(err) => {
            error!(?err, "Failed to build sitemap");
            build_response(
                "Failed to build sitemap".to_owned(),
                "text/plain; charset=utf-8",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

pub async fn robots_handler() -> Response<String> {
    let origin = site_origin();
    let body = format!("User-agent: *\nAllow: /\n\nSitemap: {origin}/sitemap.xml\n");
    build_response(body, "text/plain; charset=utf-8", StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sitemap_lists_every_public_route() {
        let sitemap = render_sitemap("https://skylark.dev").unwrap();

        assert!(sitemap.starts_with("<?xml"));
        assert!(sitemap.ends_with("</urlset>"));
        for (path, _, _) in SITEMAP_ROUTES {
            assert!(
                sitemap.contains(&format!("<loc>https://skylark.dev{path}</loc>")),
                "missing sitemap entry for {path}"
            );
        }
    }

    #[test]
    fn site_origin_falls_back_to_the_default() {
        assert!(site_origin().starts_with("https://"));
    }

    #[test]
    fn test_sitemap_handler_structure() {
        tokio_test::block_on(async {
            let response = sitemap_handler().await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response.headers().get("Content-Type").unwrap(),
                "application/xml"
            );
        });
    }

    #[test]
    fn test_robots_handler_structure() {
        tokio_test::block_on(async {
            let response = robots_handler().await;
            assert_eq!(response.status(), StatusCode::OK);
            assert!(response.body().contains("Sitemap: "));
            assert!(response.body().contains("/sitemap.xml"));
        });
    }

    #[test]
    fn build_response_sets_content_type() {
        let response = build_response("ok".to_owned(), "text/plain; charset=utf-8", StatusCode::OK);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.body(), "ok");
    }
}
