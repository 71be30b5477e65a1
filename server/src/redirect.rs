use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    middleware::Next,
};

/// Strips the `www.` prefix from a request host, if present.
fn canonical_host(host: &str) -> Option<&str> {
    host.strip_prefix("www.")
}

/// Permanently redirects `www.` hosts to the bare origin, keeping the path
/// and query intact.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let bare_host = req
        .headers()
        .get("host")
        .and_then(|value| value.to_str().ok())
        .and_then(canonical_host)
        .map(str::to_owned);

    if let Some(host) = bare_host
        && let Some(path_query) = req.uri().path_and_query()
    {
        let location = format!("https://{host}{path_query}");
        let response = Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header("location", location)
            .body(Body::empty())
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        return Ok(response);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_www_prefix() {
        assert_eq!(canonical_host("www.skylark.dev"), Some("skylark.dev"));
    }

    #[test]
    fn leaves_bare_hosts_alone() {
        assert_eq!(canonical_host("skylark.dev"), None);
        assert_eq!(canonical_host("app.skylark.dev"), None);
    }

    #[test]
    fn only_strips_a_leading_prefix() {
        assert_eq!(canonical_host("docs.www.skylark.dev"), None);
    }
}
