//! The HTTP front end: one endpoint that renders a card from query parameters.

use crate::{raster::rasterize, Card, CardError, Font, FontMetrics, ServerConfig};
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Instant;
use tiny_http::{Header, Method, Response, Server};

/// A response, independent of the transport
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    fn png(body: Vec<u8>) -> Reply {
        Reply {
            status: 200,
            content_type: "image/png",
            body,
        }
    }

    fn text(status: u16, body: &str) -> Reply {
        Reply {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.as_bytes().to_vec(),
        }
    }
}

/// The text to put on a card, taken from the query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    pub title: String,
    pub user: String,
}

impl CardQuery {
    /// Decode `title` and `user` from a query string (without the leading `?`).
    /// Missing or empty values fall back to the configured defaults; if a
    /// parameter is repeated, the first one wins. Values longer than
    /// `max_text_chars` characters are cut short; wrapping is quadratic in
    /// the line length.
    pub fn parse(query: &str, config: &ServerConfig) -> CardQuery {
        let mut title: Option<String> = None;
        let mut user: Option<String> = None;
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "title" => &mut title,
                "user" => &mut user,
                _ => continue,
            };
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value.chars().take(config.max_text_chars).collect());
            }
        }

        CardQuery {
            title: title.unwrap_or_else(|| config.default_title.clone()),
            user: user.unwrap_or_else(|| config.default_user.clone()),
        }
    }

    /// The attribution line shown under the title
    pub fn attribution(&self) -> String {
        format!("by {}", self.user)
    }
}

/// Lay out and rasterize a card, returning the PNG bytes
pub fn render_card<M: FontMetrics + ?Sized>(
    card: &Card,
    metrics: &M,
    query: &CardQuery,
) -> Result<Vec<u8>, CardError> {
    let svg = card.to_svg(metrics, &query.title, &query.attribution())?;
    rasterize(&svg)
}

/// Route a request. `url` is the request target, i.e. `/?title=...`
pub fn respond<M: FontMetrics + ?Sized>(
    method: &Method,
    url: &str,
    card: &Card,
    metrics: &M,
    config: &ServerConfig,
) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    if path != "/" {
        return Reply::text(404, "Not Found");
    }
    if !matches!(method, Method::Get | Method::Head) {
        return Reply::text(405, "Method Not Allowed");
    }

    let query = CardQuery::parse(query, config);
    debug!("rendering card {:?} {:?}", query.title, query.user);
    match render_card(card, metrics, &query) {
        Ok(png) => Reply::png(png),
        Err(e) => {
            error!("failed to render card for {:?}: {e}", query.title);
            Reply::text(500, "Internal Server Error")
        }
    }
}

fn log_request(method: &Method, url: &str, reply: &Reply, started: Instant) {
    let elapsed = started.elapsed();
    match reply.status {
        200..=399 => info!(
            "{method} {url} {} ({} bytes) in {elapsed:?}",
            reply.status,
            reply.body.len()
        ),
        400..=499 => warn!("{method} {url} {} in {elapsed:?}", reply.status),
        _ => error!("{method} {url} {} in {elapsed:?}", reply.status),
    }
}

fn worker(server: &Server, card: &Card, font: &Font, config: &ServerConfig) {
    for request in server.incoming_requests() {
        let started = Instant::now();
        let method = request.method().clone();
        let url = request.url().to_string();

        let reply = respond(&method, &url, card, font, config);
        log_request(&method, &url, &reply, started);

        let mut response = Response::from_data(reply.body).with_status_code(reply.status);
        if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes())
        {
            response = response.with_header(header);
        }
        if let Err(e) = request.respond(response) {
            warn!("failed to send response for {url}: {e}");
        }
    }
}

/// Bind the configured address and serve cards until the process exits.
///
/// Requests are handled by a pool of worker threads sharing one read-only
/// [Font]; a slow render only ties up the thread it runs on.
pub fn run(config: ServerConfig, font: Arc<Font>) -> Result<(), CardError> {
    let server = Server::http(config.address()).map_err(std::io::Error::other)?;
    let server = Arc::new(server);
    let card = Arc::new(Card::default());
    let config = Arc::new(config);

    let workers = config.worker_count();
    info!("listening on {} with {workers} workers", config.address());

    let mut handles = Vec::with_capacity(workers);
    for i in 0..workers {
        let server = Arc::clone(&server);
        let card = Arc::clone(&card);
        let font = Arc::clone(&font);
        let config = Arc::clone(&config);
        let handle = std::thread::Builder::new()
            .name(format!("card-worker-{i}"))
            .spawn(move || worker(&server, &card, &font, &config))?;
        handles.push(handle);
    }

    for handle in handles {
        if handle.join().is_err() {
            error!("a worker thread panicked");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::tests::FixedMetrics;

    fn get(url: &str) -> Reply {
        respond(
            &Method::Get,
            url,
            &Card::default(),
            &FixedMetrics::new(600.0),
            &ServerConfig::default(),
        )
    }

    #[test]
    fn missing_parameters_fall_back_to_defaults() {
        let config = ServerConfig::default();
        let query = CardQuery::parse("", &config);
        assert_eq!(query.title, "Hello, こんにちは");
        assert_eq!(query.attribution(), "by 名無しの太郎之介");

        let query = CardQuery::parse("title=&user=", &config);
        assert_eq!(query.title, config.default_title);
        assert_eq!(query.user, config.default_user);
    }

    #[test]
    fn decodes_query_parameters() {
        let query = CardQuery::parse(
            "title=Rust+%E3%81%A7%E3%81%99&user=ferris&title=ignored",
            &ServerConfig::default(),
        );
        assert_eq!(query.title, "Rust です");
        assert_eq!(query.attribution(), "by ferris");
    }

    #[test]
    fn long_values_are_cut_to_the_configured_length() {
        let config = ServerConfig {
            max_text_chars: 4,
            ..ServerConfig::default()
        };
        let query = CardQuery::parse(
            "title=%E3%81%82%E3%81%84%E3%81%86%E3%81%88%E3%81%8A&user=abc",
            &config,
        );
        assert_eq!(query.title, "あいうえ");
        assert_eq!(query.user, "abc");

        let huge = format!("title={}", "x".repeat(1_000_000));
        let query = CardQuery::parse(&huge, &ServerConfig::default());
        assert_eq!(query.title.chars().count(), 256);
    }

    #[test]
    fn oversized_titles_still_render() {
        let url = format!("/?title={}", "long+title+".repeat(100_000));
        let reply = get(&url);
        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, "image/png");
    }

    #[test]
    fn renders_a_png() {
        let reply = get("/?title=Hello%2C+world&user=someone");
        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, "image/png");

        let image =
            image::load_from_memory_with_format(&reply.body, image::ImageFormat::Png).unwrap();
        assert_eq!((image.width(), image.height()), (1200, 630));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(get("/favicon.ico").status, 404);
    }

    /// A broken font with no em square, so every layout fails
    struct NoEmSquare;

    impl FontMetrics for NoEmSquare {
        fn units_per_em(&self) -> u16 {
            0
        }

        fn ascender(&self) -> i16 {
            0
        }

        fn descender(&self) -> i16 {
            0
        }

        fn advance_width(&self, _: &str, _: crate::Px) -> Result<crate::Px, CardError> {
            Ok(crate::Px(0.0))
        }

        fn outline(
            &self,
            _: &str,
            _: (crate::Px, crate::Px),
            _: crate::Px,
        ) -> Result<crate::GlyphPath, CardError> {
            Ok(crate::GlyphPath::new())
        }
    }

    #[test]
    fn layout_failures_are_server_errors() {
        let reply = respond(
            &Method::Get,
            "/?title=hi",
            &Card::default(),
            &NoEmSquare,
            &ServerConfig::default(),
        );
        assert_eq!(reply.status, 500);
        assert_eq!(reply.content_type, "text/plain; charset=utf-8");
    }

    #[test]
    fn only_get_is_allowed() {
        let reply = respond(
            &Method::Post,
            "/",
            &Card::default(),
            &FixedMetrics::new(600.0),
            &ServerConfig::default(),
        );
        assert_eq!(reply.status, 405);
    }
}
