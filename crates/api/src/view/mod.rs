//! Server-side HTML rendering.
//!
//! The page shell is served once over HTTP. After that the session pushes
//! the two live regions (`#trending` and `#movies`) as HTML fragments over
//! the WebSocket, and the page script swaps them in.
//!
//! Markup lives in minijinja templates under `templates/`. Their names end
//! in `.html`, so every interpolated value is HTML-escaped.

mod card;

use std::sync::LazyLock;

use cinetrend_core::card::PLACEHOLDER_POSTER;
use cinetrend_core::types::TrendCounter;
use minijinja::{context, Environment, Value};

use crate::session::ScreenState;

pub use card::CardView;

/// WebSocket path the page script connects to.
pub const WS_PATH: &str = "/api/v1/ws";

const TEMPLATES: &[(&str, &str)] = &[
    ("page.html", include_str!("templates/page.html")),
    ("search_box.html", include_str!("templates/search_box.html")),
    ("trending.html", include_str!("templates/trending.html")),
    ("movies.html", include_str!("templates/movies.html")),
    ("card.html", include_str!("templates/card.html")),
    ("spinner.html", include_str!("templates/spinner.html")),
];

const STYLE: &str = include_str!("assets/page.css");
const SCRIPT: &str = include_str!("assets/page.js");

static ENV: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    for &(name, source) in TEMPLATES {
        env.add_template(name, source).expect("valid template");
    }
    env
});

fn cards(screen: &ScreenState) -> Vec<CardView> {
    screen.movies.iter().map(CardView::from).collect()
}

fn render(name: &str, ctx: Value) -> Result<String, minijinja::Error> {
    ENV.get_template(name)?.render(ctx)
}

/// Full page for an initial screen.
pub fn render_page(screen: &ScreenState) -> Result<String, minijinja::Error> {
    render(
        "page.html",
        context! {
            style => STYLE,
            script => SCRIPT,
            ws_path => WS_PATH,
            query => &screen.query,
            status => screen.status,
            error_message => &screen.error_message,
            cards => cards(screen),
            trending => &screen.trending,
            placeholder => PLACEHOLDER_POSTER,
        },
    )
}

/// Trending section, or an empty string when there are no counters.
pub fn render_trending(trending: &[TrendCounter]) -> Result<String, minijinja::Error> {
    render(
        "trending.html",
        context! { trending, placeholder => PLACEHOLDER_POSTER },
    )
}

/// Results section: spinner while loading, the error line, or the cards.
pub fn render_movies(screen: &ScreenState) -> Result<String, minijinja::Error> {
    render(
        "movies.html",
        context! {
            status => screen.status,
            error_message => &screen.error_message,
            cards => cards(screen),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinetrend_core::error::FetchError;
    use cinetrend_core::types::Movie;

    fn counter(term: &str, poster_url: &str) -> TrendCounter {
        TrendCounter {
            id: format!("id-{term}"),
            search_term: term.into(),
            count: 1,
            movie_id: Some(1),
            poster_url: poster_url.into(),
        }
    }

    fn movie() -> Movie {
        Movie {
            id: 7,
            title: "Black Widow".into(),
            poster_path: Some("/bw.jpg".into()),
            vote_average: Some(6.5),
            release_date: Some("2021-07-09".into()),
            original_language: Some("en".into()),
        }
    }

    fn screen_with(movies: Vec<Movie>) -> ScreenState {
        let mut screen = ScreenState::default();
        screen.begin_search("");
        screen.finish_search(Ok(movies));
        screen
    }

    #[test]
    fn all_templates_parse() {
        for (name, _) in TEMPLATES {
            assert!(ENV.get_template(name).is_ok(), "{name} failed to load");
        }
    }

    #[test]
    fn no_trending_section_when_empty() {
        assert_eq!(render_trending(&[]).unwrap(), "");
    }

    #[test]
    fn trending_is_ranked_from_one() {
        let html =
            render_trending(&[counter("dune", "https://img.test/x.jpg"), counter("alien", "")])
                .unwrap();

        assert!(html.contains("<h2>Trending Movies</h2>"));
        assert!(html.contains(r#"<li><p>1</p><img src=""#));
        assert!(html.contains(r#"alt="dune""#));
        assert!(html.contains("x.jpg"));
        assert!(html.contains(r#"<li><p>2</p><img src=""#));
        assert!(html.contains("no-movie.png"));
    }

    #[test]
    fn renders_full_card() {
        let html = render_movies(&screen_with(vec![movie()])).unwrap();

        assert!(html.contains(r#"<li class="movie-card">"#));
        assert!(html.contains("image.tmdb.org"));
        assert!(html.contains("bw.jpg"));
        assert!(html.contains("<h3>Black Widow</h3>"));
        assert!(html.contains("<p>6.5</p>"));
        assert!(html.contains(r#"<p class="lang">en</p>"#));
        assert!(html.contains(r#"<p class="year">2021</p>"#));
    }

    #[test]
    fn card_fields_fall_back() {
        let bare = Movie {
            poster_path: None,
            vote_average: None,
            release_date: None,
            original_language: None,
            ..movie()
        };

        let html = render_movies(&screen_with(vec![bare])).unwrap();

        assert!(html.contains("no-movie.png"));
        assert!(!html.contains("image.tmdb.org"));
        assert!(html.contains("<p>N/A</p>"));
        assert!(html.contains(r#"<p class="year">N/A</p>"#));
    }

    #[test]
    fn catalog_text_is_escaped() {
        let html = render_movies(&screen_with(vec![Movie {
            title: "<script>Tom & Jerry".into(),
            ..movie()
        }]))
        .unwrap();

        assert!(html.contains("<h3>&lt;script&gt;Tom &amp; Jerry</h3>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn loading_shows_spinner_only() {
        let mut screen = screen_with(vec![movie()]);
        screen.begin_search("dune");

        let html = render_movies(&screen).unwrap();

        assert!(html.contains(r#"class="spinner""#));
        assert!(!html.contains("Black Widow"));
    }

    #[test]
    fn error_line_is_escaped() {
        let mut screen = ScreenState::default();
        screen.finish_search(Err(FetchError::Api("<bad key>".into())));

        let html = render_movies(&screen).unwrap();

        assert!(html.contains(r#"<p class="text-red-500">&lt;bad key&gt;</p>"#));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn page_has_search_box_regions_and_socket_path() {
        let html = render_page(&ScreenState::default()).unwrap();

        assert!(html.contains(r#"id="search-input""#));
        assert!(html.contains(r#"<div id="trending">"#));
        assert!(html.contains(r#"<div id="movies">"#));
        assert!(html.contains(&format!("const WS_PATH = \"{WS_PATH}\";")));
        assert!(html.contains("new WebSocket(scheme + location.host + WS_PATH)"));
    }

    #[test]
    fn page_prefills_escaped_query() {
        let mut screen = ScreenState::default();
        screen.begin_search(r#"say "hi""#);

        let html = render_page(&screen).unwrap();

        assert!(html.contains(r#"value="say &quot;hi&quot;""#));
    }

    #[test]
    fn page_script_sends_query_when_socket_opens() {
        let html = render_page(&ScreenState::default()).unwrap();

        assert!(html.contains("socket.onopen = sendQuery;"));
    }
}
