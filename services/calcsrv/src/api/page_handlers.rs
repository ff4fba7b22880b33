//! Static calculator page

use axum::response::Html;

const CALCULATOR_PAGE: &str = include_str!("../../static/calculator.html");

/// @route GET /
pub async fn index() -> Html<&'static str> {
    Html(CALCULATOR_PAGE)
}
