//! Console page stand-in
//!
//! The real console renders role-specific dashboards here; this core only
//! needs a navigable surface for the route gate to protect.

use axum::http::Uri;
use axum::response::Html;

pub async fn page(uri: Uri) -> Html<String> {
    Html(format!("<main data-route=\"{}\"></main>", uri.path()))
}
