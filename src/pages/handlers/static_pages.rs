//! Guarded pages without backend data: home and the listing placeholders.
use axum::response::Html;

use crate::extractors::SessionCtxExtractor;
use crate::pages::views::{layout, pages};

pub async fn home(SessionCtxExtractor(session): SessionCtxExtractor) -> Html<String> {
    layout::page("Home", Some(&session), &pages::home_content())
}

pub async fn movies(SessionCtxExtractor(session): SessionCtxExtractor) -> Html<String> {
    layout::page("Movies", Some(&session), &pages::placeholder_content("Movies page"))
}

pub async fn users(SessionCtxExtractor(session): SessionCtxExtractor) -> Html<String> {
    layout::page("Users", Some(&session), &pages::placeholder_content("Users page"))
}

/// Not part of the navigation bar, so rendered without it.
pub async fn ratings(SessionCtxExtractor(_session): SessionCtxExtractor) -> Html<String> {
    layout::page("My Ratings", None, &pages::placeholder_content("My Ratings page"))
}
