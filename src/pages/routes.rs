/*
 * Responsibility
 * - ページの URL 構造を定義
 * - Session Guard が必要な範囲 (/, /profile, /movies, /users, /ratings) に middleware::session を適用
 * - /signin, /logout は Guard の外
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware;
use crate::pages::handlers::{
    logout::logout,
    profile::{show_profile, update_rating},
    signin::{show_signin, submit_signin},
    static_pages::{home, movies, ratings, users},
};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let guarded = Router::new()
        .route("/", get(home))
        .route("/profile/{username}", get(show_profile))
        .route("/profile/{username}/ratings", post(update_rating))
        .route("/movies", get(movies))
        .route("/users", get(users))
        .route("/ratings", get(ratings));

    Router::new()
        .route("/signin", get(show_signin).post(submit_signin))
        .route("/logout", get(logout))
        .merge(middleware::session::apply(guarded, state))
}
