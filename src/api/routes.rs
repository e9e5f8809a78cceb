/*
 * Responsibility
 * - /api の URL 構造を定義 (browser から呼ばれる backend proxy)
 * - 認証は backend 側 (Bearer) の責務。ここでは Session Guard を掛けない
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    auth::{logout, refresh_token, signin},
    movies::get_movie,
    ratings::update_rating,
    users::get_user,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signin", post(signin))
        .route("/logout", post(logout))
        .route("/refreshToken", post(refresh_token))
        .route("/user/{username}", get(get_user))
        .route("/movie/{id}", get(get_movie))
        .route("/updateRating", post(update_rating))
}
