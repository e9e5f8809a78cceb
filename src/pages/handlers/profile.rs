//! GET /profile/{username} and POST /profile/{username}/ratings
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tokio::task::JoinSet;

use crate::extractors::{SessionCtx, SessionCtxExtractor, profile_path};
use crate::pages::handlers::error_page;
use crate::pages::views::{
    layout,
    profile::{RatedMovie, profile_content},
};
use crate::services::upstream::ratings::rating_label;
use crate::services::upstream::{Movie, Rating, UpsertRating, UserProfile};
use crate::state::AppState;

pub async fn show_profile(
    State(state): State<AppState>,
    SessionCtxExtractor(session): SessionCtxExtractor,
    Path(username): Path<String>,
) -> Response {
    let token = session.access_token.as_deref();

    let user = match state
        .upstreams
        .users
        .get::<UserProfile>(&username, token)
        .await
    {
        Ok(env) if env.is_ok() => match env.response {
            Some(user) => user,
            None => return error_page(500, Some(&session)),
        },
        Ok(env) => {
            tracing::info!(
                username = %username,
                status = env.status_code,
                error = ?env.error,
                "user lookup failed"
            );
            return error_page(env.status_code, Some(&session));
        }
        Err(err) => {
            tracing::warn!(username = %username, error = %err, "user service unavailable");
            return error_page(500, Some(&session));
        }
    };

    let ratings = match state.upstreams.ratings.by_user(&user.id).await {
        Ok(env) if env.is_ok() => env.response.unwrap_or_default(),
        Ok(env) => {
            // 404 just means "no ratings yet"
            tracing::debug!(user_id = %user.id, status = env.status_code, "no ratings");
            Vec::new()
        }
        Err(err) => {
            tracing::warn!(user_id = %user.id, error = %err, "rating service unavailable");
            Vec::new()
        }
    };

    let rated = join_movies(&state, &session, ratings).await;

    layout::page(&user.name, Some(&session), &profile_content(&user, &rated)).into_response()
}

/// Fetch every rated movie concurrently; ratings whose movie can't be loaded are dropped.
///
/// Order follows the rating service. Dropping the JoinSet (request aborted)
/// aborts the outstanding lookups.
async fn join_movies(
    state: &AppState,
    session: &SessionCtx,
    ratings: Vec<Rating>,
) -> Vec<RatedMovie> {
    let mut set = JoinSet::new();
    for (idx, rating) in ratings.into_iter().enumerate() {
        let movies = state.upstreams.movies.clone();
        let token = session.access_token.clone();
        set.spawn(async move {
            let res = movies.get::<Movie>(&rating.movie_id, token.as_deref()).await;
            (idx, rating, res)
        });
    }

    let mut joined = Vec::new();
    while let Some(next) = set.join_next().await {
        match next {
            Ok((idx, rating, Ok(env))) => match env.ok_response() {
                Some(movie) => joined.push((
                    idx,
                    RatedMovie {
                        movie,
                        value: rating.value,
                    },
                )),
                None => {
                    tracing::debug!(movie_id = %rating.movie_id, "movie not found, rating skipped")
                }
            },
            Ok((_, rating, Err(err))) => {
                tracing::warn!(movie_id = %rating.movie_id, error = %err, "movie lookup failed");
            }
            Err(err) => tracing::error!(error = %err, "movie lookup task failed"),
        }
    }

    joined.sort_by_key(|(idx, _)| *idx);
    joined.into_iter().map(|(_, rated)| rated).collect()
}

#[derive(Debug, Deserialize)]
pub struct RatingForm {
    pub user_id: String,
    pub movie_id: String,
    pub value: f32,
}

pub async fn update_rating(
    State(state): State<AppState>,
    SessionCtxExtractor(session): SessionCtxExtractor,
    Path(username): Path<String>,
    Form(form): Form<RatingForm>,
) -> Response {
    if rating_label(form.value).is_none() {
        return error_page(400, Some(&session));
    }

    let body = UpsertRating {
        user_id: form.user_id,
        movie_id: form.movie_id,
        value: form.value,
    };

    match state
        .upstreams
        .ratings
        .upsert(session.access_token.as_deref(), &body)
        .await
    {
        Ok(env) if env.is_ok() => Redirect::to(&profile_path(&username, &[])).into_response(),
        Ok(env) => {
            tracing::warn!(status = env.status_code, error = ?env.error, "rating upsert rejected");
            error_page(env.status_code, Some(&session))
        }
        Err(err) => {
            tracing::warn!(error = %err, "rating service unavailable");
            error_page(500, Some(&session))
        }
    }
}
