//! Profile page: user card + the user's rated movies.
use crate::extractors::profile_path;
use crate::services::upstream::ratings::rating_label;
use crate::services::upstream::{Movie, UserProfile};

use super::escape;

/// One rating joined with its movie.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedMovie {
    pub movie: Movie,
    pub value: f32,
}

/// "Victor's Ratings", "James' Ratings"
pub fn possessive(first_name: &str) -> String {
    if first_name.ends_with('s') {
        format!("{first_name}'")
    } else {
        format!("{first_name}'s")
    }
}

pub fn stars(value: f32) -> String {
    let value = value.clamp(0.0, 5.0);
    let full = value.floor() as usize;
    let half = usize::from(value - value.floor() >= 0.5);
    let empty = 5 - full - half;

    format!("{}{}{}", "★".repeat(full), "½".repeat(half), "☆".repeat(empty))
}

fn rating_options(current: f32) -> String {
    (1..=10)
        .map(|step| {
            let value = step as f32 / 2.0;
            let selected = if (value - current).abs() < f32::EPSILON {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{value}"{selected}>{value} · {}</option>"#,
                rating_label(value).unwrap_or_default()
            )
        })
        .collect()
}

fn movie_card(user: &UserProfile, rated: &RatedMovie) -> String {
    format!(
        r#"<div class="card movie-card">
<img src="{poster}" alt="{title}">
<h3>{title}</h3>
<div class="stars" title="{value}">{stars}</div>
<p class="label">"{label}"</p>
<form method="post" action="{action}">
<input type="hidden" name="user_id" value="{user_id}">
<input type="hidden" name="movie_id" value="{movie_id}">
<select name="value">{options}</select>
<button type="submit">Rate</button>
</form>
</div>"#,
        poster = escape(&rated.movie.poster),
        title = escape(&rated.movie.title),
        value = rated.value,
        stars = stars(rated.value),
        label = escape(rating_label(rated.value).unwrap_or_default()),
        action = escape(&profile_path(&user.username, &["ratings"])),
        user_id = escape(&user.id),
        movie_id = escape(&rated.movie.id),
        options = rating_options(rated.value),
    )
}

pub fn profile_content(user: &UserProfile, ratings: &[RatedMovie]) -> String {
    let cards: String = ratings.iter().map(|r| movie_card(user, r)).collect();
    let cards = if cards.is_empty() {
        r#"<p class="muted">No ratings yet.</p>"#.to_string()
    } else {
        cards
    };

    format!(
        r#"<div class="grid" style="gap:32px;width:100%">
<div class="card" style="width:275px;padding:0">
<div class="banner" style="height:140px"></div>
<div style="padding:16px">
<img src="{picture}" alt="{name}" width="96" height="96" style="border-radius:50%">
<h1>{name}</h1>
<h3 class="muted">@{username}</h3>
</div>
</div>
<div class="card" style="flex-grow:1;min-width:320px">
<h2 style="text-align:center">{heading} Ratings</h2>
<div class="grid">{cards}</div>
</div>
</div>"#,
        picture = escape(&user.picture),
        name = escape(&user.name),
        username = escape(&user.username),
        heading = escape(&possessive(user.first_name())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            id: "u1".into(),
            username: "james".into(),
            name: "James Dean".into(),
            picture: "https://img/james.png".into(),
        }
    }

    fn movie(id: &str, title: &str) -> Movie {
        Movie {
            id: id.into(),
            title: title.into(),
            original_title: title.into(),
            poster: format!("https://img/{id}.jpg"),
            genres: vec![],
        }
    }

    #[test]
    fn possessive_handles_trailing_s() {
        assert_eq!(possessive("James"), "James'");
        assert_eq!(possessive("Victor"), "Victor's");
    }

    #[test]
    fn stars_render_half_steps() {
        assert_eq!(stars(3.5), "★★★½☆");
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(0.5), "½☆☆☆☆");
    }

    #[test]
    fn profile_lists_rated_movies_with_labels() {
        let ratings = vec![RatedMovie {
            movie: movie("m1", "Heat & Dust"),
            value: 4.5,
        }];

        let html = profile_content(&user(), &ratings);

        assert!(html.contains("James&#39; Ratings"));
        assert!(html.contains("Heat &amp; Dust"));
        assert!(html.contains("\"Great\""));
        assert!(html.contains(r#"action="/profile/james/ratings""#));
        assert!(html.contains(r#"<option value="4.5" selected>"#));
    }

    #[test]
    fn empty_ratings_show_hint() {
        assert!(profile_content(&user(), &[]).contains("No ratings yet."));
    }
}
