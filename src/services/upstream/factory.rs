/// Factory: build the backend clients from application `Config`.
use crate::config::Config;
use crate::services::upstream::{
    AuthClient, MovieClient, RatingClient, ServiceClient, UpstreamError, UserClient,
};

/// One client per backend, all sharing the same connection pool.
#[derive(Clone, Debug)]
pub struct Upstreams {
    pub auth: AuthClient,
    pub users: UserClient,
    pub movies: MovieClient,
    pub ratings: RatingClient,
}

pub fn build_upstreams(config: &Config) -> Result<Upstreams, UpstreamError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.upstream_timeout {
        builder = builder.timeout(timeout);
    }
    let http = builder.build()?;

    let client = |url: &url::Url, service: &'static str| {
        ServiceClient::new(http.clone(), url.clone(), service)
    };

    Ok(Upstreams {
        auth: AuthClient::new(client(&config.auth_service_url, "auth")),
        users: UserClient::new(client(&config.user_service_url, "user")),
        movies: MovieClient::new(client(&config.movie_service_url, "movie")),
        ratings: RatingClient::new(client(&config.rating_service_url, "rating")),
    })
}
