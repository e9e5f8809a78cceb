pub mod auth;
pub mod client;
pub mod factory;
pub mod movies;
pub mod ratings;
pub mod users;

pub use auth::{AuthClient, Credentials, LoginFlow};
pub use client::{Envelope, ServiceClient, UpstreamError};
pub use factory::{Upstreams, build_upstreams};
pub use movies::{Movie, MovieClient};
pub use ratings::{Rating, RatingClient, UpsertRating};
pub use users::{UserClient, UserProfile};
