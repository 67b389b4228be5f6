//! # Data Gateway — the three read-only endpoints
//!
//! [`FeedGateway`] is the seam between the fetch chain and the network. Each
//! method performs one round trip and decodes a JSON array into records.
//! Implementations must not retry, cache or time out on their own: a failure
//! is returned as a [`FetchError`] and the caller decides what to show.
//!
//! Implementations:
//! - `api::HttpGateway` — `reqwest` against the configured base URL.
//! - [`crate::MemoryGateway`] — fixtures in memory, for tests.

use crate::error::FetchError;
use crate::models::{CommentRecord, PostId, PostRecord, UserId, UserRecord};

/// Async source of users, posts and comments.
pub trait FeedGateway {
    fn fetch_users(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<UserRecord>, FetchError>>;
    fn fetch_posts(
        &self,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<Vec<PostRecord>, FetchError>>;
    fn fetch_comments(
        &self,
        post_id: PostId,
    ) -> impl std::future::Future<Output = Result<Vec<CommentRecord>, FetchError>>;
}
