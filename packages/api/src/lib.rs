//! # API crate — HTTP Data Gateway for the feed client
//!
//! [`HttpGateway`] implements [`feed::FeedGateway`] over the three read-only
//! JSONPlaceholder endpoints. It is compiled for both the browser (reqwest's
//! `fetch` backend on wasm32) and native targets (tests, tooling).
//!
//! | Call | Request |
//! |------|---------|
//! | `fetch_users` | `GET {base}/users` |
//! | `fetch_posts(user_id)` | `GET {base}/posts?userId={user_id}` |
//! | `fetch_comments(post_id)` | `GET {base}/comments?postId={post_id}` |
//!
//! Every call is a single round trip. Failures are classified into
//! [`FetchError`] variants and returned to the fetch chain, which logs them
//! and shows the region's placeholder. Nothing is retried or cached.

use feed::config::ApiConfig;
use feed::{CommentRecord, FeedGateway, FetchError, PostId, PostRecord, UserId, UserRecord};
use serde::de::DeserializeOwned;

/// Data Gateway backed by `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// GET `url` and decode a JSON array of `T`.
    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, FetchError> {
        tracing::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl FeedGateway for HttpGateway {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        self.get_list(&self.config.users_url()).await
    }

    async fn fetch_posts(&self, user_id: UserId) -> Result<Vec<PostRecord>, FetchError> {
        self.get_list(&self.config.posts_url(user_id)).await
    }

    async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<CommentRecord>, FetchError> {
        self.get_list(&self.config.comments_url(post_id)).await
    }
}
