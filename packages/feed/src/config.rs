//! # Client configuration — `feed.toml`
//!
//! The only runtime knobs are where the records come from and where avatar
//! images are served from.
//!
//! ```toml
//! [api]
//! base_url = "https://jsonplaceholder.typicode.com"
//!
//! [media]
//! avatar_base_url = "https://i.pravatar.cc"
//! badge_url = "https://upload.wikimedia.org/..."
//! ```
//!
//! Every field has a default, so an empty file is the stock configuration.
//! [`FeedConfig`] also owns URL construction for the three endpoints and
//! for avatars, keeping string formatting out of the gateway and renderer.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::{PostId, UserId};

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://i.pravatar.cc";
pub const DEFAULT_BADGE_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e4/Twitter_Verified_Badge.svg/1200px-Twitter_Verified_Badge.svg.png";

/// Avatar edge length on the profile panel.
pub const PROFILE_AVATAR_SIZE: u32 = 300;
/// Avatar edge length in the feed and the comment list.
pub const THUMB_AVATAR_SIZE: u32 = 150;

/// Top-level configuration stored in `feed.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

/// Where the REST endpoints live.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

/// Image references used purely for display.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_avatar_base_url")]
    pub avatar_base_url: String,
    #[serde(default = "default_badge_url")]
    pub badge_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_avatar_base_url() -> String {
    DEFAULT_AVATAR_BASE_URL.to_string()
}

fn default_badge_url() -> String {
    DEFAULT_BADGE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            avatar_base_url: default_avatar_base_url(),
            badge_url: default_badge_url(),
        }
    }
}

impl FeedConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "feed.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

impl ApiConfig {
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base())
    }

    pub fn posts_url(&self, user_id: UserId) -> String {
        format!("{}/posts?userId={user_id}", self.base())
    }

    pub fn comments_url(&self, post_id: PostId) -> String {
        format!("{}/comments?postId={post_id}", self.base())
    }
}

impl MediaConfig {
    /// Avatar image for an arbitrary key (user id or commenter email).
    pub fn avatar_url(&self, size: u32, key: impl std::fmt::Display) -> String {
        format!(
            "{}/{size}?u={key}",
            self.avatar_base_url.trim_end_matches('/')
        )
    }
}
