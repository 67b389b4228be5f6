//! # Records decoded from the JSONPlaceholder API
//!
//! Every list endpoint returns a JSON array of flat objects. Each element is
//! decoded into one of the records below and never mutated afterwards; a
//! successful fetch replaces the whole list held by [`crate::ViewState`].
//!
//! | Struct | Endpoint | Foreign key |
//! |--------|----------|-------------|
//! | [`UserRecord`] | `/users` | — |
//! | [`PostRecord`] | `/posts?userId=` | `user_id` → [`UserRecord::id`] |
//! | [`CommentRecord`] | `/comments?postId=` | `post_id` → [`PostRecord::id`] |
//!
//! The API sends camelCase keys and a number of fields the UI never shows
//! (phone, geo, company `bs`, ...). Those are ignored during decoding.

use serde::Deserialize;

pub type UserId = i64;
pub type PostId = i64;
pub type CommentId = i64;

/// A user account as returned by `/users`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    /// Display name: "Leanne Graham"
    pub name: String,
    /// Handle without the leading "@": "Bret"
    pub username: String,
    pub email: String,
    pub website: String,
    pub company: Company,
    pub address: Address,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Shown as the profile bio.
    pub catch_phrase: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Address {
    pub city: String,
    pub street: String,
}

/// A post owned by a user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// A comment left on a post. Commenters are not users, only a name and email.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: CommentId,
    pub post_id: PostId,
    pub name: String,
    pub email: String,
    pub body: String,
}
