//! # View state — records, selection and the chain transitions
//!
//! [`ViewState`] is the single owner of everything the four regions render:
//! the last fetched users, posts and comments, the selected user and post,
//! and a [`RegionStatus`] per list region. Its fields are private; the only
//! way to change them is through the transitions below, each of which
//! returns the next [`Step`] of the fetch chain (or `None` when the chain
//! stops).
//!
//! | Transition | Trigger | Continues with |
//! |------------|---------|----------------|
//! | [`apply_users`](ViewState::apply_users) | `/users` completed | `LoadPosts(first user)` |
//! | [`apply_posts`](ViewState::apply_posts) | `/posts` completed | `LoadComments(first post)` |
//! | [`apply_comments`](ViewState::apply_comments) | `/comments` completed | — |
//! | [`select_user`](ViewState::select_user) | picker change | `LoadPosts(id)` |
//! | [`select_post`](ViewState::select_post) | feed entry click | `LoadComments(id)` |
//!
//! A failed fetch only flips the affected region to [`RegionStatus::Failed`]
//! and ends the chain; lists and selection are left as they were.
//!
//! Results are applied in completion order regardless of the selection that
//! issued them. Two overlapping chains therefore race and the last one to
//! land wins.

use crate::error::FetchError;
use crate::models::{CommentRecord, PostId, PostRecord, UserId, UserRecord};

/// Selected user before any user list has loaded.
pub const FALLBACK_USER_ID: UserId = 1;

/// One stage of the users → posts → comments chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    LoadUsers,
    LoadPosts(UserId),
    LoadComments(PostId),
}

/// What a list region currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegionStatus {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// The list holds the last successful fetch.
    Ready,
    /// The last fetch failed; show the inline error.
    Failed,
    /// Waiting for the user to pick something (comment region only).
    Prompt,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    users: Vec<UserRecord>,
    posts: Vec<PostRecord>,
    comments: Vec<CommentRecord>,
    selected_user_id: UserId,
    selected_post_id: Option<PostId>,
    users_status: RegionStatus,
    posts_status: RegionStatus,
    comments_status: RegionStatus,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            posts: Vec::new(),
            comments: Vec::new(),
            selected_user_id: FALLBACK_USER_ID,
            selected_post_id: None,
            users_status: RegionStatus::Idle,
            posts_status: RegionStatus::Idle,
            comments_status: RegionStatus::Idle,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    pub fn comments(&self) -> &[CommentRecord] {
        &self.comments
    }

    pub fn selected_user_id(&self) -> UserId {
        self.selected_user_id
    }

    pub fn selected_post_id(&self) -> Option<PostId> {
        self.selected_post_id
    }

    pub fn users_status(&self) -> RegionStatus {
        self.users_status
    }

    pub fn posts_status(&self) -> RegionStatus {
        self.posts_status
    }

    pub fn comments_status(&self) -> RegionStatus {
        self.comments_status
    }

    /// The selected user, if the user list contains it.
    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.find_user(self.selected_user_id)
    }

    /// Resolve a user by id. Posts may reference users that are not loaded.
    pub fn find_user(&self, id: UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Apply a completed `/users` fetch.
    pub fn apply_users(&mut self, result: Result<Vec<UserRecord>, FetchError>) -> Option<Step> {
        let users = match result {
            Ok(users) => users,
            Err(_) => {
                self.users_status = RegionStatus::Failed;
                return None;
            }
        };
        self.users = users;
        self.users_status = RegionStatus::Ready;

        let first = self.users.first()?.id;
        self.selected_user_id = first;
        Some(Step::LoadPosts(first))
    }

    /// Apply a completed `/posts` fetch. An empty feed clears the post
    /// selection and issues no comment fetch.
    pub fn apply_posts(&mut self, result: Result<Vec<PostRecord>, FetchError>) -> Option<Step> {
        let posts = match result {
            Ok(posts) => posts,
            Err(_) => {
                self.posts_status = RegionStatus::Failed;
                return None;
            }
        };
        self.posts = posts;
        self.posts_status = RegionStatus::Ready;
        self.selected_post_id = self.posts.first().map(|p| p.id);
        self.selected_post_id.map(Step::LoadComments)
    }

    /// Apply a completed `/comments` fetch. Ends the chain.
    pub fn apply_comments(&mut self, result: Result<Vec<CommentRecord>, FetchError>) -> Option<Step> {
        match result {
            Ok(comments) => {
                self.comments = comments;
                self.comments_status = RegionStatus::Ready;
            }
            Err(_) => self.comments_status = RegionStatus::Failed,
        }
        None
    }

    /// User picker changed. Ids outside the loaded list are ignored.
    pub fn select_user(&mut self, id: UserId) -> Option<Step> {
        self.find_user(id)?;
        self.selected_user_id = id;
        self.comments.clear();
        self.comments_status = RegionStatus::Prompt;
        Some(Step::LoadPosts(id))
    }

    /// Feed entry clicked. Ids outside the current feed are ignored.
    pub fn select_post(&mut self, id: PostId) -> Option<Step> {
        if !self.posts.iter().any(|p| p.id == id) {
            return None;
        }
        self.selected_post_id = Some(id);
        Some(Step::LoadComments(id))
    }

    /// [`select_user`](Self::select_user) from the picker's raw option value.
    pub fn select_user_value(&mut self, value: &str) -> Option<Step> {
        let id = self.resolve_user_value(value)?;
        self.select_user(id)
    }

    /// [`select_post`](Self::select_post) from a feed entry's `data-post-id` tag.
    pub fn select_post_tag(&mut self, tag: &str) -> Option<Step> {
        let id = self.resolve_post_tag(tag)?;
        self.select_post(id)
    }

    /// The loaded user a picker value names, without touching the state.
    pub fn resolve_user_value(&self, value: &str) -> Option<UserId> {
        let id = parse_id(value)?;
        self.find_user(id).map(|u| u.id)
    }

    /// The current post a feed entry tag names, without touching the state.
    pub fn resolve_post_tag(&self, tag: &str) -> Option<PostId> {
        let id = parse_id(tag)?;
        self.posts.iter().find(|p| p.id == id).map(|p| p.id)
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}


#[cfg(test)]
mod tests {
    use super::test_fixtures::{comment, post, user};
    use super::*;

    fn loaded() -> ViewState {
        let mut state = ViewState::new();
        state.apply_users(Ok(vec![user(1), user(2)]));
        state.apply_posts(Ok(vec![post(10, 1), post(11, 1)]));
        state.apply_comments(Ok(vec![comment(100, 10)]));
        state
    }

    #[test]
    fn test_defaults_before_any_fetch() {
        let state = ViewState::new();
        assert_eq!(state.selected_user_id(), FALLBACK_USER_ID);
        assert_eq!(state.selected_post_id(), None);
        assert!(state.selected_user().is_none());
        assert_eq!(state.comments_status(), RegionStatus::Idle);
    }

    #[test]
    fn test_users_select_first() {
        let mut state = ViewState::new();
        let next = state.apply_users(Ok(vec![user(5), user(2)]));
        assert_eq!(next, Some(Step::LoadPosts(5)));
        assert_eq!(state.selected_user_id(), 5);
        assert_eq!(state.selected_user().map(|u| u.id), Some(5));
        assert_eq!(state.users_status(), RegionStatus::Ready);
    }

    #[test]
    fn test_empty_users_stop_chain() {
        let mut state = ViewState::new();
        assert_eq!(state.apply_users(Ok(vec![])), None);
        assert_eq!(state.selected_user_id(), FALLBACK_USER_ID);
        assert_eq!(state.users_status(), RegionStatus::Ready);
    }

    #[test]
    fn test_users_failure_keeps_selection() {
        let mut state = loaded();
        let before = state.selected_user_id();
        let next = state.apply_users(Err(FetchError::Request("offline".into())));
        assert_eq!(next, None);
        assert_eq!(state.users_status(), RegionStatus::Failed);
        assert_eq!(state.selected_user_id(), before);
        assert_eq!(state.users().len(), 2);
    }

    #[test]
    fn test_posts_select_first_and_continue() {
        let mut state = ViewState::new();
        state.apply_users(Ok(vec![user(1)]));
        let next = state.apply_posts(Ok(vec![post(3, 1), post(4, 1)]));
        assert_eq!(next, Some(Step::LoadComments(3)));
        assert_eq!(state.selected_post_id(), Some(3));
    }

    #[test]
    fn test_empty_posts_clear_selection() {
        let mut state = loaded();
        assert_eq!(state.apply_posts(Ok(vec![])), None);
        assert_eq!(state.selected_post_id(), None);
        assert!(state.posts().is_empty());
        assert_eq!(state.posts_status(), RegionStatus::Ready);
    }

    #[test]
    fn test_posts_failure_halts_chain() {
        let mut state = loaded();
        let next = state.apply_posts(Err(FetchError::Status(500)));
        assert_eq!(next, None);
        assert_eq!(state.posts_status(), RegionStatus::Failed);
        assert_eq!(state.selected_post_id(), Some(10));
    }

    #[test]
    fn test_comments_replace_wholesale() {
        let mut state = loaded();
        state.apply_comments(Ok(vec![comment(200, 11), comment(201, 11)]));
        assert_eq!(
            state.comments().iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![200, 201]
        );
    }

    #[test]
    fn test_comments_failure_keeps_selection() {
        let mut state = loaded();
        let before = (state.selected_user_id(), state.selected_post_id());
        assert_eq!(
            state.apply_comments(Err(FetchError::Decode("html".into()))),
            None
        );
        assert_eq!(state.comments_status(), RegionStatus::Failed);
        assert_eq!((state.selected_user_id(), state.selected_post_id()), before);
    }

    #[test]
    fn test_select_known_user() {
        let mut state = loaded();
        assert_eq!(state.select_user(2), Some(Step::LoadPosts(2)));
        assert_eq!(state.selected_user_id(), 2);
        assert!(state.comments().is_empty());
        assert_eq!(state.comments_status(), RegionStatus::Prompt);
    }

    #[test]
    fn test_select_unknown_user_is_noop() {
        let mut state = loaded();
        let before = state.clone();
        assert_eq!(state.select_user(9), None);
        assert_eq!(state.select_user_value("not-a-number"), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_user_value_parses() {
        let mut state = loaded();
        assert_eq!(state.select_user_value(" 2 "), Some(Step::LoadPosts(2)));
    }

    #[test]
    fn test_resolve_does_not_select() {
        let state = loaded();
        assert_eq!(state.resolve_user_value("2"), Some(2));
        assert_eq!(state.resolve_user_value("9"), None);
        assert_eq!(state.resolve_user_value("x"), None);
        assert_eq!(state.resolve_post_tag(" 11"), Some(11));
        assert_eq!(state.resolve_post_tag("20"), None);
        assert_eq!(state.selected_user_id(), 1);
        assert_eq!(state.selected_post_id(), Some(10));
    }

    #[test]
    fn test_select_post() {
        let mut state = loaded();
        assert_eq!(state.select_post_tag("11"), Some(Step::LoadComments(11)));
        assert_eq!(state.selected_post_id(), Some(11));
    }

    #[test]
    fn test_select_post_outside_feed_is_noop() {
        let mut state = loaded();
        let before = state.clone();
        assert_eq!(state.select_post(99), None);
        assert_eq!(state.select_post_tag(""), None);
        assert_eq!(state.select_post_tag("abc"), None);
        assert_eq!(state, before);
    }
}
