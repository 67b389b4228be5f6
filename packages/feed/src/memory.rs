use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::FetchError;
use crate::gateway::FeedGateway;
use crate::models::{CommentRecord, PostId, PostRecord, UserId, UserRecord};
use crate::state::Step;

/// In-memory FeedGateway for testing.
///
/// Posts and comments are filtered by their foreign key the way the real
/// endpoints filter by query parameter. Every call is recorded as the
/// [`Step`] it serves so tests can assert which fetches were issued.
#[derive(Clone, Debug, Default)]
pub struct MemoryGateway {
    inner: Arc<Mutex<Fixtures>>,
}

#[derive(Debug, Default)]
struct Fixtures {
    users: Vec<UserRecord>,
    posts: Vec<PostRecord>,
    comments: Vec<CommentRecord>,
    failures: HashMap<Stage, FetchError>,
    calls: Vec<Step>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Stage {
    Users,
    Posts,
    Comments,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: Vec<UserRecord>) -> Self {
        self.lock().users = users;
        self
    }

    pub fn with_posts(self, posts: Vec<PostRecord>) -> Self {
        self.lock().posts = posts;
        self
    }

    pub fn with_comments(self, comments: Vec<CommentRecord>) -> Self {
        self.lock().comments = comments;
        self
    }

    pub fn fail_users(self, error: FetchError) -> Self {
        self.lock().failures.insert(Stage::Users, error);
        self
    }

    pub fn fail_posts(self, error: FetchError) -> Self {
        self.lock().failures.insert(Stage::Posts, error);
        self
    }

    pub fn fail_comments(self, error: FetchError) -> Self {
        self.lock().failures.insert(Stage::Comments, error);
        self
    }

    /// Every fetch served so far, in call order.
    pub fn calls(&self) -> Vec<Step> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Fixtures> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn serve<T>(
        &self,
        step: Step,
        stage: Stage,
        select: impl FnOnce(&Fixtures) -> Vec<T>,
    ) -> Result<Vec<T>, FetchError> {
        let mut fixtures = self.lock();
        fixtures.calls.push(step);
        match fixtures.failures.get(&stage) {
            Some(error) => Err(error.clone()),
            None => Ok(select(&fixtures)),
        }
    }
}

impl FeedGateway for MemoryGateway {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        self.serve(Step::LoadUsers, Stage::Users, |f| f.users.clone())
    }

    async fn fetch_posts(&self, user_id: UserId) -> Result<Vec<PostRecord>, FetchError> {
        self.serve(Step::LoadPosts(user_id), Stage::Posts, |f| {
            f.posts
                .iter()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect()
        })
    }

    async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<CommentRecord>, FetchError> {
        self.serve(Step::LoadComments(post_id), Stage::Comments, |f| {
            f.comments
                .iter()
                .filter(|c| c.post_id == post_id)
                .cloned()
                .collect()
        })
    }
}
