//! # Region renderer — view state to view models
//!
//! One pure function per region. Each rebuilds its region from scratch out
//! of a [`ViewState`]; the `ui` crate turns the result into markup.
//!
//! The only impurity is the feed's engagement counters, which are cosmetic
//! placeholders redrawn whenever the feed is rebuilt. They come from a
//! [`CounterSource`] so tests can pin them with [`FixedCounters`].
//!
//! The feed is built from [`FeedInputs`] rather than the whole state: the
//! posts, their status and the users that resolve authors. Selecting a post
//! or receiving comments leaves those inputs equal, so a caller that caches
//! on them keeps the same counters.

use rand::Rng;

use crate::config::{MediaConfig, PROFILE_AVATAR_SIZE, THUMB_AVATAR_SIZE};
use crate::models::{CommentId, PostId, PostRecord, UserRecord};
use crate::state::{RegionStatus, ViewState};

pub const USERS_ERROR: &str = "Error loading users";
pub const POSTS_ERROR: &str = "Failed to load posts";
pub const COMMENTS_ERROR: &str = "Failed to load comments";
pub const COMMENTS_PROMPT: &str = "Select a post to view comments";
pub const UNKNOWN_AUTHOR: &str = "Unknown User";
const UNKNOWN_AUTHOR_ALT: &str = "User";

/// Upper bound (exclusive) of the placeholder counters.
const COUNTER_CEILING: u32 = 100;

/// Supplies the placeholder engagement numbers shown in the feed.
pub trait CounterSource {
    fn next_count(&mut self) -> u32;
}

/// Fresh random numbers in `0..100` on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomCounters;

impl CounterSource for RandomCounters {
    fn next_count(&mut self) -> u32 {
        rand::thread_rng().gen_range(0..COUNTER_CEILING)
    }
}

/// Always the same number.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedCounters(pub u32);

impl CounterSource for FixedCounters {
    fn next_count(&mut self) -> u32 {
        self.0
    }
}

/// Reply / repost / like counters under a feed entry or comment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Engagement {
    pub replies: u32,
    pub reposts: u32,
    pub likes: u32,
}

impl Engagement {
    fn draw(counters: &mut impl CounterSource) -> Self {
        Self {
            replies: counters.next_count(),
            reposts: counters.next_count(),
            likes: counters.next_count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PickerOption {
    /// Option value; the user id, empty for the error option.
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileView {
    pub avatar_url: String,
    pub name: String,
    pub handle: String,
    pub website: String,
    pub bio: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedEntry {
    pub post_id: PostId,
    /// Value of the entry's `data-post-id` attribute, read back on click.
    pub tag: String,
    pub avatar_url: String,
    pub avatar_alt: String,
    pub author: String,
    pub body: String,
    pub engagement: Engagement,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FeedView {
    Entries(Vec<FeedEntry>),
    Failed(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommentEntry {
    pub id: CommentId,
    pub avatar_url: String,
    pub avatar_alt: String,
    pub name: String,
    pub body: String,
    pub engagement: Engagement,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CommentsView {
    Blank,
    Prompt(&'static str),
    Failed(&'static str),
    Thread {
        header: String,
        entries: Vec<CommentEntry>,
    },
}

/// User picker: one option per user, labelled with the handle.
pub fn picker(state: &ViewState) -> Vec<PickerOption> {
    if state.users_status() == RegionStatus::Failed {
        return vec![PickerOption {
            value: String::new(),
            label: USERS_ERROR.to_string(),
            selected: true,
        }];
    }
    state
        .users()
        .iter()
        .map(|user| PickerOption {
            value: user.id.to_string(),
            label: user.username.clone(),
            selected: user.id == state.selected_user_id(),
        })
        .collect()
}

/// Profile panel for the selected user, `None` until one is loaded.
pub fn profile(state: &ViewState, media: &MediaConfig) -> Option<ProfileView> {
    state.selected_user().map(|user| profile_of(user, media))
}

fn profile_of(user: &UserRecord, media: &MediaConfig) -> ProfileView {
    ProfileView {
        avatar_url: media.avatar_url(PROFILE_AVATAR_SIZE, user.id),
        name: user.name.clone(),
        handle: format!("@{}", user.username),
        website: user.website.clone(),
        bio: user.company.catch_phrase.clone(),
        location: user.address.city.clone(),
    }
}

/// The part of the state the feed region depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedInputs {
    posts: Vec<PostRecord>,
    users: Vec<UserRecord>,
    status: RegionStatus,
}

impl FeedInputs {
    pub fn of(state: &ViewState) -> Self {
        Self {
            posts: state.posts().to_vec(),
            users: state.users().to_vec(),
            status: state.posts_status(),
        }
    }
}

/// Post feed. Authors are resolved through the loaded user list; a post whose
/// author is missing gets a placeholder name rather than an error.
pub fn feed(
    inputs: &FeedInputs,
    media: &MediaConfig,
    counters: &mut impl CounterSource,
) -> FeedView {
    if inputs.status == RegionStatus::Failed {
        return FeedView::Failed(POSTS_ERROR);
    }
    let entries = inputs
        .posts
        .iter()
        .map(|post| {
            let author = inputs
                .users
                .iter()
                .find(|u| u.id == post.user_id)
                .map(|u| u.name.as_str());
            FeedEntry {
                post_id: post.id,
                tag: post.id.to_string(),
                avatar_url: media.avatar_url(THUMB_AVATAR_SIZE, post.user_id),
                avatar_alt: format!("{} profile", author.unwrap_or(UNKNOWN_AUTHOR_ALT)),
                author: author.unwrap_or(UNKNOWN_AUTHOR).to_string(),
                body: post.body.clone(),
                engagement: Engagement::draw(&mut *counters),
            }
        })
        .collect();
    FeedView::Entries(entries)
}

/// Comment list for the selected post.
pub fn comments(state: &ViewState, media: &MediaConfig) -> CommentsView {
    match state.comments_status() {
        RegionStatus::Idle => CommentsView::Blank,
        RegionStatus::Prompt => CommentsView::Prompt(COMMENTS_PROMPT),
        RegionStatus::Failed => CommentsView::Failed(COMMENTS_ERROR),
        RegionStatus::Ready => {
            let header = match state.selected_post_id() {
                Some(id) => format!("Post {id} Comments"),
                None => "Comments".to_string(),
            };
            let entries = state
                .comments()
                .iter()
                .map(|comment| CommentEntry {
                    id: comment.id,
                    avatar_url: media.avatar_url(THUMB_AVATAR_SIZE, &comment.email),
                    avatar_alt: format!("{} profile", comment.name),
                    name: comment.name.clone(),
                    body: comment.body.clone(),
                    engagement: Engagement::default(),
                })
                .collect();
            CommentsView::Thread { header, entries }
        }
    }
}
