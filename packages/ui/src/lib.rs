//! This crate contains all shared UI for the feed client.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaTwitter;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const FEED_CSS: Asset = asset!("/assets/styling/feed.css");

mod marks;
pub use marks::{EngagementBar, VerifiedMarks};

mod user_picker;
pub use user_picker::UserPicker;

mod profile_panel;
pub use profile_panel::ProfilePanel;

mod post_feed;
pub use post_feed::PostFeed;

mod comment_list;
pub use comment_list::CommentList;

mod feed_page;
pub use feed_page::FeedPage;
