use dioxus::prelude::*;
use feed::render::FeedView;

use crate::marks::{EngagementBar, VerifiedMarks};

/// The post feed. Every entry carries its post id in `data-post-id` and
/// reports that tag on click. Handlers are rebuilt with the entries.
#[component]
pub fn PostFeed(view: FeedView, badge_url: String, on_select_post: EventHandler<String>) -> Element {
    let body = match view {
        FeedView::Failed(message) => rsx! {
            div { class: "error", "{message}" }
        },
        FeedView::Entries(entries) => rsx! {
            for entry in entries {
                div {
                    key: "{entry.tag}",
                    class: "profile-content",
                    "data-post-id": "{entry.tag}",
                    onclick: {
                        let tag = entry.tag.clone();
                        move |_| on_select_post.call(tag.clone())
                    },
                    img {
                        class: "profile-image",
                        src: "{entry.avatar_url}",
                        alt: "{entry.avatar_alt}",
                    }
                    div {
                        class: "profile-info",
                        h2 {
                            "{entry.author}"
                            VerifiedMarks { badge_url: badge_url.clone() }
                        }
                        p { "{entry.body}" }
                        EngagementBar { engagement: entry.engagement }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "posts-feed",
            {body}
        }
    }
}
