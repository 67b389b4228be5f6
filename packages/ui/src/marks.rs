use dioxus::prelude::*;
use feed::render::Engagement;

use crate::icons::{FaComment, FaHeart, FaRetweet, FaTwitter};
use crate::Icon;

/// Verified badge followed by the bird, shown after every author name.
#[component]
pub fn VerifiedMarks(badge_url: String, #[props(default = 16)] size: u32) -> Element {
    rsx! {
        img {
            class: "verified-icon",
            src: "{badge_url}",
            alt: "verified badge",
            height: "16",
            width: "16",
        }
        span {
            class: "twitter-icon",
            title: "Twitter",
            Icon { icon: FaTwitter, width: size, height: size }
        }
    }
}

/// Reply / repost / like counters.
#[component]
pub fn EngagementBar(engagement: Engagement) -> Element {
    rsx! {
        div {
            class: "footer-icons",
            span {
                Icon { icon: FaComment, width: 14, height: 14 }
                " {engagement.replies}"
            }
            span {
                Icon { icon: FaRetweet, width: 14, height: 14 }
                " {engagement.reposts}"
            }
            span {
                Icon { icon: FaHeart, width: 14, height: 14 }
                " {engagement.likes}"
            }
        }
    }
}
