use dioxus::prelude::*;
use feed::render::CommentsView;

use crate::marks::{EngagementBar, VerifiedMarks};

#[component]
pub fn CommentList(view: CommentsView, badge_url: String) -> Element {
    let body = match view {
        CommentsView::Blank => rsx! {},
        CommentsView::Prompt(text) => rsx! {
            h3 { "{text}" }
        },
        CommentsView::Failed(text) => rsx! {
            div { class: "error", "{text}" }
        },
        CommentsView::Thread { header, entries } => rsx! {
            h3 { "{header}" }
            for comment in entries {
                div {
                    key: "{comment.id}",
                    class: "comment",
                    img {
                        class: "comment-image",
                        src: "{comment.avatar_url}",
                        alt: "{comment.avatar_alt}",
                    }
                    div {
                        class: "comment-info",
                        h4 {
                            "{comment.name}"
                            VerifiedMarks { badge_url: badge_url.clone(), size: 14 }
                        }
                        p { "{comment.body}" }
                        EngagementBar { engagement: comment.engagement }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "comments-section",
            {body}
        }
    }
}
