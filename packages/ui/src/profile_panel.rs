use dioxus::prelude::*;
use feed::render::ProfileView;

use crate::icons::FaLocationDot;
use crate::Icon;

/// Profile header for the selected user. Empty until the user list loads.
#[component]
pub fn ProfilePanel(view: Option<ProfileView>) -> Element {
    rsx! {
        section {
            class: "profile",
            if let Some(ref p) = view {
                img {
                    class: "profile-image",
                    src: "{p.avatar_url}",
                    alt: "{p.name} profile",
                }
                div {
                    class: "profile-info",
                    h2 { "{p.name}" }
                    p { class: "username", "{p.handle}" }
                    p { class: "bio", "{p.bio}" }
                    div {
                        class: "profile-meta",
                        span {
                            class: "location",
                            Icon { icon: FaLocationDot, width: 14, height: 14 }
                            " {p.location}"
                        }
                        span { class: "website", "{p.website}" }
                    }
                }
            }
        }
    }
}
