//! The feed page: owns the view state, starts the fetch chain on mount and
//! turns picker changes and feed clicks into new chains.

use api::HttpGateway;
use dioxus::prelude::*;
use feed::render::{self, FeedInputs, RandomCounters};
use feed::{FeedConfig, StateCell, Step, ViewState};

use crate::{CommentList, PostFeed, ProfilePanel, UserPicker, FEED_CSS};

/// Lets the fetch chain write straight into the page's signal.
struct SignalCell(Signal<ViewState>);

impl StateCell for SignalCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        self.0.with_mut(f)
    }
}

/// Run a chain in the background. Chains are not cancelled when a newer
/// selection arrives.
fn spawn_chain(gateway: HttpGateway, state: Signal<ViewState>, step: Step) {
    spawn(async move {
        feed::run(&gateway, &mut SignalCell(state), step).await;
    });
}

/// Apply a picker value. The signal is only written when the value names a
/// loaded user, so an unknown value leaves subscribers untouched.
fn select_user(state: &mut Signal<ViewState>, value: &str) -> Option<Step> {
    let id = state.peek().resolve_user_value(value)?;
    state.with_mut(|s| s.select_user(id))
}

/// Apply a feed click, same rule as [`select_user`].
fn select_post(state: &mut Signal<ViewState>, tag: &str) -> Option<Step> {
    let id = state.peek().resolve_post_tag(tag)?;
    state.with_mut(|s| s.select_post(id))
}

/// Expects a [`FeedConfig`] in context.
#[component]
pub fn FeedPage() -> Element {
    let config = use_context::<FeedConfig>();
    let gateway = use_hook(|| HttpGateway::new(config.api.clone()));
    let mut state = use_signal(ViewState::new);

    // Initial chain: users → posts → comments
    use_hook({
        let gateway = gateway.clone();
        move || spawn_chain(gateway, state, Step::LoadUsers)
    });

    let on_select_user = {
        let gateway = gateway.clone();
        move |value: String| match select_user(&mut state, &value) {
            Some(step) => spawn_chain(gateway.clone(), state, step),
            None => tracing::debug!("Ignoring selection of unknown user {value:?}"),
        }
    };

    let on_select_post = {
        let gateway = gateway.clone();
        move |tag: String| match select_post(&mut state, &tag) {
            Some(step) => spawn_chain(gateway.clone(), state, step),
            None => tracing::debug!("Ignoring click on unknown post {tag:?}"),
        }
    };

    // Counters are redrawn only when posts, their status or users change.
    let feed_inputs = use_memo(move || FeedInputs::of(&state.read()));
    let posts = use_memo({
        let media = config.media.clone();
        move || render::feed(&feed_inputs.read(), &media, &mut RandomCounters)
    });

    let snapshot = state.read();
    let options = render::picker(&snapshot);
    let profile = render::profile(&snapshot, &config.media);
    let comments = render::comments(&snapshot, &config.media);
    drop(snapshot);

    rsx! {
        document::Stylesheet { href: FEED_CSS }

        div {
            class: "feed-app",
            header {
                class: "feed-header",
                label { r#for: "user-select", "User" }
                UserPicker { options, on_select: on_select_user }
            }
            ProfilePanel { view: profile }
            div {
                class: "feed-columns",
                PostFeed {
                    view: posts(),
                    badge_url: config.media.badge_url.clone(),
                    on_select_post: on_select_post,
                }
                CommentList {
                    view: comments,
                    badge_url: config.media.badge_url.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use dioxus::dioxus_core::NoOpMutations;
    use feed::models::{Address, Company};
    use feed::{PostRecord, UserRecord};

    use super::*;

    fn user(id: i64) -> UserRecord {
        UserRecord {
            id,
            name: format!("User {id}"),
            username: format!("user{id}"),
            email: format!("user{id}@example.test"),
            website: "example.test".into(),
            company: Company {
                catch_phrase: "Catch".into(),
            },
            address: Address {
                city: "Town".into(),
                street: "Main St".into(),
            },
        }
    }

    fn post(id: i64, user_id: i64) -> PostRecord {
        PostRecord {
            id,
            user_id,
            title: format!("title {id}"),
            body: format!("body {id}"),
        }
    }

    fn loaded() -> ViewState {
        let mut state = ViewState::new();
        state.apply_users(Ok(vec![user(1), user(2)]));
        state.apply_posts(Ok(vec![post(10, 1), post(11, 1)]));
        state
    }

    thread_local! {
        static RENDERS: Cell<usize> = const { Cell::new(0) };
        static OUTCOME: Cell<Option<Option<Step>>> = const { Cell::new(None) };
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Action {
        User(&'static str),
        Post(&'static str),
    }

    /// Subscribes to the state, counts its renders and applies one
    /// selection on mount.
    #[component]
    fn Harness(action: Action) -> Element {
        let mut state = use_signal(loaded);
        RENDERS.with(|r| r.set(r.get() + 1));
        let selected = state.read().selected_post_id();

        use_hook(move || {
            let step = match action {
                Action::User(value) => select_user(&mut state, value),
                Action::Post(tag) => select_post(&mut state, tag),
            };
            OUTCOME.with(|o| o.set(Some(step)));
        });

        rsx! { "{selected:?}" }
    }

    /// Mount the harness and flush whatever it scheduled. Returns the render
    /// count and the step the selection produced.
    async fn mount(action: Action) -> (usize, Option<Step>) {
        RENDERS.with(|r| r.set(0));
        OUTCOME.with(|o| o.set(None));

        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { action });
        dom.rebuild_in_place();
        if tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
            .await
            .is_ok()
        {
            dom.render_immediate(&mut NoOpMutations);
        }

        let outcome = OUTCOME.with(|o| o.take()).expect("selection applied on mount");
        (RENDERS.with(|r| r.get()), outcome)
    }

    #[tokio::test]
    async fn test_unknown_user_leaves_state_clean() {
        let (renders, step) = mount(Action::User("9")).await;
        assert_eq!(step, None);
        assert_eq!(renders, 1);
    }

    #[tokio::test]
    async fn test_unparseable_post_tag_leaves_state_clean() {
        let (renders, step) = mount(Action::Post("not-a-post")).await;
        assert_eq!(step, None);
        assert_eq!(renders, 1);
    }

    #[tokio::test]
    async fn test_user_switch_rerenders_and_loads_posts() {
        let (renders, step) = mount(Action::User("2")).await;
        assert_eq!(step, Some(Step::LoadPosts(2)));
        assert_eq!(renders, 2);
    }

    #[tokio::test]
    async fn test_post_click_loads_comments() {
        let (renders, step) = mount(Action::Post("11")).await;
        assert_eq!(step, Some(Step::LoadComments(11)));
        assert_eq!(renders, 2);
    }
}
