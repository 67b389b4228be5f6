//! # Fetch chain driver
//!
//! [`run`] walks the users → posts → comments chain from any [`Step`]:
//! fetch through the gateway, log a failure, hand the result to the matching
//! [`ViewState`] transition, and continue with whatever step it returns.
//!
//! The state is reached through [`StateCell`] so the same driver runs on a
//! Dioxus signal in the app and on a plain `RefCell` in tests. The cell is
//! only borrowed inside `update`, never across an await, which lets several
//! chains share one state. Chains are never cancelled: when two overlap,
//! each result is applied as it lands.

use std::cell::RefCell;
use std::rc::Rc;

use crate::gateway::FeedGateway;
use crate::state::{Step, ViewState};

/// Mutable access to the view state for the duration of a closure.
pub trait StateCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R;
}

impl StateCell for ViewState {
    fn update<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(self)
    }
}

impl StateCell for Rc<RefCell<ViewState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Run a fetch chain to completion starting at `first`.
pub async fn run<G, C>(gateway: &G, cell: &mut C, first: Step)
where
    G: FeedGateway,
    C: StateCell,
{
    let mut next = Some(first);
    while let Some(step) = next {
        tracing::debug!(?step, "fetch step");
        next = match step {
            Step::LoadUsers => {
                let result = gateway.fetch_users().await;
                if let Err(e) = &result {
                    tracing::error!("Failed to fetch users: {e}");
                }
                cell.update(|state| state.apply_users(result))
            }
            Step::LoadPosts(user_id) => {
                let result = gateway.fetch_posts(user_id).await;
                if let Err(e) = &result {
                    tracing::error!("Failed to fetch posts for user {user_id}: {e}");
                }
                cell.update(|state| state.apply_posts(result))
            }
            Step::LoadComments(post_id) => {
                let result = gateway.fetch_comments(post_id).await;
                if let Err(e) = &result {
                    tracing::error!("Failed to fetch comments for post {post_id}: {e}");
                }
                cell.update(|state| state.apply_comments(result))
            }
        };
    }
}
