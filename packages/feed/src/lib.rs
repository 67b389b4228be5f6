pub mod config;
pub mod error;
pub mod flow;
pub mod gateway;
pub mod models;
pub mod render;
pub mod state;

mod memory;
pub use memory::MemoryGateway;

pub use config::FeedConfig;
pub use error::{ConfigError, FetchError, SetupError};
pub use flow::{run, StateCell};
pub use gateway::FeedGateway;
pub use models::{CommentId, CommentRecord, PostId, PostRecord, UserId, UserRecord};
pub use state::{RegionStatus, Step, ViewState, FALLBACK_USER_ID};
