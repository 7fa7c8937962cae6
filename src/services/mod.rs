pub mod fanout;
pub mod follow;
pub mod stories;

pub use fanout::{FanoutService, MirrorField};
pub use follow::{FollowCounts, FollowService};
pub use stories::StoriesService;
