pub use blog_post::*;
pub use event_item::*;
pub use speaker::*;
pub use sponsor::*;
pub use team_member::*;

mod blog_post;
mod event_item;
mod speaker;
mod sponsor;
mod team_member;
