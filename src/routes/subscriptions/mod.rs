mod get;
mod page;
mod post;

pub use get::*;
pub use page::SubscribePage;
pub use post::*;
