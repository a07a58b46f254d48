pub mod get;
pub mod post;
pub mod fallback;

pub use get::get_handler;
pub use post::post_handler;
pub use fallback::fallback_handler;
