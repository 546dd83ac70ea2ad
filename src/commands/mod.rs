pub mod auth;
pub mod filter;
pub mod list;
pub mod merge;
pub mod pull;

pub use auth::handle_auth;
pub use filter::handle_filter;
pub use list::handle_list;
pub use merge::handle_merge;
pub use pull::handle_pull;
