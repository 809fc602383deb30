//! URL classification and routing.

pub mod dispatcher;
pub mod link;

pub use dispatcher::Dispatcher;
pub use link::{classify, read_link_list, LinkKind, TARGET_DOMAIN};
