//! Username resolution and provisioning plan construction.

pub mod plan;
pub mod resolver;
pub mod text;

pub use plan::{build_plan, derive_comment, derive_password};
pub use resolver::UsernameRegistry;
pub use text::{fold_identifier, fold_spaces};
