//! Shell script rendering for the provisioning plan.

pub mod script;

pub use script::{PASSWORD_MAX_AGE_DAYS, SHEBANG, write_script};
