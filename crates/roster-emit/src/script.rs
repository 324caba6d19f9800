//! Shell script rendering.
//!
//! A pure formatting stage: the plan is already resolved, this module only
//! turns it into text. Everything written here is script content; callers
//! keep diagnostics on a separate channel so the sink alone is a directly
//! executable script.

use std::io::{self, Write};

use tracing::debug;

use roster_model::ProvisionPlan;

/// Interpreter line the script opens with.
pub const SHEBANG: &str = "#!/bin/bash";

/// Maximum password age, in days, applied to every created account.
pub const PASSWORD_MAX_AGE_DAYS: u32 = 120;

/// Writes the provisioning script for the plan.
///
/// Layout: shebang, one blank line, one `groupadd` per missing group, then
/// for each account in roster order a creation line, a piped password set,
/// a forced expiry, and the maximum-age setting. Group lines follow the
/// set's iteration order; consumers must not rely on a specific ordering
/// across groups.
pub fn write_script<W: Write>(out: &mut W, plan: &ProvisionPlan) -> io::Result<()> {
    writeln!(out, "{SHEBANG}")?;
    writeln!(out)?;

    for group in &plan.new_groups {
        writeln!(out, "groupadd {group}")?;
    }

    for account in &plan.accounts {
        writeln!(
            out,
            "useradd {} -g {} -c \"{}\"",
            account.username, account.group, account.comment
        )?;
        writeln!(
            out,
            "echo \"{}\" | passwd --stdin {}",
            account.password, account.username
        )?;
        writeln!(out, "passwd -e {}", account.username)?;
        writeln!(out, "passwd -x {PASSWORD_MAX_AGE_DAYS} {}", account.username)?;
    }

    debug!(
        groups = plan.new_groups.len(),
        accounts = plan.accounts.len(),
        "script rendered"
    );
    Ok(())
}
