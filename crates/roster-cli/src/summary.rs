//! Run summary printed to stderr.
//!
//! Stdout belongs to the generated script, so every summary line goes to
//! the error channel.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use crate::logging::redact_secret;
use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    eprintln!("Roster: {}", result.roster_path.display());
    match &result.output {
        Some(path) => eprintln!("Output: {}", path.display()),
        None if result.dry_run => eprintln!("Output: none (dry run)"),
        None => eprintln!("Output: stdout"),
    }
    eprintln!(
        "Records: {} parsed, {} skipped; system state: {} users, {} groups; {} group(s) to create",
        result.records,
        result.skipped_roster.len(),
        result.existing_users,
        result.existing_groups,
        result.plan.new_groups.len()
    );

    if !result.plan.accounts.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Username", "Group", "Password", "Comment"]);
        apply_table_style(&mut table);
        for account in &result.plan.accounts {
            table.add_row(vec![
                account.username.clone(),
                account.group.clone(),
                redact_secret(&account.password).to_string(),
                account.comment.clone(),
            ]);
        }
        eprintln!("{table}");
    }

    if !result.skipped_roster.is_empty() {
        eprintln!("Skipped roster lines:");
        for line in &result.skipped_roster {
            eprintln!("- line {}: \"{}\" ({})", line.line, line.content, line.reason);
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
