use colored::*;

use crate::sync::{SyncPlan, SyncSummary};
use super::issues::{print_issues, print_links};

pub fn print_plan(plan: &SyncPlan) {
    println!("{}", "Would delete:".bold());
    print_links(&plan.to_delete);
    println!("{}", "Would insert:".bold());
    print_issues(&plan.to_create);
}

pub fn print_summary(parsed: usize, skipped: usize, summary: &SyncSummary) {
    println!("{}", "─".repeat(50).dimmed());
    println!("{:<12} {}", "Parsed".bold(), parsed);
    if skipped > 0 {
        println!("{:<12} {}", "Skipped".bold(), skipped.to_string().yellow());
    }
    println!("{:<12} {}", "Stored".bold(), summary.stored);
    println!("{:<12} {}", "Unchanged".bold(), summary.unchanged);

    if summary.dry_run {
        println!("{}", "Dry run: the store was not modified.".dimmed());
        return;
    }

    if summary.delete_failed {
        println!("{:<12} {}", "Deleted".bold(), "failed (see log)".red());
    } else {
        println!("{:<12} {}", "Deleted".bold(), summary.deleted);
    }
    println!("{:<12} {}", "Inserted".bold(), summary.inserted.to_string().green());

    if summary.delete_failed {
        println!("{} {}", "⚠".yellow(), "Sync finished with errors".yellow().bold());
    } else {
        println!("{} {}", "✅".green(), "Sync complete".green().bold());
    }
}
