use clap::ArgMatches;
use colored::*;

use crate::cli_context::{SyncContext, SyncContextBuilder};
use crate::client::IssueStore;
use crate::error::{ErrorContext, SyncResult};
use crate::formatting::{print_plan, print_summary};
use crate::logging::log_info;
use crate::report::read_report;
use crate::sync::{reconcile, SyncOptions, SyncSummary};

pub async fn handle_sync(matches: &ArgMatches) -> SyncResult<()> {
    let mut builder = SyncContextBuilder::new().dry_run(matches.get_flag("dry-run"));
    if let Some(input) = matches.get_one::<String>("input") {
        builder = builder.with_input_path(input);
    }
    if let Some(table) = matches.get_one::<String>("table") {
        builder = builder.with_table(table);
    }

    let mut context = builder.build()?;
    let client = context.client().context("Failed to create store client")?;

    run_sync(&context, client.as_ref()).await.map(|_| ())
}

/// Reads the report and reconciles it against `store`.
pub async fn run_sync<S: IssueStore>(context: &SyncContext, store: &S) -> SyncResult<SyncSummary> {
    let config = context.config();

    log_info(&format!("Reading report from {}", config.input_path.display()));
    let report = read_report(&config.input_path, &config.repository)?;
    log_info(&format!(
        "Found {} issues ({} lines skipped)",
        report.issues.len(),
        report.skipped.len()
    ));

    let options = SyncOptions { dry_run: config.dry_run };
    let (plan, summary) = reconcile(store, config.category(), &report.issues, options).await?;

    if config.dry_run {
        println!("{} {}", "Category:".bold(), config.category().cyan());
        print_plan(&plan);
    }
    print_summary(report.issues.len(), report.skipped.len(), &summary);

    Ok(summary)
}
