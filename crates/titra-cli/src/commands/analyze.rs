use crate::cli::Cli;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use std::io::{self, BufWriter};
use titra::{
    core::io::report::write_report,
    engine::{config::AnalysisConfigBuilder, progress::ProgressReporter},
    workflows,
};
use tracing::info;

pub fn run(cli: &Cli) -> Result<()> {
    let config = AnalysisConfigBuilder::new()
        .grouping(cli.group_by.into())
        .build()?;

    let progress_handler = CliProgressHandler::new(!(cli.quiet || cli.no_progress));
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Analyzing {} log file(s), grouping by {:?}.",
        cli.files.len(),
        config.grouping
    );
    let result = workflows::titration::run(&cli.files, &config, &reporter);
    progress_handler.finish();
    let points = result?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_report(&points, &mut writer)?;

    info!("Wrote {} titration point(s).", points.len());
    Ok(())
}
