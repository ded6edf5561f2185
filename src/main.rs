//! glab-ctx - Main entry point

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, error};

use glab_ctx::config::defaults;
use glab_ctx::{run_switch, Cli, ConfigPaths, CtxError, SwitchOutcome};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            init_logging(defaults::LOG_LEVEL);
            return fail(CtxError::from(e));
        }
    };

    init_logging(&cli.log_level);
    debug!(
        "CLI args: host={}, context={}, users_file={:?}, glab_config={:?}, dry_run={}",
        cli.host, cli.context, cli.users_file, cli.glab_config, cli.dry_run
    );

    let result = ConfigPaths::resolve(cli.users_file.clone(), cli.glab_config.clone())
        .and_then(|paths| run_switch(&paths, &cli.host, &cli.context, cli.dry_run));

    match result {
        Ok(SwitchOutcome::DryRun(yaml)) => {
            print!("{}", yaml);
            ExitCode::SUCCESS
        }
        Ok(SwitchOutcome::Written { .. }) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn fail(err: CtxError) -> ExitCode {
    error!("{}: {}", err.operation(), err);
    ExitCode::from(err.exit_code())
}
