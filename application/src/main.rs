use std::{
    io,
    process::ExitCode,
    sync::OnceLock,
};

use application::{
    prompt::Terminal, Args, Config, Error, Prompter, Service, Session,
};
use service::infra::FileSystem;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().unwrap_or_else(|e| e.exit());

    let Config {
        report,
        prompt,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let storage = FileSystem::new(report.output_dir.clone());
    log::debug!("saving quotes into `{}`", storage.root().display());
    let config: service::Config = report.try_into().map_err(|e| {
        log::error!("invalid `report` configuration: {e}");
    })?;
    let service = Service::new(config, storage);

    let prompter = Prompter::new(Terminal, prompt.affirmative);
    match Session::new(&service, prompter).run() {
        Ok(Some(path)) => {
            log::info!("session finished, quote saved to `{}`", path.display());
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(Error::InvalidPropertyKind(kind)) => {
            log::debug!("session stopped on property kind `{kind}`");
            Err(())
        }
        Err(e) => {
            log::error!("quote session failed: {e}");
            Err(())
        }
    }
}
