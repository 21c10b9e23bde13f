//! FER Materials - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use fer_materials::{
    browser::Session,
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_course_stats, print_error, print_global_stats,
        print_info,
    },
    portal,
    sync::{sync_course, GlobalStats},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Browser(_) | Error::DriverStartup(_) | Error::WaitTimeout { .. } => {
                    ExitCode::from(exit_codes::BROWSER_ERROR as u8)
                }
                Error::DownloadTimeout { .. }
                | Error::UnexpectedDownloadCount { .. }
                | Error::Download(_)
                | Error::Http(_)
                | Error::Zip(_) => ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration and merge CLI overrides
    let mut config = Config::discover(&args.config_paths())?;
    args.merge_into_config(&mut config)?;
    validate_config(&config)?;

    print_config_summary(
        &config.fer,
        &config.destination.display().to_string(),
        &config.incomplete_downloads.display().to_string(),
    );

    // HTTP client for direct-link fetches
    let client = reqwest::Client::new();

    // Acquire the browser; release must run on every exit path below.
    print_info("Starting browser session...");
    let session = Session::acquire(&config).await?;

    let result = run_sync(&session, &client, &config).await;
    session.release().await;
    let global = result?;

    print_global_stats(&global);

    if global.courses_failed > 0 {
        return Ok(ExitCode::from(exit_codes::SOME_COURSES_FAILED as u8));
    }

    Ok(ExitCode::from(exit_codes::SUCCESS as u8))
}

/// Log in, enumerate courses, and sync each one in turn.
async fn run_sync(
    session: &Session,
    client: &reqwest::Client,
    config: &Config,
) -> Result<GlobalStats> {
    portal::login(session, config).await?;
    portal::await_intranet(session, config).await?;

    let courses = portal::list_courses(session).await?;
    print_info(&format!("Found {} enrolled course(s)", courses.len()));

    let mut global = GlobalStats::default();

    // A course that fails (settle timeout, unexpected staging state) is
    // reported and counted; the remaining courses still get synced.
    for course in &courses {
        match sync_course(session, client, config, course).await {
            Ok(stats) => {
                print_course_stats(&stats);
                global.add_course_stats(&stats);
            }
            Err(e) => {
                print_error(&format!("Failed to sync {}: {}", course.name, e));
                global.mark_course_failed();
            }
        }
    }

    Ok(global)
}
