//! Runs guarded divisions through `Optional` using values from the settings.
//!
//! Usage: `optional [settings-file]`. Without an argument `optional.{json,toml,yaml}`
//! is read from the working directory when present; `OPTIONAL_*` environment
//! variables override either.

use std::process::ExitCode;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use optional::Optional;
use optional::division::guarded_div;
use optional::settings::Settings;

fn main() -> ExitCode {
    let path = std::env::args().nth(1);
    let settings = Settings::load(path.as_deref());

    let level = match &settings {
        Ok(settings) => settings.log_level.clone(),
        Err(_) => "info".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error=%e, "could not load settings");
            return ExitCode::FAILURE;
        }
    };
    debug!(?settings, "settings loaded");

    for &divisor in &settings.divisors {
        let result = Optional::holding(settings.dividend).flat_map(|x| guarded_div(x, divisor));
        if result.is_present() {
            info!(dividend=settings.dividend, divisor, %result, "division complete");
        } else {
            warn!(
                dividend=settings.dividend,
                divisor,
                fallback=settings.fallback,
                "division has no value"
            );
        }
        println!("{} / {} = {}", settings.dividend, divisor, result.get_or(settings.fallback));
    }
    ExitCode::SUCCESS
}
