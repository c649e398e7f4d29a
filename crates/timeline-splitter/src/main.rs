mod bootstrap;

use std::process::ExitCode;

use anyhow::Result;
use splitter_core::error::SplitterError;
use splitter_core::settings::Settings;
use splitter_data::split::split_timeline;

fn main() -> ExitCode {
    let settings = Settings::load();

    if let Err(err) = bootstrap::setup_logging(&settings.log_level) {
        eprintln!("Failed to initialise logging: {}", err);
        return ExitCode::from(1);
    }

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            if let Some(SplitterError::NoSegmentsFound { .. }) = err.downcast_ref() {
                tracing::warn!(
                    "Possible reasons: 'semanticSegments' is missing or empty, \
                     or no item had a usable 'startTime'."
                );
            }
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run(settings: &Settings) -> Result<()> {
    tracing::info!("Timeline Splitter v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Source: {}, Output: {}, Strict: {}",
        settings.source.display(),
        settings.output_dir.display(),
        settings.strict
    );

    let report = split_timeline(&settings.to_options())?;
    report.log_summary();

    Ok(())
}

/// Exit code for a failed run: the [`SplitterError`] code when there is one,
/// `1` otherwise.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<SplitterError>()
        .map(SplitterError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_splitter_error() {
        let err = anyhow::Error::new(SplitterError::NoSegmentsFound {
            processed: 0,
            skipped: 2,
        });
        assert_eq!(exit_code_for(&err), 5);
    }

    #[test]
    fn test_exit_code_for_other_error() {
        let err = anyhow::anyhow!("something unrelated");
        assert_eq!(exit_code_for(&err), 1);
    }
}
