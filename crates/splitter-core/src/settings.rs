use clap::Parser;
use std::path::PathBuf;

/// Default input file, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "./source_timeline/Timeline.json";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./split_timelines";

/// Default indentation width of the written month files.
pub const DEFAULT_INDENT: u8 = 4;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Split a location-history timeline export into one file per month
#[derive(Parser, Debug, Clone)]
#[command(
    name = "timeline-splitter",
    about = "Split a location-history timeline export into one file per month",
    version
)]
pub struct Settings {
    /// Source timeline JSON file
    #[arg(env = "TIMELINE_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Directory the monthly files are written to
    #[arg(short, long, env = "TIMELINE_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Indentation width of the output files (0-16)
    #[arg(long, default_value_t = DEFAULT_INDENT, value_parser = clap::value_parser!(u8).range(0..=16))]
    pub indent: u8,

    /// Fail the run when any segment lacks a usable startTime
    #[arg(long)]
    pub strict: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── SplitOptions ───────────────────────────────────────────────────────────────

/// Everything the split pipeline needs to know about one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub indent: usize,
    pub strict: bool,
}

impl SplitOptions {
    /// Options with default indentation and permissive mode.
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            indent: usize::from(DEFAULT_INDENT),
            strict: false,
        }
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// The pipeline options described by these settings.
    pub fn to_options(&self) -> SplitOptions {
        SplitOptions {
            source: self.source.clone(),
            output_dir: self.output_dir.clone(),
            indent: usize::from(self.indent),
            strict: self.strict,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
