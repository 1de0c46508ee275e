//! Command-line interface implementation for quickstart.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::{DEFAULT_MAIN_CLASS, DEFAULT_VERSION};
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for quickstart.
///
/// `-v` carries the project version, so clap's own version flag is disabled.
#[derive(Parser, Debug)]
#[command(
    name = "quickstart",
    author,
    about = "quickstart: generate a maven project skeleton",
    long_about = None,
    disable_version_flag = true
)]
pub struct Args {
    /// Group name of this project
    #[arg(short, long, value_name = "GROUP_ID")]
    pub group_id: String,

    /// Name of this project
    #[arg(short, long, value_name = "ARTIFACT_ID")]
    pub artifact_id: String,

    /// Version of this project
    #[arg(short, long, default_value = DEFAULT_VERSION)]
    pub version: String,

    /// Main class of this project
    #[arg(short, long, default_value = DEFAULT_MAIN_CLASS)]
    pub main_class: String,

    /// Directory in which the project directory is created
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("{}", e.kind());
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
