//! Quickstart's main application entry point.
//! Parses the command line, validates the project identifiers and
//! generates the project.

use quickstart::{
    cli::{get_args, Args},
    config::ProjectConfig,
    error::{default_error_handler, Result},
    generator::Generator,
    logger::init_logger,
    renderer::PlaceholderRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the identifiers
/// 2. Creates the project directories
/// 3. Renders and writes `pom.xml` and the main class
fn run(args: Args) -> Result<()> {
    let config = ProjectConfig::from_args(&args)?;
    let renderer = PlaceholderRenderer::new();

    let generator = Generator::new(&renderer, &args.output_dir);
    let layout = generator.generate(&config)?;
    log::debug!("Generated project layout: {:?}", layout);

    println!(
        "project '{}' is generated in {}.",
        config.artifact_id,
        args.output_dir.display()
    );
    println!("run command 'mvn package' to generate executable jar archive with dependencies.");
    Ok(())
}
