//! Project generation.
//! Lays out the project directories under the output root and writes the
//! rendered build manifest and starter source file into them.

use crate::config::ProjectConfig;
use crate::constants::{MAIN_CLASS_TEMPLATE, POM_TEMPLATE};
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of everything a generation run creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// `<output>/<artifact>`
    pub project_dir: PathBuf,
    /// `<project>/src/main/java/<package path>`
    pub source_dir: PathBuf,
    /// `<project>/src/main/resources`
    pub resources_dir: PathBuf,
    /// `<project>/pom.xml`
    pub manifest_file: PathBuf,
    /// `<source dir>/<MainClass>.java`
    pub main_class_file: PathBuf,
}

impl ProjectLayout {
    pub fn new<P: AsRef<Path>>(output_root: P, config: &ProjectConfig) -> Self {
        let project_dir = output_root.as_ref().join(&config.artifact_id);
        let package_path: PathBuf = config.package_name().split('.').collect();
        let source_dir = project_dir.join("src").join("main").join("java").join(package_path);
        let resources_dir = project_dir.join("src").join("main").join("resources");
        let manifest_file = project_dir.join("pom.xml");
        let main_class_file = source_dir.join(format!("{}.java", config.main_class));

        Self { project_dir, source_dir, resources_dir, manifest_file, main_class_file }
    }
}

/// Creates `path` and its missing parents.
///
/// # Errors
/// * `Error::PathExistsError` if anything already exists at `path`
/// * `Error::CreateDirectoryError` if the directory cannot be created
pub fn create_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(Error::PathExistsError { path: path.display().to_string() });
    }
    debug!("Creating directory: {}", path.display());
    fs::create_dir_all(path).map_err(|e| Error::CreateDirectoryError {
        path: path.display().to_string(),
        e,
    })
}

fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    debug!("Writing file: {}", dest_path.display());
    fs::write(dest_path, content).map_err(Error::IoError)
}

/// Generates projects from the bundled templates.
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
    output_root: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn new<P: Into<PathBuf>>(renderer: &'a dyn TemplateRenderer, output_root: P) -> Self {
        Self { renderer, output_root: output_root.into() }
    }

    /// Creates the project tree for `config` and writes both rendered files.
    ///
    /// Both directories are created before any file is written, so a clash
    /// with an existing path leaves no generated files behind.
    ///
    /// # Returns
    /// * `Result<ProjectLayout>` - Paths that were created
    pub fn generate(&self, config: &ProjectConfig) -> Result<ProjectLayout> {
        let layout = ProjectLayout::new(&self.output_root, config);
        create_directory(&layout.source_dir)?;
        create_directory(&layout.resources_dir)?;

        let model = config.to_model();

        let manifest = self.renderer.render(POM_TEMPLATE, &model);
        write_file(&manifest, &layout.manifest_file)?;

        let main_class = self.renderer.render(MAIN_CLASS_TEMPLATE, &model);
        write_file(&main_class, &layout.main_class_file)?;

        Ok(layout)
    }
}
