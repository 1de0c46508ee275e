//! Common constants used throughout the quickstart application.

/// Build manifest template, rendered into `<artifact>/pom.xml`.
pub const POM_TEMPLATE: &str = include_str!("../templates/pom.xml");

/// Starter source template, rendered into `<source dir>/<MainClass>.java`.
pub const MAIN_CLASS_TEMPLATE: &str = include_str!("../templates/App.java");

/// Model keys recognised by the bundled templates.
pub const GROUP_ID: &str = "group_id";
pub const ARTIFACT_ID: &str = "artifact_id";
pub const VERSION: &str = "version";
pub const PACKAGE_NAME: &str = "package_name";
pub const MAIN_CLASS: &str = "main_class";

pub const DEFAULT_VERSION: &str = "1.0-SNAPSHOT";
pub const DEFAULT_MAIN_CLASS: &str = "App";

pub const MAX_ARTIFACT_ID_LEN: usize = 20;
pub const MAX_GROUP_ID_LEN: usize = 32;
pub const MAX_MAIN_CLASS_LEN: usize = 15;
pub const MAX_VERSION_LEN: usize = 15;
