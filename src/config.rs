//! Project configuration for a generation run.
//! Holds the identifiers supplied on the command line, validates them and
//! derives the substitution model consumed by the templates.

use crate::cli::Args;
use crate::constants::{
    ARTIFACT_ID, GROUP_ID, MAIN_CLASS, MAX_ARTIFACT_ID_LEN, MAX_GROUP_ID_LEN,
    MAX_MAIN_CLASS_LEN, MAX_VERSION_LEN, PACKAGE_NAME, VERSION,
};
use crate::error::{Error, Result};
use crate::template::Model;
use log::{debug, warn};
use regex::Regex;

/// Identifiers of the project to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub main_class: String,
}

/// Full-string regex match. An invalid pattern never matches.
fn is_full_match(value: &str, re: &str) -> bool {
    match Regex::new(&format!("^(?:{})$", re)) {
        Ok(re) => re.is_match(value),
        Err(err) => {
            warn!("Invalid regex '{}': {}", re, err);
            false
        }
    }
}

fn check(value: &str, re: Option<&str>, max_len: usize, message: &str) -> Result<()> {
    let valid = value.chars().count() <= max_len && re.map_or(true, |re| is_full_match(value, re));
    if valid {
        Ok(())
    } else {
        Err(Error::ValidationError(message.to_string()))
    }
}

impl ProjectConfig {
    pub fn new<S: Into<String>>(group_id: S, artifact_id: S, version: S, main_class: S) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            main_class: main_class.into(),
        }
    }

    /// Builds a validated configuration from parsed command line arguments.
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Self::new(
            args.group_id.as_str(),
            args.artifact_id.as_str(),
            args.version.as_str(),
            args.main_class.as_str(),
        );
        config.validate()?;
        Ok(config)
    }

    /// Checks every identifier and reports the first one that is rejected.
    ///
    /// # Errors
    /// * `Error::ValidationError` describing the allowed characters and length
    pub fn validate(&self) -> Result<()> {
        check(
            &self.artifact_id,
            Some("[a-zA-Z0-9\\-]+"),
            MAX_ARTIFACT_ID_LEN,
            "'artifactId' consists of characters from 'a-z A-Z -' and can not be more than 20 characters",
        )?;
        check(
            &self.group_id,
            Some("[a-zA-Z0-9\\.]+"),
            MAX_GROUP_ID_LEN,
            "'groupId' consists of characters from 'a-z A-Z .' and can not be more than 32 characters",
        )?;
        check(
            &self.main_class,
            Some("[A-Z]+[a-zA-Z0-9]*"),
            MAX_MAIN_CLASS_LEN,
            "'mainClass' consists of characters from 'a-z A-Z 0-9', starts with a capital character and can not be more than 15 characters",
        )?;
        check(
            &self.version,
            None,
            MAX_VERSION_LEN,
            "'version' can not be more than 15 characters",
        )?;
        debug!("Project configuration is valid: {:?}", self);
        Ok(())
    }

    /// Java package of the generated sources: group id plus the artifact id
    /// with dashes removed.
    pub fn package_name(&self) -> String {
        format!("{}.{}", self.group_id, self.artifact_id.replace('-', ""))
    }

    /// Substitution model for the bundled templates.
    pub fn to_model(&self) -> Model {
        let mut model = Model::new();
        model.insert(GROUP_ID.to_string(), self.group_id.clone());
        model.insert(ARTIFACT_ID.to_string(), self.artifact_id.clone());
        model.insert(VERSION.to_string(), self.version.clone());
        model.insert(PACKAGE_NAME.to_string(), self.package_name());
        model.insert(MAIN_CLASS.to_string(), self.main_class.clone());
        model
    }
}
