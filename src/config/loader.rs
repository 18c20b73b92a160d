//! Parameter file loading.
//!
//! This module provides the [`ParameterLoader`] type for loading salary
//! parameters from a YAML configuration directory.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::SalaryParameters;

/// Loads and provides access to the salary parameters.
///
/// # Directory Structure
///
/// The configuration directory holds a single file:
/// ```text
/// config/payroll/
/// └── parameters.yaml    # Salary parameters (all fields optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ParameterLoader;
///
/// let loader = ParameterLoader::load("./config/payroll").unwrap();
/// println!("Working days: {}", loader.parameters().working_days_per_month);
/// ```
#[derive(Debug, Clone)]
pub struct ParameterLoader {
    parameters: SalaryParameters,
}

impl ParameterLoader {
    /// Loads parameters from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ParameterLoader` on success, or an error if:
    /// - `parameters.yaml` is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or out-of-range values
    ///   (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let parameters_path = path.as_ref().join("parameters.yaml");
        let path_str = parameters_path.display().to_string();

        let content =
            fs::read_to_string(&parameters_path).map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;

        let parameters: SalaryParameters =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        parameters
            .validate()
            .map_err(|error| EngineError::ConfigParseError {
                path: path_str,
                message: error.to_string(),
            })?;

        Ok(Self { parameters })
    }

    /// The loaded salary parameters.
    pub fn parameters(&self) -> &SalaryParameters {
        &self.parameters
    }

    /// Consumes the loader and returns the parameters.
    pub fn into_parameters(self) -> SalaryParameters {
        self.parameters
    }
}
