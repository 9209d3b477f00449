// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::Path;

use anyhow::{bail, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables overriding configuration values.
const ENV_PREFIX: &str = "INVENTORY_FORMS_";

/// Renders `datetime_local` values like an en-US locale does, for example "3/14/2020, 4:05 PM".
const DEFAULT_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M %p";

const DEFAULT_UNSUPPORTED_FIELD_LABEL: &str = "Unsupported field";

/// Configuration object holding all variables influencing how values are rendered and how editing
/// sessions get initialised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Format string (chrono syntax) used to render `datetime_local` property values.
    ///
    /// Values are stored as `YYYY-MM-DDTHH:MM` strings without timezone, as produced by a
    /// "datetime-local" input.
    pub datetime_format: String,

    /// Synthesize a single default row when a property type table is opened for a schema without
    /// any property types, so there is always something to edit.
    pub require_property_type_row: bool,

    /// Label shown in place of a field whose kind is not known to this client.
    pub unsupported_field_label: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            datetime_format: DEFAULT_DATETIME_FORMAT.into(),
            require_property_type_row: true,
            unsupported_field_label: DEFAULT_UNSUPPORTED_FIELD_LABEL.into(),
        }
    }
}

impl Configuration {
    /// Get configuration from 1. defaults, 2. an optional .toml file and 3. environment variables
    /// prefixed with `INVENTORY_FORMS_` (in that order, later sources take precedence).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Configuration::default()));

        if let Some(path) = path {
            if !path.exists() {
                bail!("Config file '{}' does not exist", path.display());
            }

            figment = figment.merge(Toml::file(path));
        }

        let config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use super::Configuration;

    #[test]
    fn defaults_without_file() {
        let config = Configuration::load(None).unwrap();
        assert_eq!(config.datetime_format, "%-m/%-d/%Y, %-I:%M %p");
        assert!(config.require_property_type_row);
    }

    #[test]
    fn overrides_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "datetime_format = \"%Y-%m-%d %H:%M\"\nrequire_property_type_row = false"
        )
        .unwrap();

        let config = Configuration::load(Some(file.path())).unwrap();
        assert_eq!(config.datetime_format, "%Y-%m-%d %H:%M");
        assert!(!config.require_property_type_row);
        assert_eq!(config.unsupported_field_label, "Unsupported field");
    }

    #[test]
    fn missing_file_fails() {
        let result = Configuration::load(Some(Path::new("/does/not/exist/config.toml")));
        assert!(result.is_err());
    }
}
