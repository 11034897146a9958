use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Structured output formats for records and settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            other => Err(format!("unknown format `{other}`, expected yaml, json or toml")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

pub fn to_string<T: Serialize>(value: &T, format: Format) -> Result<String> {
    match format {
        Format::Yaml => serde_yaml::to_string(value).map_err(Error::serialization),
        Format::Json => serde_json::to_string_pretty(value)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(Error::serialization),
        Format::Toml => toml::to_string_pretty(value).map_err(Error::serialization),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VagrantVars;

    fn sample() -> VagrantVars {
        VagrantVars {
            os: Some("ubuntu1804".into()),
            num_instances: Some(32),
            box_check_update: Some(false),
            ..Default::default()
        }
    }

    #[test]
    fn format_names_parse() {
        assert_eq!("YML".parse::<Format>(), Ok(Format::Yaml));
        assert_eq!("json".parse::<Format>(), Ok(Format::Json));
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn unset_options_are_left_out() {
        let yaml = to_string(&sample(), Format::Yaml).unwrap();
        assert!(yaml.contains("num_instances: 32"));
        assert!(!yaml.contains("vm_cpus"));
    }

    #[test]
    fn every_format_reads_back() {
        let vars = sample();
        let yaml: VagrantVars =
            serde_yaml::from_str(&to_string(&vars, Format::Yaml).unwrap()).unwrap();
        let json: VagrantVars =
            serde_json::from_str(&to_string(&vars, Format::Json).unwrap()).unwrap();
        let toml: VagrantVars = toml::from_str(&to_string(&vars, Format::Toml).unwrap()).unwrap();
        assert_eq!(yaml, vars);
        assert_eq!(json, vars);
        assert_eq!(toml, vars);
    }
}
