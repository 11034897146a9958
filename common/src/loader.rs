use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    parser::{parse, Op},
    schema::lookup,
    value::Literal,
    vars::{Resolved, VagrantVars},
};

/// What to do with a `$name` that is not in the schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPolicy {
    /// Fail the load with [`Error::UnknownOption`]
    #[default]
    Reject,
    /// Log a warning and skip the line
    Warn,
}

/// Folds variable files into a [`VagrantVars`] record.
///
/// `=` overwrites whatever an earlier line or layer set, `||=` only fills
/// options that are still unset. Any error aborts the whole load.
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
    unknown: UnknownPolicy,
}

impl Loader {
    pub fn new(unknown: UnknownPolicy) -> Self {
        Self { unknown }
    }

    pub fn load_str(&self, source: &str, text: &str) -> Result<VagrantVars> {
        let state = self.fold_str(Resolved::default(), source, text)?;
        Ok(VagrantVars::from(&state))
    }

    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<VagrantVars> {
        self.load_layers(&[path])
    }

    /// Loads `paths` in order through one shared state, e.g. a base file
    /// followed by overrides.
    pub fn load_layers<P: AsRef<Path>>(&self, paths: &[P]) -> Result<VagrantVars> {
        let mut state = Resolved::default();
        for path in paths {
            state = self.fold_file(state, path.as_ref())?;
        }
        Ok(VagrantVars::from(&state))
    }

    pub fn fold_file(&self, state: Resolved, path: &Path) -> Result<Resolved> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.fold_str(state, &path.display().to_string(), &text)
    }

    /// Applies every statement of `text` on top of `state`.
    pub fn fold_str(&self, mut state: Resolved, source: &str, text: &str) -> Result<Resolved> {
        for stmt in parse(source, text)? {
            let Some(option) = lookup(&stmt.name) else {
                match self.unknown {
                    UnknownPolicy::Reject => {
                        return Err(Error::UnknownOption {
                            at: stmt.at,
                            name: stmt.name,
                        })
                    }
                    UnknownPolicy::Warn => {
                        warn!("{}: ignoring unknown option ${}", stmt.at, stmt.name);
                        continue;
                    }
                }
            };

            let value = match &stmt.value {
                Literal::Nil => None,
                literal => Some(option.kind.coerce(literal).ok_or_else(|| {
                    Error::TypeMismatch {
                        at: stmt.at.clone(),
                        name: stmt.name.clone(),
                        expected: option.kind.describe(),
                        found: literal.describe(),
                    }
                })?),
            };

            match stmt.op {
                Op::Assign => state.assign(option.name, value),
                Op::AssignIfUnset => {
                    if !state.assign_if_unset(option.name, value) {
                        debug!("{}: ${} already set, keeping it", stmt.at, option.name);
                    }
                }
            }
        }

        debug!(source, options = state.iter().count(), "variables resolved");
        Ok(state)
    }
}
