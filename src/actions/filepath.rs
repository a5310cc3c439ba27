//! Resolve filepath arguments to absolute paths

use crate::errors::ActionError;
use clap::builder::TypedValueParser;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Makes paths absolute, optionally requiring them to exist
///
/// Resolution is purely lexical: symlinks are left alone and the target does
/// not need to exist unless `exists` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filepath {
    pub exists: bool,
}

impl Filepath {
    #[must_use]
    pub const fn new() -> Self {
        Self { exists: false }
    }

    /// Resolver that fails when the path is absent
    #[must_use]
    pub const fn existing() -> Self {
        Self { exists: true }
    }

    /// Resolve `path` against the current working directory
    ///
    /// # Errors
    /// Returns `Io` if the working directory cannot be read, or `NotFound`
    /// with the resolved path if `exists` is set and nothing is there
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf, ActionError> {
        let cwd = std::env::current_dir()?;
        let resolved = absolutize(&cwd, path.as_ref());

        if self.exists && !resolved.exists() {
            return Err(ActionError::NotFound(resolved));
        }

        Ok(resolved)
    }
}

/// Join `path` onto `base` and fold away `.` and `..` components
fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Never climb above the root
                if normalized.parent().is_some() {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

impl TypedValueParser for Filepath {
    type Value = PathBuf;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        _arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        self.resolve(value)
            .map_err(|e| e.into_usage_error(&mut cmd.clone()))
    }
}
