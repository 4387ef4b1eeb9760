//! Path filtering.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use stylecomb_parser::Syntax;

use crate::Error;

/// Decides which paths a run may touch.
///
/// Exclusion is compiled once from the configured glob patterns; any match
/// excludes, so pattern order is irrelevant. Files additionally have to
/// carry one of the supported stylesheet extensions.
pub struct PathFilter {
    exclude: Option<GlobSet>,
}

impl PathFilter {
    /// Compiles the exclude pattern set.
    pub fn new(exclude: &[String]) -> Result<Self, Error> {
        Ok(Self {
            exclude: Self::build_globset(exclude)?,
        })
    }

    fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, Error> {
        if patterns.is_empty() {
            return Ok(None);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| Error::config(format!("Invalid glob pattern: {}", e)))?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build globset: {}", e)))?;

        Ok(Some(globset))
    }

    /// Returns true if any exclude pattern matches the path.
    ///
    /// A leading `./` is stripped first so patterns match paths the way
    /// users write them on the command line.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.strip_prefix(".").unwrap_or(path);
        self.exclude.as_ref().is_some_and(|set| set.is_match(path))
    }

    /// Returns true if the path names a stylesheet file this run may
    /// process: supported extension, not excluded.
    pub fn is_processable_file(&self, path: &Path) -> bool {
        self.syntax_for(path).is_some() && !self.is_excluded(path)
    }

    /// Maps a file path to its stylesheet syntax via the extension.
    pub fn syntax_for(&self, path: &Path) -> Option<Syntax> {
        let extension = path.extension()?.to_str()?;
        Syntax::from_extension(extension)
    }
}
