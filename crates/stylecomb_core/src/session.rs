//! Session state and the concurrent file-tree walker.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, join_all};
use tokio::fs;
use tracing::debug;

use crate::processor::process_document;
use crate::{Config, Error, PathFilter, RuleEngine};

/// One formatting run over one or more root paths.
///
/// Holds the activated configuration and the run counters. All I/O is
/// asynchronous and driven from a single logical thread: counters are
/// atomics only because sub-tasks interleave at await points, never because
/// of parallel threads.
pub struct Session {
    engine: RuleEngine,
    filter: PathFilter,
    verbose: bool,
    lint: bool,
    processed: AtomicUsize,
    changed: AtomicUsize,
    would_change: AtomicUsize,
}

impl Session {
    /// Builds a session from activated configuration.
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            engine: RuleEngine::from_config(config),
            filter: PathFilter::new(&config.exclude)?,
            verbose: config.verbose,
            lint: config.lint,
            processed: AtomicUsize::new(0),
            changed: AtomicUsize::new(0),
            would_change: AtomicUsize::new(0),
        })
    }

    /// Files processed so far.
    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Relaxed)
    }

    /// Files rewritten in place.
    pub fn changed(&self) -> usize {
        self.changed.load(Ordering::Relaxed)
    }

    /// Files that would be rewritten, counted in lint mode only.
    pub fn would_change(&self) -> usize {
        self.would_change.load(Ordering::Relaxed)
    }

    /// The run's overall success signal: lint mode fails as soon as one
    /// file would change; outside lint mode every settled run succeeds.
    pub fn succeeded(&self) -> bool {
        !self.lint || self.would_change() == 0
    }

    /// Processes the given roots concurrently and independently.
    ///
    /// A failing root never cancels its siblings; the first error is
    /// reported once every root has settled.
    pub async fn run(&self, roots: &[PathBuf]) -> Result<(), Error> {
        let results = join_all(roots.iter().map(|root| self.process_path(root))).await;
        results.into_iter().collect()
    }

    /// Processes one root path: a missing path is fatal to that root, a
    /// file that fails the filter resolves to a no-op.
    pub async fn process_path(&self, path: &Path) -> Result<(), Error> {
        let exists = fs::try_exists(path)
            .await
            .map_err(|e| Error::io(path, e))?;
        if !exists {
            return Err(Error::PathNotFound(path.to_path_buf()));
        }
        let metadata = fs::metadata(path).await.map_err(|e| Error::io(path, e))?;
        if metadata.is_dir() {
            self.process_directory(path).await
        } else if self.filter.is_processable_file(path) {
            self.process_file(path).await
        } else {
            Ok(())
        }
    }

    /// Dispatches one sub-task per directory entry with unbounded fan-out
    /// and join-all semantics: in-flight siblings run to completion even
    /// when one of them fails, and the directory settles with the first
    /// error only after all of them have settled. Nothing already written
    /// is rolled back.
    fn process_directory<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<(), Error>> {
        async move {
            let mut dir = fs::read_dir(path).await.map_err(|e| Error::io(path, e))?;
            let mut entries = Vec::new();
            while let Some(entry) = dir.next_entry().await.map_err(|e| Error::io(path, e))? {
                entries.push(entry.path());
            }

            let results = join_all(entries.iter().map(|entry| self.process_entry(entry))).await;
            results.into_iter().collect()
        }
        .boxed()
    }

    async fn process_entry(&self, path: &Path) -> Result<(), Error> {
        let metadata = fs::metadata(path).await.map_err(|e| Error::io(path, e))?;
        if metadata.is_dir() {
            // An excluded directory is never recursed into: none of its
            // descendants are visited or counted.
            if self.filter.is_excluded(path) {
                return Ok(());
            }
            self.process_directory(path).await
        } else if self.filter.is_processable_file(path) {
            self.process_file(path).await
        } else {
            Ok(())
        }
    }

    async fn process_file(&self, path: &Path) -> Result<(), Error> {
        let Some(syntax) = self.filter.syntax_for(path) else {
            return Ok(());
        };
        let input = fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(path, e))?;
        let label = path.display().to_string();
        let output = process_document(&self.engine, &input, syntax, &label)?;
        let changed = output != input;

        self.processed.fetch_add(1, Ordering::Relaxed);
        debug!("processed {} (changed: {})", path.display(), changed);

        if changed && !self.lint {
            fs::write(path, &output)
                .await
                .map_err(|e| Error::io(path, e))?;
            self.changed.fetch_add(1, Ordering::Relaxed);
        } else if changed {
            self.would_change.fetch_add(1, Ordering::Relaxed);
        }

        if self.verbose {
            let tick = match (changed, self.lint) {
                (false, _) => ' ',
                (true, true) => '!',
                (true, false) => '✓',
            };
            println!("{} {}", tick, path.display());
        }
        Ok(())
    }
}
