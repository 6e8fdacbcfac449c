//! Scoped bake session — render into a temp directory, tear down on drop.
//!
//! [`BakeOutcome`] owns its [`TempDir`]; the directory is removed when the
//! outcome goes out of scope, on the success path and during assertion
//! unwinds alike. Render-time failures are *captured* on the outcome rather
//! than returned as `Err`, so negative-path tests read as plain assertions
//! on [`BakeOutcome::error`].

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, TimeZone, Utc};
use tempfile::TempDir;

use pybake_bake::{bake, BakeError};
use pybake_core::{BakeContext, ContextOverrides};

/// Factory for bake outcomes sharing one clock.
#[derive(Debug, Clone)]
pub struct BakeSession {
    now: DateTime<Utc>,
}

impl BakeSession {
    /// Session on the current wall clock.
    pub fn new() -> Self {
        BakeSession { now: Utc::now() }
    }

    /// Session with a pinned copyright year, for year-stamp assertions that
    /// cannot break at a calendar rollover mid-run.
    pub fn with_year(year: i32) -> Self {
        let now = Utc
            .with_ymd_and_hms(year, 6, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("invalid session year {year}"));
        BakeSession { now }
    }

    /// The copyright year this session stamps into baked output.
    pub fn year(&self) -> i32 {
        self.now.year()
    }

    /// Bake with the given overrides into a fresh temp directory.
    ///
    /// Never returns an error: context-resolution and render failures land
    /// on [`BakeOutcome::error`].
    pub fn bake(&self, overrides: &ContextOverrides) -> BakeOutcome {
        let tmp = match TempDir::new() {
            Ok(tmp) => tmp,
            Err(e) => {
                return BakeOutcome {
                    _tmp: None,
                    project_dir: None,
                    slug: None,
                    error: Some(BakeError::Io {
                        path: std::env::temp_dir(),
                        source: e,
                    }),
                }
            }
        };

        let ctx = match BakeContext::resolve_at(overrides, self.now) {
            Ok(ctx) => ctx,
            Err(e) => {
                return BakeOutcome {
                    _tmp: Some(tmp),
                    project_dir: None,
                    slug: None,
                    error: Some(e.into()),
                }
            }
        };

        match bake(&ctx, tmp.path()) {
            Ok(baked) => BakeOutcome {
                _tmp: Some(tmp),
                project_dir: Some(baked.root),
                slug: Some(ctx.project_slug.as_str().to_string()),
                error: None,
            },
            Err(e) => BakeOutcome {
                _tmp: Some(tmp),
                project_dir: None,
                slug: Some(ctx.project_slug.as_str().to_string()),
                error: Some(e),
            },
        }
    }

    /// Bake with template defaults.
    pub fn bake_defaults(&self) -> BakeOutcome {
        self.bake(&ContextOverrides::new())
    }
}

impl Default for BakeSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one bake: project location, captured failure, scoped cleanup.
#[derive(Debug)]
pub struct BakeOutcome {
    // Owns the temp directory; Drop removes the whole tree.
    _tmp: Option<TempDir>,
    project_dir: Option<PathBuf>,
    slug: Option<String>,
    error: Option<BakeError>,
}

impl BakeOutcome {
    /// True when baking completed and a project directory exists.
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.project_dir.is_some()
    }

    /// The captured failure, if baking did not complete.
    pub fn error(&self) -> Option<&BakeError> {
        self.error.as_ref()
    }

    /// Project root directory. Panics (test-assertion style) on a failed bake.
    pub fn project_dir(&self) -> &Path {
        match &self.project_dir {
            Some(dir) => dir,
            None => match &self.error {
                Some(e) => panic!("bake failed: {e}"),
                None => panic!("bake produced no project directory"),
            },
        }
    }

    /// The derived package slug, when context resolution got that far.
    pub fn project_slug(&self) -> &str {
        self.slug
            .as_deref()
            .unwrap_or_else(|| panic!("bake failed before slug derivation"))
    }

    /// Absolute path of a file inside the project.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.project_dir().join(rel)
    }

    /// Whether a file or directory exists inside the project.
    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Read a project file to a string. Panics when missing or unreadable.
    pub fn read(&self, rel: &str) -> String {
        let path = self.path(rel);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
    }

    /// Names of the project's top-level entries.
    pub fn toplevel_names(&self) -> Vec<String> {
        self.dir_names("")
    }

    /// Names of the entries in a project subdirectory.
    pub fn dir_names(&self, rel: &str) -> Vec<String> {
        let dir = if rel.is_empty() {
            self.project_dir().to_path_buf()
        } else {
            self.path(rel)
        };
        let entries = std::fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("cannot list {}: {e}", dir.display()));
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
