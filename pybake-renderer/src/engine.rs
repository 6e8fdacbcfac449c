//! Tera rendering engine — template catalog and [`Renderer`].
//!
//! # Generated tree
//!
//! | File                        | Condition                          |
//! |-----------------------------|------------------------------------|
//! | `pyproject.toml`            | always                             |
//! | `README.rst`                | always                             |
//! | `CONTRIBUTING.rst`          | always                             |
//! | `HISTORY.rst`               | always                             |
//! | `tox.ini`                   | always                             |
//! | `.travis.yml`               | always                             |
//! | `.gitignore`                | always                             |
//! | `docs/*`                    | always (`docs/authors.rst` gated)  |
//! | `LICENSE`                   | open-source license chosen         |
//! | `AUTHORS.rst`               | `create_author_file` is `y`        |
//! | `src/<slug>/__init__.py`    | always                             |
//! | `src/<slug>/<slug>.py`      | always                             |
//! | `src/<slug>/cli.py`         | a CLI framework is chosen          |
//! | `tests/test_<slug>.py`      | always                             |

use std::collections::HashMap;
use std::path::PathBuf;

use tera::{Tera, Value};

use pybake_core::{BakeContext, CliFramework, LicenseKind};

use crate::context::RenderContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("pyproject.toml.tera", include_str!("templates/pyproject.toml.tera")),
    ("readme.rst.tera", include_str!("templates/README.rst.tera")),
    ("authors.rst.tera", include_str!("templates/AUTHORS.rst.tera")),
    ("contributing.rst.tera", include_str!("templates/CONTRIBUTING.rst.tera")),
    ("history.rst.tera", include_str!("templates/HISTORY.rst.tera")),
    ("tox.ini.tera", include_str!("templates/tox.ini.tera")),
    ("travis.yml.tera", include_str!("templates/travis.yml.tera")),
    ("gitignore.tera", include_str!("templates/gitignore.tera")),
    ("license/mit.tera", include_str!("templates/license/mit.tera")),
    ("license/bsd4.tera", include_str!("templates/license/bsd4.tera")),
    ("license/apache2.tera", include_str!("templates/license/apache2.tera")),
    ("license/gpl3.tera", include_str!("templates/license/gpl3.tera")),
    ("docs/index.rst.tera", include_str!("templates/docs/index.rst.tera")),
    (
        "docs/installation.rst.tera",
        include_str!("templates/docs/installation.rst.tera"),
    ),
    ("docs/usage.rst.tera", include_str!("templates/docs/usage.rst.tera")),
    (
        "docs/contributing.rst.tera",
        include_str!("templates/docs/contributing.rst.tera"),
    ),
    ("docs/history.rst.tera", include_str!("templates/docs/history.rst.tera")),
    ("docs/authors.rst.tera", include_str!("templates/docs/authors.rst.tera")),
    ("src/__init__.py.tera", include_str!("templates/src/__init__.py.tera")),
    ("src/module.py.tera", include_str!("templates/src/module.py.tera")),
    ("src/cli_click.py.tera", include_str!("templates/src/cli_click.py.tera")),
    (
        "src/cli_argparse.py.tera",
        include_str!("templates/src/cli_argparse.py.tera"),
    ),
    (
        "tests/test_module.py.tera",
        include_str!("templates/tests/test_module.py.tera"),
    ),
];

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

fn escape_quoted(value: &Value, filter: &str) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{filter} filter expects a string")))?;
    Ok(Value::String(s.replace('\\', "\\\\").replace('"', "\\\"")))
}

/// Escape a value for interpolation inside a double-quoted TOML string.
///
/// Keeps author names with embedded quotes or apostrophes from corrupting
/// `pyproject.toml`.
fn toml_escape(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    escape_quoted(value, "toml_escape")
}

/// Escape a value for interpolation inside a double-quoted Python string.
fn py_escape(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    escape_quoted(value, "py_escape")
}

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.register_filter("toml_escape", toml_escape);
    tera.register_filter("py_escape", py_escape);
    let items: Vec<(&str, &str)> = TPLS.to_vec();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

fn license_template(kind: LicenseKind) -> Option<&'static str> {
    match kind {
        LicenseKind::Mit => Some("license/mit.tera"),
        LicenseKind::Bsd4Clause => Some("license/bsd4.tera"),
        LicenseKind::Apache2 => Some("license/apache2.tera"),
        LicenseKind::Gpl3OrLater => Some("license/gpl3.tera"),
        LicenseKind::NotOpenSource => None,
    }
}

/// Output files for a context: `(template name, relative output path)`.
///
/// Paths are relative to the project root (`<slug>/`); conditional files are
/// simply absent from the plan, never rendered empty.
fn plan(ctx: &BakeContext) -> Vec<(&'static str, PathBuf)> {
    let slug = ctx.project_slug.as_str();
    let pkg_dir = PathBuf::from("src").join(slug);

    let mut files: Vec<(&'static str, PathBuf)> = vec![
        ("pyproject.toml.tera", PathBuf::from("pyproject.toml")),
        ("readme.rst.tera", PathBuf::from("README.rst")),
        ("contributing.rst.tera", PathBuf::from("CONTRIBUTING.rst")),
        ("history.rst.tera", PathBuf::from("HISTORY.rst")),
        ("tox.ini.tera", PathBuf::from("tox.ini")),
        ("travis.yml.tera", PathBuf::from(".travis.yml")),
        ("gitignore.tera", PathBuf::from(".gitignore")),
        ("docs/index.rst.tera", PathBuf::from("docs").join("index.rst")),
        (
            "docs/installation.rst.tera",
            PathBuf::from("docs").join("installation.rst"),
        ),
        ("docs/usage.rst.tera", PathBuf::from("docs").join("usage.rst")),
        (
            "docs/contributing.rst.tera",
            PathBuf::from("docs").join("contributing.rst"),
        ),
        ("docs/history.rst.tera", PathBuf::from("docs").join("history.rst")),
        ("src/__init__.py.tera", pkg_dir.join("__init__.py")),
        ("src/module.py.tera", pkg_dir.join(format!("{slug}.py"))),
        (
            "tests/test_module.py.tera",
            PathBuf::from("tests").join(format!("test_{slug}.py")),
        ),
    ];

    if let Some(tpl) = license_template(ctx.open_source_license) {
        files.push((tpl, PathBuf::from("LICENSE")));
    }
    if ctx.create_author_file {
        files.push(("authors.rst.tera", PathBuf::from("AUTHORS.rst")));
        files.push(("docs/authors.rst.tera", PathBuf::from("docs").join("authors.rst")));
    }
    match ctx.command_line_interface {
        CliFramework::Click => files.push(("src/cli_click.py.tera", pkg_dir.join("cli.py"))),
        CliFramework::Argparse => {
            files.push(("src/cli_argparse.py.tera", pkg_dir.join("cli.py")))
        }
        CliFramework::None => {}
    }

    files
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer for the whole project tree.
///
/// Uses embedded templates only. Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render every file the context calls for.
    ///
    /// Returns `Vec<(relative_path, rendered_content)>` — one entry per
    /// output file, paths relative to the project root.
    pub fn render(&self, ctx: &BakeContext) -> Result<Vec<(PathBuf, String)>, RenderError> {
        let rctx = RenderContext::from_bake(ctx);
        let tera_ctx = rctx.to_tera_context()?;

        let mut results = Vec::new();
        for (name, path) in plan(ctx) {
            let content = self.tera.render(name, &tera_ctx)?;
            results.push((path, content));
        }
        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pybake_core::ContextOverrides;
    use std::path::Path;

    fn make_context(overrides: ContextOverrides) -> BakeContext {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        BakeContext::resolve_at(&overrides, now).expect("context resolves")
    }

    fn rendered(overrides: ContextOverrides) -> Vec<(PathBuf, String)> {
        let renderer = Renderer::new().expect("renderer builds");
        renderer.render(&make_context(overrides)).expect("render succeeds")
    }

    fn find<'a>(files: &'a [(PathBuf, String)], rel: &str) -> Option<&'a str> {
        files
            .iter()
            .find(|(p, _)| p == Path::new(rel))
            .map(|(_, c)| c.as_str())
    }

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded templates");
    }

    #[test]
    fn default_plan_contains_core_files() {
        let files = rendered(ContextOverrides::new());
        for rel in [
            "pyproject.toml",
            "README.rst",
            "tox.ini",
            ".travis.yml",
            "LICENSE",
            "AUTHORS.rst",
            "docs/index.rst",
            "src/python_boilerplate/__init__.py",
            "src/python_boilerplate/python_boilerplate.py",
            "src/python_boilerplate/cli.py",
            "tests/test_python_boilerplate.py",
        ] {
            assert!(find(&files, rel).is_some(), "missing planned file {rel}");
        }
    }

    #[test]
    fn proprietary_license_omits_license_file() {
        let files = rendered(ContextOverrides::from([(
            "open_source_license",
            "Not open source",
        )]));
        assert!(find(&files, "LICENSE").is_none());
        let pyproject = find(&files, "pyproject.toml").unwrap();
        assert!(!pyproject.contains("license ="));
    }

    #[test]
    fn author_flag_gates_author_files() {
        let files = rendered(ContextOverrides::from([("create_author_file", "n")]));
        assert!(find(&files, "AUTHORS.rst").is_none());
        assert!(find(&files, "docs/authors.rst").is_none());

        let index = find(&files, "docs/index.rst").unwrap();
        assert!(
            index.contains("   contributing\n   history"),
            "toctree must stay contiguous without the authors page:\n{index}"
        );
        assert!(!index.contains("authors"));
    }

    #[test]
    fn author_page_listed_in_toctree_when_enabled() {
        let files = rendered(ContextOverrides::new());
        let index = find(&files, "docs/index.rst").unwrap();
        assert!(index.contains("   usage\n   authors\n   contributing\n   history"));
    }

    #[test]
    fn no_cli_omits_entry_point_and_script() {
        let files = rendered(ContextOverrides::from([(
            "command_line_interface",
            "No command-line interface",
        )]));
        assert!(find(&files, "src/python_boilerplate/cli.py").is_none());
        let pyproject = find(&files, "pyproject.toml").unwrap();
        assert!(!pyproject.contains("[project.scripts]"));
    }

    #[test]
    fn click_cli_registers_console_script() {
        let files = rendered(ContextOverrides::new());
        let pyproject = find(&files, "pyproject.toml").unwrap();
        assert!(pyproject.contains("[project.scripts]"));
        assert!(pyproject.contains("python_boilerplate = \"python_boilerplate.cli:main\""));
        let cli = find(&files, "src/python_boilerplate/cli.py").unwrap();
        assert!(cli.contains("import click"));
    }

    #[test]
    fn argparse_cli_uses_stdlib_only() {
        let files = rendered(ContextOverrides::from([(
            "command_line_interface",
            "argparse",
        )]));
        let cli = find(&files, "src/python_boilerplate/cli.py").unwrap();
        assert!(cli.contains("import argparse"));
        assert!(!cli.contains("import click"));
        let pyproject = find(&files, "pyproject.toml").unwrap();
        assert!(!pyproject.contains("click>=8.0"));
    }

    #[test]
    fn quoted_full_name_is_escaped_in_pyproject() {
        let files = rendered(ContextOverrides::from([(
            "full_name",
            "name \"quote\" name",
        )]));
        let pyproject = find(&files, "pyproject.toml").unwrap();
        assert!(
            pyproject.contains(r#"name = "name \"quote\" name""#),
            "expected escaped author name in:\n{pyproject}"
        );
    }

    #[test]
    fn license_year_is_stamped() {
        let files = rendered(ContextOverrides::new());
        let license = find(&files, "LICENSE").unwrap();
        assert!(license.contains("2024"));
        assert!(license.contains("Jane Doe"));
    }

    #[test]
    fn travis_deploy_section_is_gated() {
        let with = rendered(ContextOverrides::new());
        assert!(find(&with, ".travis.yml").unwrap().contains("deploy:"));

        let without = rendered(ContextOverrides::from([("use_ci_deployment", "n")]));
        let travis = find(&without, ".travis.yml").unwrap();
        assert!(!travis.contains("deploy:"));
        assert!(travis.contains("language: python"));
    }

    #[test]
    fn no_crlf_in_any_rendered_output() {
        let files = rendered(ContextOverrides::new());
        for (path, content) in &files {
            assert!(
                !content.contains('\r'),
                "rendered output {} contains CR char",
                path.display()
            );
        }
    }
}
