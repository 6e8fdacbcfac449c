//! Materialized-tree assertions over a real temp directory.

use assert_fs::prelude::*;
use chrono::{TimeZone, Utc};
use predicates::prelude::*;

use pybake_bake::{bake, tree_digest};
use pybake_core::{BakeContext, ContextOverrides};

fn make_context(overrides: ContextOverrides) -> BakeContext {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
    BakeContext::resolve_at(&overrides, now).expect("context resolves")
}

#[test]
fn baked_tree_matches_layout_contract() {
    let parent = assert_fs::TempDir::new().unwrap();
    let baked = bake(&make_context(ContextOverrides::new()), parent.path()).unwrap();

    let root = parent.child("python_boilerplate");
    root.assert(predicate::path::is_dir());
    root.child("pyproject.toml")
        .assert(predicate::str::contains("name = \"python_boilerplate\""));
    root.child("LICENSE")
        .assert(predicate::str::contains("2024"));
    root.child(".travis.yml")
        .assert(predicate::str::contains("language: python"));
    root.child("docs/index.rst")
        .assert(predicate::path::is_file());
    assert_eq!(baked.root, root.path());
}

#[test]
fn baking_twice_yields_byte_identical_trees() {
    let first_parent = assert_fs::TempDir::new().unwrap();
    let second_parent = assert_fs::TempDir::new().unwrap();
    let ctx = make_context(ContextOverrides::from([("project_name", "Twin Bake")]));

    let first = bake(&ctx, first_parent.path()).unwrap();
    let second = bake(&ctx, second_parent.path()).unwrap();

    assert_eq!(
        tree_digest(&first.root).unwrap(),
        tree_digest(&second.root).unwrap(),
        "identical contexts must bake identical trees"
    );
}
