// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Exit status and output tests for the `vkbind` binary.

use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

/// RAII guard for a scratch workspace holding `src/` and `out/`.
struct TestTreeGuard {
    dir: PathBuf,
}

impl TestTreeGuard {
    fn new(test: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "vkbind_cli_tests_{}_{}",
            test,
            uuid::Uuid::new_v4()
        ));
        std::fs::create_dir_all(dir.join("src")).unwrap_or_else(|_| {
            panic!("Failed to create test directory \"{}\".", dir.display())
        });
        Self { dir }
    }

    fn src(&self) -> PathBuf {
        self.dir.join("src")
    }

    fn out(&self) -> PathBuf {
        self.dir.join("out")
    }

    /// Copies a fixture from the library crate into the source tree.
    fn add_fixture(&self, name: &str, relative: &str) {
        let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("vkbind")
            .join("tests")
            .join("data")
            .join(name);
        let target = self.src().join(relative);
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::copy(&fixture, &target).unwrap_or_else(|err| {
            panic!("Failed to copy fixture \"{}\": {}", fixture.display(), err)
        });
    }
}

impl Drop for TestTreeGuard {
    fn drop(&mut self) {
        std::fs::remove_dir_all(self.dir.as_path()).unwrap_or_else(|_| {
            panic!("Failed to remove test directory \"{}\".", self.dir.display())
        });
    }
}

fn vkbind(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vkbind"))
        .args(args)
        .env_remove("VKBIND_CONFIG")
        .output()
        .expect("failed to run vkbind")
}

#[test]
fn missing_marker_file_exits_with_failure() {
    let tree = TestTreeGuard::new("missing_marker");
    let output = vkbind(&[
        Path::new("wrappers"),
        tree.out().as_path(),
        tree.src().as_path(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("vk-funcs.inc"));
    assert!(!tree.out().exists());
}

#[test]
fn valid_tree_exits_successfully_and_writes_artifacts() {
    let tree = TestTreeGuard::new("valid");
    tree.add_fixture("vk-funcs.inc", "src/vulkan/vk-funcs.inc");
    tree.add_fixture("vk.xml", "third_party/vulkan-headers/registry/vk.xml");

    let output = vkbind(&[
        Path::new("wrappers"),
        tree.out().as_path(),
        tree.src().as_path(),
    ]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let wrappers = std::fs::read_to_string(tree.out().join("src/vk-wrappers.inc")).unwrap();
    let header = std::fs::read_to_string(tree.out().join("src/vk-wrappers.h")).unwrap();
    assert!(wrappers.contains("delegate->LogGraphicsCalls()"));
    assert!(header.starts_with("std::function<VkResult("));
}

#[test]
fn invalid_config_exits_with_failure() {
    let tree = TestTreeGuard::new("bad_config");
    tree.add_fixture("vk-funcs.inc", "src/vulkan/vk-funcs.inc");
    let config = tree.dir.join("vkbind.json");
    std::fs::write(&config, "{ \"paths\": ").unwrap();

    let output = vkbind(&[
        Path::new("--config"),
        config.as_path(),
        Path::new("wrappers"),
        tree.out().as_path(),
        tree.src().as_path(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid configuration"));
    assert!(!tree.out().exists());
}
