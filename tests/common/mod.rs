//! Shared testing utilities for ezcat CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE_DEMO_URL: &str = "https://EDIorg.github.io/ezCatalog/public/demo.html";
pub const TEMPLATE_WORKFLOW_URL: &str =
    "https://github.com/EDIorg/ezCatalog/blob/master/.github/workflows/build_catalog.yml";

pub const BROWSER_SCRIPT: &str = r#"var PASTA_CONFIG = {
   "server": "https://pasta.lternet.edu/package/search/eml?", // PASTA server
   "filter": '&fq=scope:cos-spu', // Filter results on a unique keyword of a research group
   "brandingText": "Seattle Public Utilities Data Catalog",
   "showAbstracts": true, // true if we should show abstracts in search results
   "abstractLimit": 750, // Limit the number of characters in the abstract
   "limit": 2000,  // Max number of results to retrieve per page
   "resultsElementId": "searchResults", // Element to contain results
   "baseDelay": 200 // ms
};
"#;

pub const HARVESTER_SCRIPT: &str = r#"const HARVESTER_CONFIG = {
   "server": "https://pasta.lternet.edu/package/search/eml?", // PASTA server
   "filter": '&fq=keyword:"Archbold Biological Station"', // Filter results on a unique keyword of a research group
   "limit": 2000, // Max number of results to retrieve per page
   "fields": [
      "title",
      "pubdate"
   ],
};
"#;

pub fn readme() -> String {
    format!(
        "# ezCatalog\n\nA [demo]({TEMPLATE_DEMO_URL}) of the catalog.\n\n\
         Edit [build_catalog.yml]({TEMPLATE_WORKFLOW_URL}) to schedule rebuilds.\n"
    )
}

/// Testing harness providing an isolated catalog repository for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with the catalog files seeded.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("public")).expect("Failed to create public/");
        fs::create_dir_all(work_dir.join("harvester")).expect("Failed to create harvester/");

        let ctx = Self { root, work_dir };
        ctx.write("public/pasta.js", BROWSER_SCRIPT);
        ctx.write("harvester/pasta_harvester.mjs", HARVESTER_SCRIPT);
        ctx.write("README.md", &readme());
        ctx
    }

    /// Path to the repository directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `ezcat` binary within the repository.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `ezcat` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("ezcat").expect("Failed to locate ezcat binary");
        cmd.current_dir(dir.as_ref()).env_remove("GITHUB_REPOSITORY").env_remove("RUST_LOG");
        cmd
    }

    /// Write a repository-relative file.
    pub fn write(&self, path: &str, content: &str) {
        let full = self.work_dir.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(full, content).expect("Failed to write test file");
    }

    /// Read a repository-relative file.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.work_dir.join(path)).expect("Failed to read test file")
    }

    /// Write `config.txt`.
    pub fn write_config(&self, content: &str) {
        self.write("config.txt", content);
    }

    /// Snapshot of every file the tool may rewrite.
    pub fn snapshot(&self) -> Vec<String> {
        ["public/pasta.js", "harvester/pasta_harvester.mjs", "README.md"]
            .iter()
            .map(|path| self.read(path))
            .collect()
    }
}
