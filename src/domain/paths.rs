//! Fixed repository-relative locations read and rewritten during setup.

/// User-supplied parameter file.
pub const CONFIG_FILE: &str = "config.txt";

/// Browser search script.
pub const BROWSER_SCRIPT: &str = "public/pasta.js";

/// Harvester script.
pub const HARVESTER_SCRIPT: &str = "harvester/pasta_harvester.mjs";

/// Repository README holding the template links.
pub const README: &str = "README.md";

/// Environment variable carrying `owner/repository`.
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
