use std::fmt;

use crate::domain::paths;

/// Generated script whose parameter object receives configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionTarget {
    /// Browser search script (`public/pasta.js`).
    Browser,
    /// Harvester script (`harvester/pasta_harvester.mjs`).
    Harvester,
}

impl InjectionTarget {
    /// All targets in the order they are rewritten.
    pub const ALL: [InjectionTarget; 2] = [InjectionTarget::Browser, InjectionTarget::Harvester];

    /// Repository-relative path of the target file.
    pub fn path(self) -> &'static str {
        match self {
            InjectionTarget::Browser => paths::BROWSER_SCRIPT,
            InjectionTarget::Harvester => paths::HARVESTER_SCRIPT,
        }
    }

    /// Whether a parameter with this name is injected into the target.
    pub fn accepts(self, name: &str) -> bool {
        match self {
            InjectionTarget::Browser => name.contains("filter") || name.contains("limit"),
            InjectionTarget::Harvester => name.contains("filter"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InjectionTarget::Browser => "browser",
            InjectionTarget::Harvester => "harvester",
        }
    }
}

impl fmt::Display for InjectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
