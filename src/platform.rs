//! Editor settings directory resolution
//!
//! The snippets file lives under the editor's per-user settings root, which
//! differs per operating system. Resolution takes the platform family and an
//! [`Environment`] as inputs so it can be exercised without touching the real
//! home directory.

use std::fmt;
use std::path::PathBuf;

/// Operating system families with distinct settings locations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    MacOs,
    Linux,
    Windows,
    /// BSDs and anything else; treated like Linux
    Other,
}

impl PlatformFamily {
    /// Family of the running system
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to its family
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => PlatformFamily::MacOs,
            "linux" => PlatformFamily::Linux,
            "windows" => PlatformFamily::Windows,
            _ => PlatformFamily::Other,
        }
    }

    pub fn separator(self) -> char {
        match self {
            PlatformFamily::Windows => '\\',
            _ => '/',
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformFamily::MacOs => "macOS",
            PlatformFamily::Linux => "Linux",
            PlatformFamily::Windows => "Windows",
            PlatformFamily::Other => "other",
        };
        f.write_str(name)
    }
}

/// Source of the per-user directories settings roots are built from
pub trait Environment {
    /// `$HOME`
    fn home_dir(&self) -> Option<PathBuf>;
    /// `%APPDATA%` (roaming application data)
    fn app_data_dir(&self) -> Option<PathBuf>;
}

/// The real environment of this process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn app_data_dir(&self) -> Option<PathBuf> {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
    }
}

/// Settings root of an editor product such as `Code` or `VSCodium`.
///
/// The path is assembled with the family's separator rather than the host's,
/// so a Windows layout can be computed anywhere.
pub fn settings_root(
    family: PlatformFamily,
    env: &dyn Environment,
    editor_dir: &str,
) -> Option<PathBuf> {
    let (base, parts): (PathBuf, [&str; 3]) = match family {
        PlatformFamily::MacOs => (
            env.home_dir()?,
            ["Library/Application Support", editor_dir, "User"],
        ),
        PlatformFamily::Linux | PlatformFamily::Other => {
            (env.home_dir()?, [".config", editor_dir, "User"])
        }
        PlatformFamily::Windows => (env.app_data_dir()?, ["", editor_dir, "User"]),
    };

    let sep = family.separator();
    let mut root = base.to_string_lossy().trim_end_matches(sep).to_string();
    for part in parts.iter().filter(|p| !p.is_empty()) {
        root.push(sep);
        root.push_str(part);
    }
    Some(PathBuf::from(root))
}
