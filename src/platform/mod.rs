//=============================================
// buildfuncs/platform/mod.rs
//=============================================
// Author: ZobieLabs
// License: Duality Public License (DPL v1.0)
// Goal: Host platform identity
// Objective: Classify the operating system the build runs on
//=============================================

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    Win32,
    Unix,
    Other,
}

impl HostPlatform {
    /// Platform of the running process.
    pub fn current() -> Self {
        if cfg!(windows) {
            HostPlatform::Win32
        } else if cfg!(unix) {
            HostPlatform::Unix
        } else {
            HostPlatform::Other
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HostPlatform::Win32 => "win32",
            HostPlatform::Unix => "unix",
            HostPlatform::Other => "other",
        }
    }

    pub fn is_windows(self) -> bool {
        self == HostPlatform::Win32
    }

    pub fn is_unix(self) -> bool {
        self == HostPlatform::Unix
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


//=============================================
// End of file
//=============================================
