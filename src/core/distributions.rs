//! Local distribution detection through `os-release`.

use std::collections::HashMap;
use std::fs;
use std::str::FromStr;

const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

/// Distributions that come with their own logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distributions {
    Alpine,
    Arch,
    Centos,
    Debian,
    Kali,
    Linux,
    LinuxMint,
    Ubuntu,
}

impl Distributions {
    pub const ALL: [Distributions; 8] = [
        Distributions::Alpine,
        Distributions::Arch,
        Distributions::Centos,
        Distributions::Debian,
        Distributions::Kali,
        Distributions::Linux,
        Distributions::LinuxMint,
        Distributions::Ubuntu,
    ];

    /// Identifier as found in `os-release` `ID` fields
    pub fn identifier(self) -> &'static str {
        match self {
            Distributions::Alpine => "alpine",
            Distributions::Arch => "arch",
            Distributions::Centos => "centos",
            Distributions::Debian => "debian",
            Distributions::Kali => "kali",
            Distributions::Linux => "linux",
            Distributions::LinuxMint => "linuxmint",
            Distributions::Ubuntu => "ubuntu",
        }
    }

    /// Match `ID`, then each `ID_LIKE` word; generic Linux otherwise
    pub fn detect(os_release: &OsRelease) -> Self {
        if let Some(distribution) = os_release.id().and_then(|id| id.parse().ok()) {
            return distribution;
        }

        os_release
            .id_like()
            .unwrap_or_default()
            .split(' ')
            .find_map(|id_like| id_like.parse().ok())
            .unwrap_or(Distributions::Linux)
    }
}

impl FromStr for Distributions {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.identifier() == s)
            .ok_or(())
    }
}

/// Parsed `os-release` key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    fields: HashMap<String, String>,
}

impl OsRelease {
    /// Read the first `os-release` file that exists; empty if none does
    pub fn load() -> Self {
        OS_RELEASE_PATHS
            .iter()
            .find_map(|path| fs::read_to_string(path).ok())
            .map(|content| Self::parse(&content))
            .unwrap_or_default()
    }

    pub fn parse(content: &str) -> Self {
        let fields = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), unquote(value.trim())))
            .collect();

        Self { fields }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn id(&self) -> Option<&str> {
        self.get("ID")
    }

    pub fn id_like(&self) -> Option<&str> {
        self.get("ID_LIKE")
    }

    /// Pretty name, falling back to the plain name
    pub fn name(&self) -> Option<&str> {
        self.get("PRETTY_NAME").or_else(|| self.get("NAME"))
    }

    /// SGR attributes suggested for this distribution (`"1;34"`)
    pub fn ansi_color(&self) -> Option<&str> {
        self.get("ANSI_COLOR")
    }
}

fn unquote(value: &str) -> String {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));

    if quoted {
        value[1..value.len() - 1].replace("\\\"", "\"")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UBUNTU: &str = r#"PRETTY_NAME="Ubuntu 22.04.3 LTS"
NAME="Ubuntu"
ID=ubuntu
ID_LIKE=debian
"#;

    #[test]
    fn test_direct_id() {
        let os_release = OsRelease::parse(UBUNTU);
        assert_eq!(Distributions::detect(&os_release), Distributions::Ubuntu);
        assert_eq!(os_release.name(), Some("Ubuntu 22.04.3 LTS"));
    }

    #[test]
    fn test_id_like_fallback() {
        let os_release = OsRelease::parse("ID=pop\nID_LIKE=\"ubuntu debian\"\n");
        assert_eq!(Distributions::detect(&os_release), Distributions::Ubuntu);
    }

    #[test]
    fn test_unknown_is_linux() {
        let os_release = OsRelease::parse("ID=gentoo\nNAME=Gentoo\nANSI_COLOR=\"1;32\"\n");
        assert_eq!(Distributions::detect(&os_release), Distributions::Linux);
        assert_eq!(os_release.name(), Some("Gentoo"));
        assert_eq!(os_release.ansi_color(), Some("1;32"));
        assert_eq!(Distributions::detect(&OsRelease::default()), Distributions::Linux);
    }

    #[test]
    fn test_identifiers_round_trip() {
        for distribution in Distributions::ALL {
            assert_eq!(distribution.identifier().parse::<Distributions>(), Ok(distribution));
        }
    }
}
