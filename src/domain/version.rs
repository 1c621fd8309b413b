use crate::error::{ReltagError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

lazy_static! {
    // Grammar from https://semver.org/, anchored so that only full matches count.
    static ref SEMVER_RE: Regex = Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$"
    )
    .unwrap();
}

/// Semantic version representation
///
/// `prerelease` and `build` hold the dot-separated identifiers without their
/// leading `-` / `+`; an empty string means the qualifier is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: String,
    pub build: String,
}

impl Version {
    /// Create a new version without qualifiers
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: String::new(),
            build: String::new(),
        }
    }

    /// Parse a version string (e.g., " 1.2.3-rc.1+ci42 " -> Version(1,2,3,"rc.1","ci42"))
    ///
    /// Surrounding whitespace is ignored. Anything else that is not a complete
    /// semantic version is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();

        let caps = SEMVER_RE
            .captures(text)
            .ok_or_else(|| ReltagError::version(text))?;

        let major = parse_component(text, &caps[1])?;
        let minor = parse_component(text, &caps[2])?;
        let patch = parse_component(text, &caps[3])?;

        Ok(Version {
            major,
            minor,
            patch,
            prerelease: caps.get(4).map_or("", |m| m.as_str()).to_string(),
            build: caps.get(5).map_or("", |m| m.as_str()).to_string(),
        })
    }

    /// Replace this version with the parsed `text`.
    ///
    /// On failure `self` is left untouched.
    pub fn set(&mut self, text: &str) -> Result<()> {
        *self = text.parse()?;
        Ok(())
    }

    /// major += 1; everything below it is reset and qualifiers are dropped
    pub fn bump_major(&mut self) -> Result<()> {
        let major = increment(self.major, "major")?;
        *self = Version::new(major, 0, 0);
        Ok(())
    }

    /// minor += 1; patch is reset and qualifiers are dropped
    pub fn bump_minor(&mut self) -> Result<()> {
        let minor = increment(self.minor, "minor")?;
        *self = Version::new(self.major, minor, 0);
        Ok(())
    }

    /// patch += 1; qualifiers are dropped
    pub fn bump_patch(&mut self) -> Result<()> {
        let patch = increment(self.patch, "patch")?;
        *self = Version::new(self.major, self.minor, patch);
        Ok(())
    }

    /// Set the pre-release field. Any build metadata is cleared.
    pub fn set_prerelease(&mut self, prerelease: impl Into<String>) {
        self.prerelease = prerelease.into();
        self.build.clear();
    }

    pub fn set_build(&mut self, build: impl Into<String>) {
        self.build = build.into();
    }
}

fn parse_component(text: &str, digits: &str) -> Result<u64> {
    match digits.parse::<u64>() {
        Ok(value) => Ok(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(ReltagError::version(format!(
            "{} (component {} is out of range)",
            text, digits
        ))),
        // The grammar only lets ASCII digits through to this point.
        Err(e) => unreachable!("numeric version component {:?} did not parse: {}", digits, e),
    }
}

fn increment(value: u64, field: &str) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| ReltagError::version(format!("{} version {} cannot be bumped", field, value)))
}

impl FromStr for Version {
    type Err = ReltagError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Version::default().to_string(), "0.0.0");
    }

    #[test]
    fn test_version_parse() {
        let parsed = v("1.2.3");
        assert_eq!(parsed, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_qualifiers() {
        let parsed = v("1.1.1-e+b");
        assert_eq!(parsed.prerelease, "e");
        assert_eq!(parsed.build, "b");

        // a hyphen after '+' belongs to the build metadata
        let parsed = v("1.1.1+b-e");
        assert_eq!(parsed.prerelease, "");
        assert_eq!(parsed.build, "b-e");
    }

    #[test]
    fn test_version_parse_trims_whitespace() {
        assert_eq!(v("  2.0.0-rc.1\n").to_string(), "2.0.0-rc.1");
    }

    #[test]
    fn test_round_trip() {
        for text in [
            "0.0.0",
            "1.0.0",
            "1.1.1-e",
            "1.1.1+b",
            "1.1.1-e+b",
            "1.1.1+b-e",
            "10.20.30-alpha.1.x-y-z.0+build.007",
            "1.0.0-0A.is.legal",
            "18446744073709551615.0.0",
        ] {
            assert_eq!(v(text).to_string(), text);
        }
    }

    #[test]
    fn test_agrees_with_semver_crate() {
        for text in ["1.2.3", "1.2.3-beta.2+exp.sha.5114f85", "0.0.1-0"] {
            let ours = v(text);
            let theirs = semver::Version::parse(text).unwrap();
            assert_eq!(ours.major, theirs.major);
            assert_eq!(ours.minor, theirs.minor);
            assert_eq!(ours.patch, theirs.patch);
            assert_eq!(ours.prerelease, theirs.pre.as_str());
            assert_eq!(ours.build, theirs.build.as_str());
        }
    }

    #[test]
    fn test_version_parse_invalid() {
        for text in [
            "",
            "1",
            "1.2",
            "1.2.abc",
            "b1.2.1",
            "v1.2.3",
            "1.2.3.4",
            "01.2.3",
            "1.2.3-01",
            "1.2.3-",
            "1.2.3+",
            "1.2.3-a..b",
            "1.2.3 trailing",
        ] {
            let err = Version::parse(text).unwrap_err();
            assert!(
                matches!(err, ReltagError::InvalidVersionFormat(_)),
                "{:?} should be rejected as a format error, got {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_set_failure_leaves_version_untouched() {
        let mut version = v("3.4.5-rc.1+abc");
        let before = version.clone();
        for bad in ["1", "1.2", "1.2.abc", "b1.2.1"] {
            assert!(version.set(bad).is_err());
            assert_eq!(version, before);
        }
    }

    #[test]
    fn test_set_and_from_str_agree() {
        let mut version = Version::default();
        version.set(" 2.0.0-beta+exp.sha.5114f85 ").unwrap();
        assert_eq!(version, "2.0.0-beta+exp.sha.5114f85".parse::<Version>().unwrap());
    }

    #[test]
    fn test_numeric_overflow_is_format_error() {
        let err = Version::parse("18446744073709551616.0.0").unwrap_err();
        assert!(matches!(err, ReltagError::InvalidVersionFormat(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_version_bump_major() {
        let mut version = v("1.1.1-e+b");
        version.bump_major().unwrap();
        assert_eq!(version.to_string(), "2.0.0");
    }

    #[test]
    fn test_version_bump_minor() {
        let mut version = v("1.1.1-e+b");
        version.bump_minor().unwrap();
        assert_eq!(version.to_string(), "1.2.0");
    }

    #[test]
    fn test_version_bump_patch() {
        let mut version = v("1.1.1-e");
        version.bump_patch().unwrap();
        assert_eq!(version.to_string(), "1.1.2");
    }

    #[test]
    fn test_bumps_from_zero() {
        let mut version = Version::default();
        version.bump_major().unwrap();
        version.bump_minor().unwrap();
        assert_eq!(version.to_string(), "1.1.0");

        let mut version = Version::default();
        version.bump_patch().unwrap();
        assert_eq!(version.to_string(), "0.0.1");
    }

    #[test]
    fn test_bump_overflow_leaves_version_untouched() {
        let mut version = Version::new(u64::MAX, 1, 1);
        assert!(version.bump_major().is_err());
        assert_eq!(version, Version::new(u64::MAX, 1, 1));
    }

    #[test]
    fn test_set_prerelease_clears_build() {
        let mut version = v("1.0.0-jep+bld");
        version.set_prerelease("pre");
        assert_eq!(version.to_string(), "1.0.0-pre");
        version.set_build("bld");
        assert_eq!(version.to_string(), "1.0.0-pre+bld");
    }

    #[test]
    fn test_set_build_keeps_other_fields() {
        let mut once = v("1.0.0-jep");
        once.set_build("second");

        let mut twice = v("1.0.0-jep");
        twice.set_build("first");
        twice.set_build("second");

        assert_eq!(once, twice);
        assert_eq!(twice.to_string(), "1.0.0-jep+second");
    }

    #[test]
    fn test_qualifiers_on_empty_version() {
        let mut version = Version::default();
        version.set_prerelease("pre");
        version.set_build("bld");
        assert_eq!(version.to_string(), "0.0.0-pre+bld");
    }
}
