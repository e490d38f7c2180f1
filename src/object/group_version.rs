//! API group/version parsing.

use std::fmt;

use crate::error::ObjectError;

/// An API group and version pair, as in `apps/v1` or `v1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupVersion {
    /// API group (empty for the core group).
    pub group: String,
    /// API version.
    pub version: String,
}

impl GroupVersion {
    /// Creates a new group/version pair.
    #[must_use]
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }

    /// Parses an `apiVersion` string.
    ///
    /// `v1` yields the core group, `apps/v1` yields group `apps`. Segments
    /// are taken as written: `""` and `"/"` yield an empty pair, and an empty
    /// group or version on either side of the `/` is kept empty.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidApiVersion`] if the string contains more
    /// than one `/`.
    pub fn parse(api_version: &str) -> Result<Self, ObjectError> {
        if api_version.is_empty() || api_version == "/" {
            return Ok(Self::new("", ""));
        }

        match api_version.split_once('/') {
            None => Ok(Self::new("", api_version)),
            Some((_, version)) if version.contains('/') => Err(ObjectError::invalid_api_version(
                api_version,
                "expected at most one '/' between group and version",
            )),
            Some((group, version)) => Ok(Self::new(group, version)),
        }
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grouped() {
        let gv = GroupVersion::parse("apps/v1").unwrap();
        assert_eq!(gv, GroupVersion::new("apps", "v1"));
        assert_eq!(gv.to_string(), "apps/v1");
    }

    #[test]
    fn test_parse_core_group() {
        let gv = GroupVersion::parse("v1").unwrap();
        assert_eq!(gv.group, "");
        assert_eq!(gv.version, "v1");
        assert_eq!(gv.to_string(), "v1");
    }

    #[test]
    fn test_parse_dotted_group() {
        let gv = GroupVersion::parse("kustomize.toolkit.fluxcd.io/v1beta2").unwrap();
        assert_eq!(gv.group, "kustomize.toolkit.fluxcd.io");
        assert_eq!(gv.version, "v1beta2");
    }

    #[test]
    fn test_parse_keeps_empty_segments() {
        assert_eq!(GroupVersion::parse("").unwrap(), GroupVersion::new("", ""));
        assert_eq!(GroupVersion::parse("/").unwrap(), GroupVersion::new("", ""));
        assert_eq!(GroupVersion::parse("apps/").unwrap(), GroupVersion::new("apps", ""));
        assert_eq!(GroupVersion::parse("/v1").unwrap(), GroupVersion::new("", "v1"));
        assert_eq!(GroupVersion::parse("apps /v1").unwrap(), GroupVersion::new("apps ", "v1"));
    }

    #[test]
    fn test_parse_rejects_extra_separators() {
        for bad in ["a/b/c", "//", "apps/v1/"] {
            assert!(
                matches!(
                    GroupVersion::parse(bad),
                    Err(ObjectError::InvalidApiVersion { .. })
                ),
                "expected InvalidApiVersion for {bad:?}"
            );
        }
    }
}
