/// Placeholder used for every attribute missing from the input reports
pub const UNDEFINED: &str = "undefined";

/// Builds the composite `name.architecture` key shared by packages and providers
pub fn package_key(name: &str, arch: &str) -> String {
    format!("{}.{}", name, arch)
}

/// PackageInfo value object holding the attributes reported by `yum info`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub arch: String,
    pub version: String,
    pub release: String,
    pub repository: String,
    pub summary: String,
}

impl PackageInfo {
    pub fn new(
        arch: impl Into<String>,
        version: impl Into<String>,
        release: impl Into<String>,
        repository: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            arch: arch.into(),
            version: version.into(),
            release: release.into(),
            repository: repository.into(),
            summary: summary.into(),
        }
    }
}

impl Default for PackageInfo {
    fn default() -> Self {
        Self::new(UNDEFINED, UNDEFINED, UNDEFINED, UNDEFINED, UNDEFINED)
    }
}

/// Provider value object: a package asserted to satisfy a dependency
///
/// The name follows the `name.architecture` convention of package keys, but the
/// provider does not have to be a known package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    name: String,
    version: String,
}

impl Provider {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
