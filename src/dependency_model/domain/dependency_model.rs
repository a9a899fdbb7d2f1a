use super::{LookupError, PackageInfo, Provider};
use std::collections::BTreeMap;

/// Outcome of an additive insertion into the model
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    /// The key was already present; the model was left untouched
    AlreadyPresent,
}

impl Insertion {
    pub fn is_inserted(self) -> bool {
        matches!(self, Insertion::Inserted)
    }
}

/// One node of the owned package tree.
///
/// `info` is present only for packages described in the info report
/// (internal packages). Entries created by the dependency report alone carry
/// dependencies but no attributes.
#[derive(Debug, Clone, Default)]
struct PackageEntry {
    info: Option<PackageInfo>,
    dependencies: BTreeMap<String, Vec<Provider>>,
}

/// DependencyModel aggregate holding packages, dependencies and providers
///
/// Built once per run by the report parsers and queried read-only by the
/// formatters. Keys are kept in `BTreeMap`s so every listing comes out sorted.
#[derive(Debug, Clone, Default)]
pub struct DependencyModel {
    entries: BTreeMap<String, PackageEntry>,
}

impl DependencyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an internal package, keeping the first definition on duplicates
    ///
    /// An (empty) dependency entry is ensured for the key.
    pub fn add_package(&mut self, key: &str, info: PackageInfo) -> Insertion {
        let entry = self.entries.entry(key.to_string()).or_default();
        if entry.info.is_some() {
            return Insertion::AlreadyPresent;
        }
        entry.info = Some(info);
        Insertion::Inserted
    }

    /// Declares a dependency with an empty provider list
    ///
    /// The owning entry is created on the fly when the package was never
    /// described in the info report.
    pub fn add_dependency(&mut self, package: &str, dependency: &str) -> Insertion {
        let entry = self.entries.entry(package.to_string()).or_default();
        if entry.dependencies.contains_key(dependency) {
            return Insertion::AlreadyPresent;
        }
        entry
            .dependencies
            .insert(dependency.to_string(), Vec::new());
        Insertion::Inserted
    }

    /// Appends a provider to an already declared dependency
    ///
    /// # Errors
    /// Returns a `LookupError` (and leaves the model untouched) when the
    /// package or the dependency has not been declared yet.
    pub fn add_provider(
        &mut self,
        package: &str,
        dependency: &str,
        provider: Provider,
    ) -> Result<(), LookupError> {
        let entry = self
            .entries
            .get_mut(package)
            .ok_or_else(|| LookupError::unknown_package(package))?;
        let providers = entry
            .dependencies
            .get_mut(dependency)
            .ok_or_else(|| LookupError::unknown_dependency(package, dependency))?;
        providers.push(provider);
        Ok(())
    }

    /// Returns the full attribute record of an internal package
    pub fn package(&self, key: &str) -> Result<&PackageInfo, LookupError> {
        self.entries
            .get(key)
            .and_then(|entry| entry.info.as_ref())
            .ok_or_else(|| LookupError::unknown_package(key))
    }

    pub fn arch(&self, key: &str) -> Result<&str, LookupError> {
        Ok(&self.package(key)?.arch)
    }

    pub fn version(&self, key: &str) -> Result<&str, LookupError> {
        Ok(&self.package(key)?.version)
    }

    pub fn release(&self, key: &str) -> Result<&str, LookupError> {
        Ok(&self.package(key)?.release)
    }

    pub fn repository(&self, key: &str) -> Result<&str, LookupError> {
        Ok(&self.package(key)?.repository)
    }

    pub fn summary(&self, key: &str) -> Result<&str, LookupError> {
        Ok(&self.package(key)?.summary)
    }

    /// Internal package keys in ascending order
    pub fn package_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.info.is_some())
            .map(|(key, _)| key.as_str())
    }

    pub fn package_count(&self) -> usize {
        self.package_keys().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted dependency names declared for a package
    pub fn dependency_list(&self, package: &str) -> Result<Vec<&str>, LookupError> {
        Ok(self
            .dependencies(package)?
            .keys()
            .map(String::as_str)
            .collect())
    }

    /// Providers of a dependency, in the order they were added
    pub fn provider_list(
        &self,
        package: &str,
        dependency: &str,
    ) -> Result<&[Provider], LookupError> {
        self.dependencies(package)?
            .get(dependency)
            .map(Vec::as_slice)
            .ok_or_else(|| LookupError::unknown_dependency(package, dependency))
    }

    pub fn is_internal_package(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| entry.info.is_some())
    }

    /// A dependency is internal when at least one provider is an internal package
    pub fn is_internal_dependency(
        &self,
        package: &str,
        dependency: &str,
    ) -> Result<bool, LookupError> {
        Ok(self
            .provider_list(package, dependency)?
            .iter()
            .any(|provider| self.is_internal_package(provider.name())))
    }

    pub fn dependency_count(&self, package: &str) -> Result<usize, LookupError> {
        Ok(self.dependencies(package)?.len())
    }

    pub fn provider_count(&self, package: &str, dependency: &str) -> Result<usize, LookupError> {
        Ok(self.provider_list(package, dependency)?.len())
    }

    /// Dependencies a report should show for a package
    ///
    /// With `include_external` the full sorted list is returned, otherwise only
    /// the internal dependencies.
    pub fn effective_dependency_list(
        &self,
        package: &str,
        include_external: bool,
    ) -> Result<Vec<&str>, LookupError> {
        let all = self.dependency_list(package)?;
        if include_external {
            return Ok(all);
        }

        let mut internal = Vec::with_capacity(all.len());
        for dependency in all {
            if self.is_internal_dependency(package, dependency)? {
                internal.push(dependency);
            }
        }
        Ok(internal)
    }

    fn dependencies(&self, package: &str) -> Result<&BTreeMap<String, Vec<Provider>>, LookupError> {
        self.entries
            .get(package)
            .map(|entry| &entry.dependencies)
            .ok_or_else(|| LookupError::unknown_package(package))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(arch: &str, version: &str) -> PackageInfo {
        PackageInfo::new(arch, version, "1.el7", "base/7/x86_64", "test package")
    }

    fn sample_model() -> DependencyModel {
        let mut model = DependencyModel::new();
        let _ = model.add_package("foo.x86_64", info("x86_64", "1.0"));
        let _ = model.add_package("bar.x86_64", info("x86_64", "2.0"));

        let _ = model.add_dependency("foo.x86_64", "libz");
        let _ = model.add_dependency("foo.x86_64", "libbar");
        let _ = model.add_dependency("foo.x86_64", "libc");
        model
            .add_provider("foo.x86_64", "libbar", Provider::new("bar.x86_64", "2.0"))
            .unwrap();
        model
            .add_provider("foo.x86_64", "libc", Provider::new("glibc.x86_64", "2.17"))
            .unwrap();
        model
            .add_provider("foo.x86_64", "libz", Provider::new("zlib.i686", "1.2"))
            .unwrap();
        model
            .add_provider("foo.x86_64", "libz", Provider::new("bar.x86_64", "2.0"))
            .unwrap();
        model
    }

    #[test]
    fn test_add_package_and_accessors() {
        let mut model = DependencyModel::new();
        let result = model.add_package(
            "foo.x86_64",
            PackageInfo::new("x86_64", "1.0", "3", "updates", "a tool"),
        );

        assert_eq!(result, Insertion::Inserted);
        assert_eq!(model.arch("foo.x86_64").unwrap(), "x86_64");
        assert_eq!(model.version("foo.x86_64").unwrap(), "1.0");
        assert_eq!(model.release("foo.x86_64").unwrap(), "3");
        assert_eq!(model.repository("foo.x86_64").unwrap(), "updates");
        assert_eq!(model.summary("foo.x86_64").unwrap(), "a tool");
        assert_eq!(model.dependency_count("foo.x86_64").unwrap(), 0);
    }

    #[test]
    fn test_add_package_duplicate_keeps_first_definition() {
        let mut model = DependencyModel::new();
        let _ = model.add_package("foo.x86_64", info("x86_64", "1.0"));
        let result = model.add_package("foo.x86_64", info("x86_64", "9.9"));

        assert_eq!(result, Insertion::AlreadyPresent);
        assert_eq!(model.version("foo.x86_64").unwrap(), "1.0");
        assert_eq!(model.package_count(), 1);
    }

    #[test]
    fn test_add_package_keeps_dependencies_added_earlier() {
        let mut model = DependencyModel::new();
        let _ = model.add_dependency("foo.x86_64", "libbar");
        let result = model.add_package("foo.x86_64", info("x86_64", "1.0"));

        assert!(result.is_inserted());
        assert_eq!(model.dependency_list("foo.x86_64").unwrap(), vec!["libbar"]);
    }

    #[test]
    fn test_accessors_fail_for_unknown_package() {
        let model = DependencyModel::new();
        let err = model.version("missing.noarch").unwrap_err();
        assert_eq!(err, LookupError::unknown_package("missing.noarch"));
        assert!(model.arch("missing.noarch").is_err());
        assert!(model.release("missing.noarch").is_err());
        assert!(model.repository("missing.noarch").is_err());
        assert!(model.summary("missing.noarch").is_err());
    }

    #[test]
    fn test_add_dependency_creates_owner_entry() {
        let mut model = DependencyModel::new();
        let result = model.add_dependency("ghost.x86_64", "libfoo");

        assert_eq!(result, Insertion::Inserted);
        assert!(!model.is_internal_package("ghost.x86_64"));
        assert_eq!(
            model.dependency_list("ghost.x86_64").unwrap(),
            vec!["libfoo"]
        );
        // Owner entries created by the dependency report have no attributes
        assert!(model.version("ghost.x86_64").is_err());
    }

    #[test]
    fn test_add_dependency_duplicate_keeps_providers() {
        let mut model = sample_model();
        let result = model.add_dependency("foo.x86_64", "libz");

        assert_eq!(result, Insertion::AlreadyPresent);
        assert_eq!(model.provider_count("foo.x86_64", "libz").unwrap(), 2);
    }

    #[test]
    fn test_add_provider_unknown_dependency_does_not_mutate() {
        let mut model = sample_model();
        let err = model
            .add_provider("foo.x86_64", "libmissing", Provider::new("x.noarch", "1"))
            .unwrap_err();

        assert_eq!(
            err,
            LookupError::unknown_dependency("foo.x86_64", "libmissing")
        );
        assert_eq!(model.dependency_count("foo.x86_64").unwrap(), 3);
        assert!(model.provider_list("foo.x86_64", "libmissing").is_err());
    }

    #[test]
    fn test_add_provider_unknown_package() {
        let mut model = DependencyModel::new();
        let err = model
            .add_provider(
                "nobody.x86_64",
                "libc",
                Provider::new("glibc.x86_64", "2.17"),
            )
            .unwrap_err();

        assert_eq!(err, LookupError::unknown_package("nobody.x86_64"));
        assert!(model.is_empty());
    }

    #[test]
    fn test_dependency_list_is_sorted() {
        let model = sample_model();
        assert_eq!(
            model.dependency_list("foo.x86_64").unwrap(),
            vec!["libbar", "libc", "libz"]
        );
    }

    #[test]
    fn test_provider_list_keeps_insertion_order() {
        let model = sample_model();
        let providers = model.provider_list("foo.x86_64", "libz").unwrap();
        let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["zlib.i686", "bar.x86_64"]);
    }

    #[test]
    fn test_internal_classification() {
        let model = sample_model();
        assert!(model.is_internal_package("bar.x86_64"));
        assert!(!model.is_internal_package("glibc.x86_64"));

        assert!(model
            .is_internal_dependency("foo.x86_64", "libbar")
            .unwrap());
        assert!(model.is_internal_dependency("foo.x86_64", "libz").unwrap());
        assert!(!model.is_internal_dependency("foo.x86_64", "libc").unwrap());
        assert!(model
            .is_internal_dependency("foo.x86_64", "libnone")
            .is_err());
    }

    #[test]
    fn test_effective_dependency_list() {
        let model = sample_model();
        assert_eq!(
            model.effective_dependency_list("foo.x86_64", true).unwrap(),
            vec!["libbar", "libc", "libz"]
        );
        assert_eq!(
            model
                .effective_dependency_list("foo.x86_64", false)
                .unwrap(),
            vec!["libbar", "libz"]
        );
    }

    #[test]
    fn test_effective_dependency_list_without_dependencies() {
        let model = sample_model();
        assert!(model
            .effective_dependency_list("bar.x86_64", true)
            .unwrap()
            .is_empty());
        assert!(model
            .effective_dependency_list("bar.x86_64", false)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_counts_fail_for_unknown_keys() {
        let model = sample_model();
        assert!(model.dependency_count("nope.x86_64").is_err());
        assert!(model.provider_count("foo.x86_64", "nope").is_err());
        assert!(model.provider_count("nope.x86_64", "libc").is_err());
    }

    #[test]
    fn test_package_keys_skip_dependency_only_entries() {
        let mut model = sample_model();
        let _ = model.add_dependency("ghost.x86_64", "libfoo");

        let keys: Vec<&str> = model.package_keys().collect();
        assert_eq!(keys, vec!["bar.x86_64", "foo.x86_64"]);
        assert_eq!(model.package_count(), 2);
    }
}
