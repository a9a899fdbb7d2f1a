use thiserror::Error;

/// Failure to find a package or a dependency in the model.
///
/// Lookup failures are fatal for the current run: they propagate through
/// parsing and rendering up to the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("package {package} does not exist")]
    UnknownPackage { package: String },

    #[error("dependency {dependency} for package {package} does not exist")]
    UnknownDependency { package: String, dependency: String },
}

impl LookupError {
    pub fn unknown_package(package: &str) -> Self {
        LookupError::UnknownPackage {
            package: package.to_string(),
        }
    }

    pub fn unknown_dependency(package: &str, dependency: &str) -> Self {
        LookupError::UnknownDependency {
            package: package.to_string(),
            dependency: dependency.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_package_display() {
        let error = LookupError::unknown_package("foo.x86_64");
        assert_eq!(error.to_string(), "package foo.x86_64 does not exist");
    }

    #[test]
    fn test_unknown_dependency_display() {
        let error = LookupError::unknown_dependency("foo.x86_64", "libbar");
        assert_eq!(
            error.to_string(),
            "dependency libbar for package foo.x86_64 does not exist"
        );
    }
}
