/// Dependency model layer
///
/// - `domain`: the package/dependency/provider tree and its queries
/// - `services`: line classifiers and the two report parsers populating the model
pub mod domain;
pub mod services;
