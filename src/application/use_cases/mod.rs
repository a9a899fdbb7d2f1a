/// Use cases module containing application business logic orchestration
mod build_dependency_model;

pub use build_dependency_model::BuildDependencyModelUseCase;
