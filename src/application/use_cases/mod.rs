/// Use cases module containing application business logic orchestration
mod mine_dependencies;

pub use mine_dependencies::MineDependenciesUseCase;
