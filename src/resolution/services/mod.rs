mod dependency_traverser;
mod descriptor_loader;
mod parent_chain_walker;
mod property_resolver;
mod version_resolver;

pub use dependency_traverser::{DependencyTraverser, Traversal};
pub use descriptor_loader::DescriptorLoader;
pub use parent_chain_walker::ParentChainWalker;
pub use property_resolver::PropertyResolver;
pub use version_resolver::{VersionResolver, RECURSION_LIMIT};
