pub mod coordinate;
pub mod descriptor;

pub use coordinate::Coordinate;
pub use descriptor::{Descriptor, ParentRef, RawDependency, POM_NAMESPACE};
