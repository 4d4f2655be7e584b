pub mod directory_provisioner;
pub mod path_resolver;

pub use directory_provisioner::DirectoryProvisioner;
pub use path_resolver::{PathResolver, PathResolverError, ResolvedDestination};
