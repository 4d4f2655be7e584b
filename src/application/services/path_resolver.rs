//! Destination path computation for repository descriptors.
//!
//! Paths are joined lexically: `.` segments are dropped and `..` pops the
//! previous component. Nothing stops a `path` override from climbing out of
//! the base path; callers get [`ResolvedDestination::escapes_base`] to notice.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::entities::batch_config::RepositoryDescriptor;
use crate::domain::value_objects::repo_name::{RepoName, RepoNameError};

#[derive(Debug, Error, PartialEq)]
pub enum PathResolverError {
    #[error("No destination for {url}: {source}")]
    Unresolvable {
        url: String,
        #[source]
        source: RepoNameError,
    },
}

/// Where a descriptor will be cloned, and how that was decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDestination {
    pub path: PathBuf,
    /// True when the `path` override was used instead of the URL name
    pub from_override: bool,
    /// True when the cleaned destination is not below the base path
    pub escapes_base: bool,
}

#[derive(Debug, Clone)]
pub struct PathResolver {
    base_path: PathBuf,
}

impl PathResolver {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn resolve(
        &self,
        descriptor: &RepositoryDescriptor,
    ) -> Result<ResolvedDestination, PathResolverError> {
        let (path, from_override) = match descriptor.path_override() {
            Some(sub_path) => (join_clean(&self.base_path, Path::new(sub_path)), true),
            None => {
                let name = RepoName::from_url(&descriptor.url).map_err(|source| {
                    PathResolverError::Unresolvable {
                        url: descriptor.url.clone(),
                        source,
                    }
                })?;
                (join_clean(&self.base_path, Path::new(name.as_str())), false)
            }
        };

        let escapes_base = !is_within(&path, &clean(&self.base_path));
        if escapes_base {
            warn!(
                url = %descriptor.url,
                destination = %path.display(),
                base = %self.base_path.display(),
                "destination lies outside the base path"
            );
        }
        debug!(
            url = %descriptor.url,
            destination = %path.display(),
            from_override,
            "resolved destination"
        );

        Ok(ResolvedDestination {
            path,
            from_override,
            escapes_base,
        })
    }
}

/// Join `relative` onto `base` and clean the result lexically.
///
/// Root and prefix components of `relative` are ignored, so an absolute
/// override still lands under `base`.
pub fn join_clean(base: &Path, relative: &Path) -> PathBuf {
    let relative_parts = relative
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)));
    clean_components(base.components().chain(relative_parts))
}

/// Whether a cleaned `path` lies at or below a cleaned `base`.
///
/// A base of `.` cleans to a `CurDir` component that joined paths never
/// carry, so there only a leading `..` leaves the base.
fn is_within(path: &Path, base: &Path) -> bool {
    if base == Path::new(".") {
        return !matches!(path.components().next(), Some(Component::ParentDir));
    }
    path.starts_with(base)
}

/// Lexically clean a single path.
pub fn clean(path: &Path) -> PathBuf {
    clean_components(path.components())
}

fn clean_components<'a>(components: impl Iterator<Item = Component<'a>>) -> PathBuf {
    let mut parts: Vec<Component<'a>> = Vec::new();

    for component in components {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // ".." at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(base: &str, descriptor: RepositoryDescriptor) -> ResolvedDestination {
        PathResolver::new(base).resolve(&descriptor).unwrap()
    }

    #[test]
    fn test_name_derived_from_url() {
        let resolved = resolve(
            "/work",
            RepositoryDescriptor::new("https://example.com/group/project.git", "main"),
        );
        assert_eq!(resolved.path, PathBuf::from("/work/project"));
        assert!(!resolved.from_override);
        assert!(!resolved.escapes_base);
    }

    #[test]
    fn test_path_override_is_joined() {
        let resolved = resolve(
            "/work",
            RepositoryDescriptor::new("https://example.com/group/project.git", "main")
                .with_path("libs/core"),
        );
        assert_eq!(resolved.path, PathBuf::from("/work/libs/core"));
        assert!(resolved.from_override);
    }

    #[test]
    fn test_absolute_override_stays_under_base() {
        let resolved = resolve(
            "/work",
            RepositoryDescriptor::new("u.git", "main").with_path("/abs/dir"),
        );
        assert_eq!(resolved.path, PathBuf::from("/work/abs/dir"));
    }

    #[test]
    fn test_traversal_is_not_sanitized() {
        let resolved = resolve(
            "/work/base",
            RepositoryDescriptor::new("u.git", "main").with_path("../../etc"),
        );
        assert_eq!(resolved.path, PathBuf::from("/etc"));
        assert!(resolved.escapes_base);
    }

    #[test]
    fn test_relative_base_path() {
        let resolved = resolve(
            "./repos",
            RepositoryDescriptor::new("https://example.com/x/tool.git", "main"),
        );
        assert_eq!(resolved.path, PathBuf::from("repos/tool"));
        assert!(!resolved.escapes_base);
    }

    #[test]
    fn test_current_directory_base_path() {
        for base in [".", "./", "a/.."] {
            let resolved = resolve(
                base,
                RepositoryDescriptor::new("https://example.com/g/project.git", "main"),
            );
            assert_eq!(resolved.path, PathBuf::from("project"), "base {base:?}");
            assert!(!resolved.escapes_base, "base {base:?}");
        }

        let resolved = resolve(
            ".",
            RepositoryDescriptor::new("u.git", "main").with_path("../outside"),
        );
        assert_eq!(resolved.path, PathBuf::from("../outside"));
        assert!(resolved.escapes_base);
    }

    #[test]
    fn test_empty_url_is_unresolvable() {
        let error = PathResolver::new("/work")
            .resolve(&RepositoryDescriptor::new("", "main"))
            .unwrap_err();
        assert_eq!(
            error,
            PathResolverError::Unresolvable {
                url: String::new(),
                source: RepoNameError::EmptyUrl,
            }
        );
    }

    #[test]
    fn test_override_wins_over_unusable_url() {
        let resolved = resolve(
            "/work",
            RepositoryDescriptor::new("", "main").with_path("named"),
        );
        assert_eq!(resolved.path, PathBuf::from("/work/named"));
    }

    #[test]
    fn test_clean_handles_dot_segments() {
        assert_eq!(clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(clean(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(clean(Path::new("../a/..")), PathBuf::from(".."));
        assert_eq!(clean(Path::new("a/..")), PathBuf::from("."));
    }
}
