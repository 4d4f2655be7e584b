//! Clone capability and the VCS clients implementing it

pub mod git_scm;
pub mod scm_interface;

pub use git_scm::{GitScm, DEFAULT_GIT_EXECUTABLE};
pub use scm_interface::{CloneInvoker, ScmError};
