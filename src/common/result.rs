use crate::common::error::BatchCloneError;

/// Result alias used across the crate.
///
/// # Examples
///
/// ```
/// use batch_clone::common::result::BatchCloneResult;
/// use batch_clone::common::error::BatchCloneError;
///
/// fn example_function() -> BatchCloneResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> BatchCloneResult<()> {
///     Err(BatchCloneError::config_error("basePath is empty", None))
/// }
/// ```
pub type BatchCloneResult<T> = Result<T, BatchCloneError>;

/// Attach a file path to I/O and deserialization failures.
pub trait ResultExt<T, E> {
    /// Map a deserializer error into a `ParseError` for `path`.
    fn parse_context(self, path: &std::path::Path) -> BatchCloneResult<T>
    where
        E: std::error::Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn parse_context(self, path: &std::path::Path) -> BatchCloneResult<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.map_err(|e| {
            BatchCloneError::parse_error_with_source(
                e.to_string(),
                Some(path.to_path_buf()),
                e,
            )
        })
    }
}
