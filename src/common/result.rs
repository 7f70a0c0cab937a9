use crate::common::error::PkgdevError;

/// Result alias used throughout pkgdev
///
/// # Examples
///
/// ```
/// use pkgdev::common::result::PkgdevResult;
/// use pkgdev::common::error::PkgdevError;
///
/// fn example_function() -> PkgdevResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> PkgdevResult<()> {
///     Err(PkgdevError::internal_error("Something went wrong"))
/// }
/// ```
pub type PkgdevResult<T> = Result<T, PkgdevError>;

/// Conversion helpers from foreign `Result`s into `PkgdevResult`
pub trait ResultExt<T, E> {
    /// Wrap an I/O failure as a filesystem error tagged with `path`
    ///
    /// ```
    /// use pkgdev::common::result::{PkgdevResult, ResultExt};
    ///
    /// let result: Result<String, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound, "file not found"
    /// ));
    /// let result: PkgdevResult<String> = result.with_filesystem_error("read failed", None);
    /// assert!(result.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> PkgdevResult<T>
    where
        E: Into<std::io::Error>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> PkgdevResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| PkgdevError::filesystem_error_with_source(message, path, e.into()))
    }
}
