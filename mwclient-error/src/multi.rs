//! Aggregate error values.
//!
//! A single API call can report several independent problems. [`MultiError`]
//! carries all of them as one error value, in the order they were found.
//! It can only be obtained through constructors that return "no error" for an
//! empty input, so a `MultiError` always holds at least one element.

use std::fmt;

/// Any error value that can be stored in a [`MultiError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An ordered, non-empty collection of error values that is itself an error.
///
/// # Example
///
/// ```rust
/// use mwclient_error::{BoxError, MultiError};
///
/// assert!(MultiError::from_errors(Vec::<BoxError>::new()).is_none());
///
/// let errs: Vec<BoxError> = vec!["first".into(), "second".into()];
/// let multi = MultiError::from_errors(errs).unwrap();
/// assert_eq!(multi.len(), 2);
/// assert_eq!(multi.to_string(), "first\nsecond");
/// ```
#[derive(Debug)]
pub struct MultiError {
    errors: Vec<BoxError>,
}

impl MultiError {
    /// Wrap the given errors, or return `None` when there are none.
    pub fn from_errors<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = BoxError>,
    {
        let errors: Vec<BoxError> = errors.into_iter().collect();
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The contained errors, in insertion order
    pub fn errors(&self) -> &[BoxError] {
        &self.errors
    }

    /// Iterate over the contained errors as plain error references
    pub fn iter(&self) -> impl Iterator<Item = &(dyn std::error::Error + Send + Sync + 'static)> {
        self.errors.iter().map(|e| &**e)
    }

    /// Number of contained errors (always at least one)
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The first error found
    pub fn first(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.errors[0]
    }

    /// Consume the aggregate and return the contained errors
    pub fn into_errors(self) -> Vec<BoxError> {
        self.errors
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for MultiError {}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a BoxError;
    type IntoIter = std::slice::Iter<'a, BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl IntoIterator for MultiError {
    type Item = BoxError;
    type IntoIter = std::vec::IntoIter<BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

// =============================================================================
// Errors - accumulator
// =============================================================================

/// Accumulates errors and converts them into an optional [`MultiError`].
///
/// # Example
///
/// ```rust
/// use mwclient_error::Errors;
///
/// let errs = Errors::new();
/// assert!(errs.into_result().is_ok());
///
/// let mut errs = Errors::new();
/// errs.push("badtoken");
/// assert_eq!(errs.into_result().unwrap_err().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Errors {
    errors: Vec<BoxError>,
}

impl Errors {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record an error
    pub fn push(&mut self, err: impl Into<BoxError>) {
        self.errors.push(err.into());
    }

    /// Number of errors recorded so far
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `None` when empty, otherwise a [`MultiError`] of everything recorded
    pub fn err(self) -> Option<MultiError> {
        MultiError::from_errors(self.errors)
    }

    /// `Ok(())` when empty, otherwise `Err` with everything recorded
    pub fn into_result(self) -> Result<(), MultiError> {
        match self.err() {
            Some(multi) => Err(multi),
            None => Ok(()),
        }
    }
}

impl Extend<BoxError> for Errors {
    fn extend<T: IntoIterator<Item = BoxError>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}

impl FromIterator<BoxError> for Errors {
    fn from_iter<T: IntoIterator<Item = BoxError>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl From<Errors> for Option<MultiError> {
    fn from(errs: Errors) -> Self {
        errs.err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorKind};

    fn boxed(msg: &str) -> BoxError {
        msg.into()
    }

    #[test]
    fn test_empty_collapses_to_none() {
        assert!(MultiError::from_errors(Vec::<BoxError>::new()).is_none());
        assert!(Errors::new().err().is_none());
        assert!(Errors::new().into_result().is_ok());

        let collected: Errors = Vec::<BoxError>::new().into_iter().collect();
        assert!(collected.err().is_none());

        let opt: Option<MultiError> = Errors::default().into();
        assert!(opt.is_none());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let multi = MultiError::from_errors(vec![boxed("a"), boxed("b"), boxed("c")]).unwrap();
        let rendered: Vec<String> = multi.iter().map(|e| e.to_string()).collect();
        assert_eq!(rendered, vec!["a", "b", "c"]);
        assert_eq!(multi.first().to_string(), "a");
    }

    #[test]
    fn test_display_one_per_line() {
        let multi = MultiError::from_errors(vec![boxed("first"), boxed("second")]).unwrap();
        assert_eq!(multi.to_string(), "first\nsecond");

        let single = MultiError::from_errors(vec![boxed("only")]).unwrap();
        assert_eq!(single.to_string(), "only");
    }

    #[test]
    fn test_display_is_stable() {
        let build = || MultiError::from_errors(vec![boxed("x"), boxed("y")]).unwrap();
        assert_eq!(build().to_string(), build().to_string());
    }

    #[test]
    fn test_heterogeneous_elements() {
        let mut errs = Errors::new();
        errs.push(Error::new(ErrorKind::MalformedResponse, "bad shape"));
        errs.push(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        errs.push("plain message");
        assert_eq!(errs.len(), 3);

        let multi = errs.err().unwrap();
        assert!(multi.errors()[0].downcast_ref::<Error>().is_some());
        assert!(multi.errors()[1].downcast_ref::<std::io::Error>().is_some());
        assert!(multi.errors()[2].downcast_ref::<Error>().is_none());
    }

    #[test]
    fn test_extend_and_into_errors() {
        let mut errs = Errors::new();
        errs.extend(vec![boxed("a"), boxed("b")]);
        assert!(!errs.is_empty());

        let multi = errs.into_result().unwrap_err();
        assert!(!multi.is_empty());
        let inner = multi.into_errors();
        assert_eq!(inner.len(), 2);
        assert_eq!(inner[1].to_string(), "b");
    }

    #[test]
    fn test_into_iterator() {
        let multi = MultiError::from_errors(vec![boxed("a"), boxed("b")]).unwrap();
        let mut seen = Vec::new();
        for err in &multi {
            seen.push(err.to_string());
        }
        assert_eq!(seen, vec!["a", "b"]);
        assert_eq!(multi.into_iter().count(), 2);
    }

    #[test]
    fn test_multi_error_is_error() {
        let multi = MultiError::from_errors(vec![boxed("x")]).unwrap();
        let as_dyn: &dyn std::error::Error = &multi;
        assert!(as_dyn.source().is_none());
    }
}
