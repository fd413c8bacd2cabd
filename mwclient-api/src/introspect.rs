//! Questions callers ask about an error returned by the classifier.
//!
//! Callers should branch on these helpers instead of downcasting themselves,
//! so they stay independent of how the aggregate is laid out.

use std::error::Error as StdError;

use crate::error::MultiError;
use crate::problem::{ApiError, ApiProblem, ApiWarning, Severity};

/// Downcast `err` to `T`, looking through one `Box<T>` layer.
///
/// `Box<T>` is itself an error, so `Box::new(value).into()` yields a
/// `BoxError` whose concrete type is `Box<T>` rather than `T`.
fn downcast<'a, T: StdError + 'static>(err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    err.downcast_ref::<T>()
        .or_else(|| err.downcast_ref::<Box<T>>().map(|boxed| &**boxed))
}

fn as_multi<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a MultiError> {
    downcast::<MultiError>(err)
}

/// View a single error value as an API-originated problem.
///
/// A value boxed once more on its way into an aggregate is still recognized.
pub fn as_api_problem<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn ApiProblem> {
    if let Some(api_err) = downcast::<ApiError>(err) {
        return Some(api_err);
    }
    if let Some(warning) = downcast::<ApiWarning>(err) {
        return Some(warning);
    }
    None
}

/// Whether `err` is an aggregate made up only of API-originated problems.
///
/// Only a [`MultiError`] is inspected: anything else, including a bare
/// [`ApiError`] or [`ApiWarning`], returns false. Elements that are
/// themselves aggregates count when all of their elements do. An empty
/// aggregate cannot be constructed, so that case never arises.
///
/// "No error" is `None` rather than an error value, so a caller holding the
/// classifier's `Option<MultiError>` short-circuits on it:
/// `problems.as_ref().is_some_and(|m| is_api_err(m))` is false for `None`.
///
/// # Example
///
/// ```rust
/// use mwclient_api::{is_api_err, ApiError, ApiWarning, BoxError, MultiError};
///
/// let errs: Vec<BoxError> = vec![Box::new(ApiError::default()), Box::new(ApiWarning::default())];
/// assert!(is_api_err(&MultiError::from_errors(errs).unwrap()));
///
/// let errs: Vec<BoxError> = vec![Box::new(ApiError::default()), "other".into()];
/// assert!(!is_api_err(&MultiError::from_errors(errs).unwrap()));
///
/// assert!(!is_api_err(&ApiError::default()));
/// ```
pub fn is_api_err(err: &(dyn StdError + 'static)) -> bool {
    match as_multi(err) {
        Some(multi) => multi.iter().all(|e| is_api_originated(e)),
        None => false,
    }
}

fn is_api_originated(err: &(dyn StdError + 'static)) -> bool {
    as_api_problem(err).is_some() || is_api_err(err)
}

/// Every API-originated problem in the aggregate, nested aggregates flattened,
/// in discovery order. Other elements are left out.
pub fn api_problems(multi: &MultiError) -> Vec<&dyn ApiProblem> {
    let mut found = Vec::new();
    collect_problems(multi, &mut found);
    found
}

fn collect_problems<'a>(multi: &'a MultiError, found: &mut Vec<&'a dyn ApiProblem>) {
    for err in multi.iter() {
        if let Some(problem) = as_api_problem(err) {
            found.push(problem);
        } else if let Some(nested) = as_multi(err) {
            collect_problems(nested, found);
        }
    }
}

/// Whether `err` reports a rejected request, either as a bare [`ApiError`]
/// or anywhere inside an aggregate.
pub fn has_fatal(err: &(dyn StdError + 'static)) -> bool {
    if let Some(multi) = as_multi(err) {
        return api_problems(multi)
            .iter()
            .any(|p| p.severity() == Severity::Fatal);
    }
    as_api_problem(err).is_some_and(|p| p.severity() == Severity::Fatal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BoxError, Error, ErrorKind, Errors};

    fn multi(errs: Vec<BoxError>) -> MultiError {
        MultiError::from_errors(errs).unwrap()
    }

    fn other(msg: &str) -> BoxError {
        Box::new(std::io::Error::new(std::io::ErrorKind::Other, msg.to_string()))
    }

    fn boxed<E: StdError + Send + Sync + 'static>(err: E) -> BoxError {
        Box::new(err)
    }

    #[test]
    fn test_is_api_err_matrix() {
        let cases: Vec<(BoxError, bool)> = vec![
            (boxed(multi(vec![boxed(ApiError::default())])), true),
            (boxed(multi(vec![boxed(ApiWarning::default())])), true),
            (
                boxed(multi(vec![
                    boxed(ApiError::default()),
                    boxed(ApiWarning::default()),
                ])),
                true,
            ),
            (boxed(multi(vec![other("not API err/warn")])), false),
            (
                boxed(multi(vec![boxed(ApiError::default()), other("other")])),
                false,
            ),
            (
                boxed(multi(vec![
                    other("other"),
                    boxed(ApiError::default()),
                    boxed(ApiWarning::default()),
                ])),
                false,
            ),
            (other("not even a multierr"), false),
        ];

        for (i, (err, expected)) in cases.iter().enumerate() {
            assert_eq!(
                is_api_err(err.as_ref()),
                *expected,
                "(test {}) err: {}",
                i,
                err
            );
        }
    }

    #[test]
    fn test_bare_api_values_are_not_aggregates() {
        assert!(!is_api_err(&ApiError::new("nouser", "x")));
        assert!(!is_api_err(&ApiWarning::new("main", "x")));
    }

    #[test]
    fn test_internal_error_is_not_api() {
        let err = multi(vec![
            boxed(ApiWarning::default()),
            boxed(Error::new(ErrorKind::MalformedResponse, "bad")),
        ]);
        assert!(!is_api_err(&err));
    }

    #[test]
    fn test_nested_aggregates() {
        let inner = multi(vec![boxed(ApiWarning::default())]);
        let outer = multi(vec![boxed(ApiError::default()), boxed(inner)]);
        assert!(is_api_err(&outer));

        let tainted = multi(vec![boxed(ApiWarning::default()), other("x")]);
        let outer = multi(vec![boxed(ApiError::default()), boxed(tainted)]);
        assert!(!is_api_err(&outer));
    }

    #[test]
    fn test_boxed_elements_are_recognized() {
        let mut errs = Errors::new();
        errs.push(Box::new(ApiError::new("nouser", "The user parameter must be set")));
        errs.push(Box::new(ApiWarning::new("tokens", "Action 'x' is not allowed")));
        let multi = errs.err().unwrap();

        assert!(as_api_problem(&*multi.errors()[0]).is_some());
        assert!(is_api_err(&multi));
        assert!(has_fatal(&multi));
        assert_eq!(api_problems(&multi).len(), 2);

        let mut outer = Errors::new();
        outer.push(ApiWarning::new("main", "x"));
        outer.push(Box::new(multi));
        let outer = outer.err().unwrap();
        assert!(is_api_err(&outer));
        assert_eq!(api_problems(&outer).len(), 3);

        let owned: Box<MultiError> = Box::new(outer);
        assert!(is_api_err(&owned));

        let mut tainted = Errors::new();
        tainted.push(Box::new(ApiWarning::default()));
        tainted.push(Box::new(Error::new(ErrorKind::MalformedResponse, "bad")));
        assert!(!is_api_err(&tainted.err().unwrap()));
    }

    #[test]
    fn test_no_problems_is_not_api_err() {
        let problems: Option<MultiError> = None;
        assert!(!problems.as_ref().is_some_and(|m| is_api_err(m)));

        let problems = MultiError::from_errors(vec![boxed(ApiWarning::default())]);
        assert!(problems.as_ref().is_some_and(|m| is_api_err(m)));
    }

    #[test]
    fn test_as_api_problem() {
        let warning = ApiWarning::new("tokens", "not allowed");
        let problem = as_api_problem(&warning).unwrap();
        assert_eq!(problem.module(), Some("tokens"));
        assert_eq!(problem.info(), "not allowed");

        assert!(as_api_problem(other("x").as_ref()).is_none());
    }

    #[test]
    fn test_api_problems_flattens() {
        let inner = multi(vec![boxed(ApiWarning::new("b", "second"))]);
        let outer = multi(vec![
            boxed(ApiWarning::new("a", "first")),
            other("skipped"),
            boxed(inner),
        ]);
        let infos: Vec<&str> = api_problems(&outer).into_iter().map(|p| p.info()).collect();
        assert_eq!(infos, vec!["first", "second"]);
    }

    #[test]
    fn test_has_fatal() {
        let warnings_only = multi(vec![boxed(ApiWarning::default())]);
        assert!(!has_fatal(&warnings_only));

        let rejected = multi(vec![
            boxed(ApiWarning::default()),
            boxed(ApiError::new("badtoken", "Invalid CSRF token.")),
        ]);
        assert!(has_fatal(&rejected));

        assert!(has_fatal(&ApiError::default()));
        assert!(!has_fatal(other("x").as_ref()));
    }
}
