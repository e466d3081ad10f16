//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors produced while working with smooth functions point into the **rendered** form of the
//! function they came from (its [`Display`](std::fmt::Display) output), so a report is printed
//! against that string:
//!
//! ```ignore
//! let source = f.to_string();
//! err.build_report("f").eprint(("f", ariadne::Source::from(source))).unwrap();
//! ```

use ariadne::{Color, Report};
use std::{any::Any, fmt::Debug, ops::Range};

// lets `#[derive(ErrorKind)]` resolve `smooth_error::EXPR` in this crate's own tests
#[cfg(test)]
extern crate self as smooth_error;

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so that the concrete kind can be recovered.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of a rendered expression that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the rendered expression that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<K>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use smooth_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = "the operands do not agree",
        labels = ["this one", format!("and this one, {} of them", self.count)],
        help = "pick different operands",
    )]
    struct Disagreement {
        count: usize,
    }

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = "nothing to see", labels = [""])]
    struct Quiet;

    /// Writes the report for `err` against `src` and strips the color codes.
    fn render(err: &Error, src: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(src)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1, 4..5], Disagreement { count: 2 });
        assert!(err.is::<Disagreement>());
        assert!(!err.is::<Quiet>());
        assert_eq!(err.downcast_ref::<Disagreement>(), Some(&Disagreement { count: 2 }));
    }

    #[test]
    fn report_contains_messages() {
        let err = Error::new(vec![0..1, 4..5], Disagreement { count: 2 });
        let report = render(&err, "x + y");
        assert!(report.contains("the operands do not agree"));
        assert!(report.contains("this one"));
        assert!(report.contains("and this one, 2 of them"));
        assert!(report.contains("pick different operands"));
    }

    #[test]
    fn labels_of_mixed_types() {
        // the first label is a `&str`, the second a `String`
        let err = Error::new(vec![0..1, 4..5], Disagreement { count: 3 });
        let report = render(&err, "x + y");
        assert!(report.contains("and this one, 3 of them"));
        assert_eq!(report.matches("this one").count(), 2);
    }

    #[test]
    fn empty_label() {
        let err = Error::new(vec![0..5], Quiet);
        let report = render(&err, "x + y");
        assert!(report.contains("nothing to see"));
    }
}
