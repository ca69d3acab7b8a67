//! Annotation output trait

use alloc::vec::Vec;

use crate::line::Annotation;

/// Receiver of completed-line annotations
///
/// Implemented by the host integration; annotations arrive in the order the
/// lines complete.
pub trait AnnotationSink {
    /// Hand one annotation to the host
    fn put(&mut self, annotation: Annotation);
}

impl AnnotationSink for Vec<Annotation> {
    fn put(&mut self, annotation: Annotation) {
        self.push(annotation);
    }
}

impl<S: AnnotationSink + ?Sized> AnnotationSink for &mut S {
    fn put(&mut self, annotation: Annotation) {
        (**self).put(annotation);
    }
}
