//! Metrics library boundary

/// A metrics library that a [`MetricsHandle`](super::MetricsHandle) forwards to.
///
/// Arguments are passed through exactly as the caller supplied them; range
/// checking, bucketing and aggregation are the library's business.
pub trait MetricsLibrary: Send {
    /// Prepare the library for sending
    fn init(&mut self);

    /// Send a sample for a histogram with `nbuckets` buckets in `[min, max]`
    fn send_to_uma(&mut self, name: &str, sample: i32, min: i32, max: i32, nbuckets: i32) -> bool;

    /// Send an enumeration sample in `[0, max)`
    fn send_enum_to_uma(&mut self, name: &str, sample: i32, max: i32) -> bool;
}

impl<L: MetricsLibrary + ?Sized> MetricsLibrary for Box<L> {
    fn init(&mut self) {
        (**self).init()
    }

    fn send_to_uma(&mut self, name: &str, sample: i32, min: i32, max: i32, nbuckets: i32) -> bool {
        (**self).send_to_uma(name, sample, min, max, nbuckets)
    }

    fn send_enum_to_uma(&mut self, name: &str, sample: i32, max: i32) -> bool {
        (**self).send_enum_to_uma(name, sample, max)
    }
}
