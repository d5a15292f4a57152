//! HostResolver port - where the current hostname comes from
//!
//! Hostname lookup (e.g. from an HTTP request) lives outside this crate. The
//! store only consumes the resulting string when it picks the local file.

/// Supplies the hostname used for per-host local config selection.
pub trait HostResolver {
    /// The current hostname, or `None` when there is no host context
    /// (command line runs, background jobs).
    fn current_host(&self) -> Option<String>;
}

impl<T: HostResolver + ?Sized> HostResolver for Box<T> {
    fn current_host(&self) -> Option<String> {
        (**self).current_host()
    }
}
