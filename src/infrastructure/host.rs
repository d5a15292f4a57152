//! HostResolver implementations
//!
//! - `NoHost` - never selects a per-host file
//! - `FixedHost` - a hostname known up front (tests, single-tenant hosts)
//! - `EnvHost` - reads the hostname from an environment variable, e.g. one
//!   set by the web server for each virtual host

use crate::domain::ports::HostResolver;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoHost;

impl HostResolver for NoHost {
    fn current_host(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct FixedHost(Option<String>);

impl FixedHost {
    pub fn new(host: impl Into<String>) -> Self {
        Self(Some(host.into()))
    }
}

impl HostResolver for FixedHost {
    fn current_host(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Debug, Clone)]
pub struct EnvHost {
    var: String,
}

impl EnvHost {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl HostResolver for EnvHost {
    fn current_host(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|h| h.trim().to_lowercase())
            .filter(|h| !h.is_empty())
    }
}
