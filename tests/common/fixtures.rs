//! Reusable INI fixtures.

/// Shipped defaults used by most tests
pub const GLOBAL_INI: &str = r#"; shipped defaults
[General]
timeout = 5
name = "My Site"
enabled = 1

[Plugins]
Plugins[] = "A"
Plugins[] = "B"

[Mail]
transport = "smtp"
"#;

/// Local file overriding one value
pub const LOCAL_TIMEOUT_10: &str = "[General]\ntimeout = 10\n";
