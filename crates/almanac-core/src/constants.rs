/// Calendar defaults shared across crates.
///
/// Events registered without an explicit calendar land on the default
/// calendar; it is created on first use and identified by this slug.
pub const DEFAULT_CALENDAR_NAME: &str = "default";
pub const DEFAULT_CALENDAR_SLUG: &str = "default";
