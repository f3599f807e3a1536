//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every outbound history request URL and its outcome.
    pub log_fetch: bool,

    /// Log view-state transitions (loading / ready / failed) and dropped
    /// stale responses.
    pub log_transitions: bool,

    /// Log the parsed sample count and date range after each decode.
    pub log_parse: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_transitions: true,
    log_parse: false,
};
