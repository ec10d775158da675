//! Tests for verbosity to filter mapping

#[cfg(test)]
mod tests {
    use cellgrid::io::configuration::{DEFAULT_LOG_FILTER, TRACE_LOG_FILTER, VERBOSE_LOG_FILTER};
    use cellgrid::io::logging::{build_filter, filter_for_verbosity};

    // Tests each -v count selects the matching directive
    // Verified by capping verbosity at one
    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for_verbosity(0), DEFAULT_LOG_FILTER);
        assert_eq!(filter_for_verbosity(1), VERBOSE_LOG_FILTER);
        assert_eq!(filter_for_verbosity(2), TRACE_LOG_FILTER);
        assert_eq!(filter_for_verbosity(u8::MAX), TRACE_LOG_FILTER);
    }

    // Tests every built-in directive parses into a filter
    // Verified by introducing a typo in the trace directive
    #[test]
    fn test_build_filter_accepts_defaults() {
        for verbosity in 0..=2 {
            assert!(build_filter(verbosity).is_ok());
        }
    }
}
