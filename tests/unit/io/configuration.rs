//! Tests for grid limits, glyphs and runtime defaults

#[cfg(test)]
mod tests {
    use cellgrid::io::configuration::{
        DEFAULT_LOG_FILTER, DEFAULT_SET_COLOR, DEFAULT_UNSET_COLOR, MAX_GRID_DIMENSION,
        ROW_SEPARATOR, SET_GLYPH, TRACE_LOG_FILTER, UNKNOWN_GLYPH, UNSET_GLYPH,
        VERBOSE_LOG_FILTER,
    };

    // Tests maximum grid dimension value fits the coordinate type
    // Verified by raising the limit past i32::MAX
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
        assert!(i32::try_from(MAX_GRID_DIMENSION).is_ok());
    }

    // Tests rendering glyphs are distinct
    // Verified by setting both boolean glyphs to '#'
    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs = [SET_GLYPH, UNSET_GLYPH, UNKNOWN_GLYPH, ROW_SEPARATOR];
        for (i, a) in glyphs.iter().enumerate() {
            for b in glyphs.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    // Tests unset pixels are transparent and set pixels opaque
    // Verified by swapping the palette defaults
    #[test]
    fn test_default_colors() {
        assert_eq!(DEFAULT_UNSET_COLOR.last(), Some(&0));
        assert_eq!(DEFAULT_SET_COLOR.last(), Some(&255));
    }

    // Tests log filters grow more verbose with each level
    // Verified by reusing the default filter for -v
    #[test]
    fn test_log_filters() {
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
        assert!(VERBOSE_LOG_FILTER.contains("cellgrid=debug"));
        assert!(TRACE_LOG_FILTER.contains("cellgrid=trace"));
    }
}
