/// Same-value connected regions and wall-bounded flood fill
pub mod region;
/// Dense visited bitmap for grid searches
pub mod visited;
