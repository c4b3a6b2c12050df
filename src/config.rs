/// Board rows/columns for a freshly created session.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Board sizes offered by the stock user interfaces. The core itself
/// accepts any positive size.
pub const BOARD_PRESETS: [usize; 3] = [5, 7, 10];
