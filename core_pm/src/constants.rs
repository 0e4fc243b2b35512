/// Smallest number of rows that leaves a movable interior
pub const MIN_GRID_SIZE: usize = 4;

/// Grids bigger than this are still generated, but take noticeably long to build and draw
pub const LARGE_GRID_SIZE: usize = 512;

/// Shown whenever a submitted number of rows is rejected
pub const INVALID_SIZE_MESSAGE: &str = "Number of rows must be a number and greater than 4";

/// Number of rows held by a fresh session, before the user types anything
pub const INITIAL_ROWS_INPUT: &str = "0";

pub const KEY_CODE_LEFT: u8 = 37;
pub const KEY_CODE_UP: u8 = 38;
pub const KEY_CODE_RIGHT: u8 = 39;
pub const KEY_CODE_DOWN: u8 = 40;
