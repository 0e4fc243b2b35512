use crate::constants::INVALID_SIZE_MESSAGE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submitted number of rows was not turned into a grid
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SubmitError {
    /// Not a whole number, or fewer than [`MIN_GRID_SIZE`](crate::constants::MIN_GRID_SIZE) rows
    #[error("{}", INVALID_SIZE_MESSAGE)]
    InvalidSize {
        /// What the user had typed
        input: String,
    },
}
