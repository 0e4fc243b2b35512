//! [`SessionState`] is the single source of truth for the grid and the cursor
//!
//! It is only ever changed through [`SessionState::dispatch`] (or the typed methods it calls),
//! and each call runs to completion before the next, so a renderer holding `&SessionState`
//! always sees a consistent state.

use crate::constants::{INITIAL_ROWS_INPUT, LARGE_GRID_SIZE, MIN_GRID_SIZE};
use crate::error::SubmitError;
use crate::grid::{generate_grid, CellKind, Coordinate, Direction, Grid};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// An intent from one of the input sources
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// The size field was edited; carries its new raw text
    SetSize(String),
    /// The size form was submitted
    Submit,
    /// A key was pressed; carries its key code
    Move(u32),
}

/// Which of the three states the session is in, derived from [`SessionState`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No grid and no error
    Uninitialized,
    /// A grid is present and the cursor is on it
    Ready,
    /// The last submission was rejected
    Errored,
}

/// What should be drawn at a raw grid index
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellView {
    Border,
    Interior,
    /// The cursor, facing the given way
    Cursor(Direction),
}

/// Everything the renderer needs
///
/// Serializable so a host can snapshot a session and restore it later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    rows_input: String,
    grid: Option<Grid>,
    error: Option<SubmitError>,
    coordinate: Coordinate,
    direction: Direction,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            rows_input: INITIAL_ROWS_INPUT.to_string(),
            grid: None,
            error: None,
            coordinate: Coordinate::default(),
            direction: Direction::default(),
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one [`Action`]
    pub fn dispatch(&mut self, action: Action) {
        debug!("Dispatching {action:?}");
        match action {
            Action::SetSize(raw) => self.set_size(raw),
            Action::Submit => {
                // the error is kept in the state for the renderer
                let _ = self.submit();
            }
            Action::Move(code) => {
                self.move_key(code);
            }
        }
    }

    /// Hold a new raw number of rows, and drop any grid or error
    pub fn set_size(&mut self, raw: impl Into<String>) {
        self.rows_input = raw.into();
        self.error = None;
        self.grid = None;
    }

    /// Validate the held number of rows and generate a grid from it
    ///
    /// On failure the error is also stored, see [`SessionState::error_message`].
    /// The facing direction is kept either way.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        match self.parsed_rows() {
            Some(rows) if rows >= MIN_GRID_SIZE => {
                if rows > LARGE_GRID_SIZE {
                    warn!("Generating a {rows}x{rows} grid, this may take a while");
                }
                self.grid = Some(generate_grid(rows));
                self.error = None;
                self.coordinate = Coordinate::default();
                info!("Generated a {rows}x{rows} grid");
                Ok(())
            }
            _ => {
                let error = SubmitError::InvalidSize {
                    input: self.rows_input.clone(),
                };
                warn!("Rejected number of rows {:?}", self.rows_input);
                self.grid = None;
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Move the cursor for a key press; returns whether the cursor moved
    ///
    /// Keys other than the arrow keys are ignored.
    pub fn move_key(&mut self, code: u32) -> bool {
        match Direction::from_key_code(code) {
            Some(direction) => self.move_direction(direction),
            None => false,
        }
    }

    /// Step the cursor one cell; returns whether the cursor moved
    ///
    /// Moves that would leave the interior, or that happen without a grid, change nothing,
    /// including the facing direction.
    pub fn move_direction(&mut self, direction: Direction) -> bool {
        let Some(grid) = &self.grid else {
            return false;
        };
        // largest valid interior index, size - 3
        let max = grid.interior_size().saturating_sub(1);
        let Coordinate { x, y } = self.coordinate;

        let next = match direction {
            Direction::Up if y > 0 => Coordinate::new(x, y - 1),
            Direction::Down if y < max => Coordinate::new(x, y + 1),
            Direction::Left if x > 0 => Coordinate::new(x - 1, y),
            Direction::Right if x < max => Coordinate::new(x + 1, y),
            _ => {
                debug!("Rejected move {direction:?} from {:?}", self.coordinate);
                return false;
            }
        };

        self.coordinate = next;
        self.direction = direction;
        true
    }

    pub fn phase(&self) -> Phase {
        if self.grid.is_some() {
            Phase::Ready
        } else if self.error.is_some() {
            Phase::Errored
        } else {
            Phase::Uninitialized
        }
    }

    /// The raw number of rows, as last set
    pub fn rows_input(&self) -> &str {
        &self.rows_input
    }

    /// The held number of rows, if it is a whole number
    pub fn parsed_rows(&self) -> Option<usize> {
        self.rows_input.trim().parse().ok()
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn error(&self) -> Option<&SubmitError> {
        self.error.as_ref()
    }

    /// The message to show the user, if the last submission failed
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// What to draw at raw grid index `(row, col)`, or `None` outside the grid
    ///
    /// The cursor's [`Coordinate`] is in interior space, so it covers the cell at
    /// `(y + 1, x + 1)`.
    pub fn cell_view(&self, row: usize, col: usize) -> Option<CellView> {
        let kind = self.grid.as_ref()?.get(row, col)?;
        if self.coordinate.grid_index() == (row, col) {
            return Some(CellView::Cursor(self.direction));
        }
        Some(match kind {
            CellKind::Border => CellView::Border,
            CellKind::Interior => CellView::Interior,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        INVALID_SIZE_MESSAGE, KEY_CODE_DOWN, KEY_CODE_LEFT, KEY_CODE_RIGHT, KEY_CODE_UP,
    };
    use proptest::prelude::*;

    fn ready(rows: &str) -> SessionState {
        let mut state = SessionState::new();
        state.dispatch(Action::SetSize(rows.to_string()));
        state.dispatch(Action::Submit);
        assert_eq!(state.phase(), Phase::Ready);
        state
    }

    #[test]
    fn initial_state() {
        let state = SessionState::new();
        assert_eq!(state.phase(), Phase::Uninitialized);
        assert_eq!(state.rows_input(), "0");
        assert_eq!(state.parsed_rows(), Some(0));
        assert_eq!(state.grid(), None);
        assert_eq!(state.error_message(), None);
        assert_eq!(state.coordinate(), Coordinate::new(0, 0));
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn submit_without_editing() {
        let mut state = SessionState::new();
        state.dispatch(Action::Submit);
        assert_eq!(state.phase(), Phase::Errored);
    }

    #[test]
    fn submit_not_a_number() {
        let mut state = SessionState::new();
        state.dispatch(Action::SetSize("abc".to_string()));
        assert_eq!(
            state.submit(),
            Err(SubmitError::InvalidSize {
                input: "abc".to_string()
            })
        );
        assert_eq!(state.phase(), Phase::Errored);
        assert_eq!(state.error_message().as_deref(), Some(INVALID_SIZE_MESSAGE));
        assert_eq!(state.grid(), None);
    }

    #[test]
    fn submit_too_small() {
        for rows in ["3", "0", "-5", "", "4.5"] {
            let mut state = SessionState::new();
            state.dispatch(Action::SetSize(rows.to_string()));
            state.dispatch(Action::Submit);
            assert_eq!(state.phase(), Phase::Errored, "{rows:?} should be rejected");
            assert_eq!(
                state.error_message().as_deref(),
                Some("Number of rows must be a number and greater than 4")
            );
            assert_eq!(state.grid(), None);
        }
    }

    #[test]
    fn submit_valid() {
        let state = ready("5");
        let grid = state.grid().unwrap();
        assert_eq!(grid.size(), 5);
        assert_eq!(state.coordinate(), Coordinate::new(0, 0));
        assert_eq!(state.error_message(), None);

        // the floor itself is accepted, and whitespace is ignored
        assert_eq!(ready("4").grid().unwrap().size(), 4);
        assert_eq!(ready(" 6 ").grid().unwrap().size(), 6);
    }

    #[test]
    fn only_whole_numbers_are_sizes() {
        // scientific notation and hex are not read as numbers of rows
        for rows in ["1e1", "0x10", "+"] {
            let mut state = SessionState::new();
            state.set_size(rows);
            assert!(state.submit().is_err(), "{rows:?} should be rejected");
            assert_eq!(state.phase(), Phase::Errored);
            assert_eq!(state.parsed_rows(), None);
        }
    }

    #[test]
    fn large_grids_are_still_generated() {
        let rows = LARGE_GRID_SIZE + 1;
        let mut state = ready(&rows.to_string());
        assert_eq!(state.grid().unwrap().size(), rows);
        for _ in 0..rows {
            state.move_direction(Direction::Right);
        }
        assert_eq!(state.coordinate(), Coordinate::new(rows - 3, 0));
    }

    #[test]
    fn snapshot_and_restore() {
        let config = bincode::config::standard();

        let mut state = ready("6");
        state.move_direction(Direction::Right);
        state.move_direction(Direction::Down);
        let bytes = bincode::serde::encode_to_vec(&state, config).unwrap();
        let (mut restored, _): (SessionState, usize) =
            bincode::serde::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.phase(), Phase::Ready);

        // the restored session keeps moving from where it was
        assert!(restored.move_direction(Direction::Right));
        assert_eq!(restored.coordinate(), Coordinate::new(2, 1));
        assert_eq!(restored.cell_view(2, 3), Some(CellView::Cursor(Direction::Right)));

        let mut errored = SessionState::new();
        errored.set_size("abc");
        errored.dispatch(Action::Submit);
        let bytes = bincode::serde::encode_to_vec(&errored, config).unwrap();
        let (restored, _): (SessionState, usize) =
            bincode::serde::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(restored.phase(), Phase::Errored);
        assert_eq!(restored.error_message().as_deref(), Some(INVALID_SIZE_MESSAGE));
        assert_eq!(restored.rows_input(), "abc");
    }

    #[test]
    fn resubmit_clears_error_and_resets_cursor() {
        let mut state = ready("6");
        state.move_direction(Direction::Right);
        state.move_direction(Direction::Down);
        assert_eq!(state.coordinate(), Coordinate::new(1, 1));

        state.set_size("x");
        assert!(state.submit().is_err());
        state.set_size("7");
        assert!(state.submit().is_ok());
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.coordinate(), Coordinate::new(0, 0));
        // direction is not reset
        assert_eq!(state.direction(), Direction::Down);
    }

    #[test]
    fn moves_from_origin() {
        let mut state = ready("5");

        state.dispatch(Action::Move(KEY_CODE_UP as u32));
        assert_eq!(state.coordinate(), Coordinate::new(0, 0));
        assert_eq!(state.direction(), Direction::Right);

        state.dispatch(Action::Move(KEY_CODE_LEFT as u32));
        assert_eq!(state.coordinate(), Coordinate::new(0, 0));
        assert_eq!(state.direction(), Direction::Right);

        state.dispatch(Action::Move(KEY_CODE_RIGHT as u32));
        assert_eq!(state.coordinate(), Coordinate::new(1, 0));
        assert_eq!(state.direction(), Direction::Right);

        state.dispatch(Action::Move(KEY_CODE_DOWN as u32));
        assert_eq!(state.coordinate(), Coordinate::new(1, 1));
        assert_eq!(state.direction(), Direction::Down);
    }

    #[test]
    fn rejected_move_keeps_direction() {
        let mut state = ready("5");
        assert!(state.move_direction(Direction::Right));
        assert!(state.move_direction(Direction::Right));
        assert_eq!(state.coordinate(), Coordinate::new(2, 0));
        assert!(state.move_direction(Direction::Down));
        assert!(state.move_direction(Direction::Down));
        assert_eq!(state.coordinate(), Coordinate::new(2, 2));
        assert_eq!(state.direction(), Direction::Down);

        // 2 is the largest interior index of a 5x5 grid
        assert!(!state.move_direction(Direction::Right));
        assert!(!state.move_direction(Direction::Down));
        assert_eq!(state.coordinate(), Coordinate::new(2, 2));
        assert_eq!(state.direction(), Direction::Down);

        assert!(state.move_direction(Direction::Up));
        assert_eq!(state.direction(), Direction::Up);
        assert!(!state.move_direction(Direction::Right));
        assert_eq!(state.direction(), Direction::Up);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut state = ready("5");
        let before = state.clone();
        for code in [0, 13, 32, 36, 41, 65, 38 + 256] {
            assert!(!state.move_key(code));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn set_size_clears_everything() {
        let mut state = ready("5");
        state.set_size("8");
        assert_eq!(state.phase(), Phase::Uninitialized);
        assert_eq!(state.grid(), None);

        state.set_size("nope");
        state.dispatch(Action::Submit);
        assert_eq!(state.phase(), Phase::Errored);
        state.dispatch(Action::SetSize("nope".to_string()));
        assert_eq!(state.phase(), Phase::Uninitialized);
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn move_without_grid() {
        let mut state = SessionState::new();
        for dir in Direction::get_all() {
            assert!(!state.move_direction(dir));
        }
        assert_eq!(state.coordinate(), Coordinate::new(0, 0));
        assert_eq!(state.direction(), Direction::Right);

        state.set_size("2");
        state.dispatch(Action::Submit);
        assert_eq!(state.phase(), Phase::Errored);
        state.dispatch(Action::Move(KEY_CODE_DOWN as u32));
        assert_eq!(state.coordinate(), Coordinate::new(0, 0));
        assert_eq!(state.direction(), Direction::Right);

        // editing the size after moving drops the grid, so moves stop working
        let mut state = ready("5");
        state.set_size("6");
        assert!(!state.move_direction(Direction::Right));
        assert_eq!(state.coordinate(), Coordinate::new(0, 0));
    }

    #[test]
    fn cursor_is_offset_into_the_interior() {
        let mut state = ready("5");
        assert_eq!(state.cell_view(0, 0), Some(CellView::Border));
        assert_eq!(state.cell_view(1, 1), Some(CellView::Cursor(Direction::Right)));
        assert_eq!(state.cell_view(1, 2), Some(CellView::Interior));
        assert_eq!(state.cell_view(5, 0), None);

        state.move_direction(Direction::Right);
        state.move_direction(Direction::Down);
        // (x, y) = (1, 1) is raw (row 2, col 2)
        assert_eq!(state.cell_view(2, 2), Some(CellView::Cursor(Direction::Down)));
        assert_eq!(state.cell_view(1, 1), Some(CellView::Interior));

        let cursors = (0..5)
            .flat_map(|row| (0..5).map(move |col| (row, col)))
            .filter(|&(row, col)| matches!(state.cell_view(row, col), Some(CellView::Cursor(_))))
            .count();
        assert_eq!(cursors, 1);

        assert_eq!(SessionState::new().cell_view(0, 0), None);
    }

    proptest! {
        #[test]
        fn cursor_stays_in_interior(
            rows in 4usize..12,
            keys in prop::collection::vec(
                prop::sample::select(vec![37u32, 38, 39, 40, 0, 65]),
                0..64,
            ),
        ) {
            let mut state = SessionState::new();
            state.set_size(rows.to_string());
            prop_assert!(state.submit().is_ok());
            for key in keys {
                let before = state.clone();
                let moved = state.move_key(key);
                let Coordinate { x, y } = state.coordinate();
                prop_assert!(x <= rows - 3 && y <= rows - 3);
                if moved {
                    prop_assert_eq!(Some(state.direction()), Direction::from_key_code(key));
                } else {
                    prop_assert_eq!(&state, &before);
                }
                let (row, col) = state.coordinate().grid_index();
                prop_assert_eq!(state.grid().unwrap()[(row, col)], CellKind::Interior);
            }
        }
    }
}
