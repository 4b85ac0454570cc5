use std::fmt;

use crate::{GridError, GridSpec};

/// Floating point tolerance used when checking probability sums.
pub const PROB_TOLERANCE: f64 = 1e-9;

/// Probability that a move lands in the intended direction.
pub const P_INTENDED: f64 = 0.8;
/// Probability of slipping into each direction orthogonal to the intended one.
pub const P_LATERAL: f64 = 0.1;

/// Entry reward for a goal cell.
pub const REWARD_GOAL: f64 = 1.0;
/// Entry reward for a hole cell.
pub const REWARD_HOLE: f64 = -1.0;
/// Default entry reward for start and frozen cells.
pub const DEFAULT_STEP_REWARD: f64 = 0.1;

const DIRECTIONAL_ACTIONS: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];
const ABSORBING_ACTIONS: [Action; 1] = [Action::Absorb];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Tag of one grid cell.
pub enum Cell {
    Start,
    Frozen,
    Hole,
    Goal,
}

impl Cell {
    /// Parse a single-character cell tag.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'S' => Some(Cell::Start),
            'F' => Some(Cell::Frozen),
            'H' => Some(Cell::Hole),
            'G' => Some(Cell::Goal),
            _ => None,
        }
    }

    /// Return the single-character tag for this cell.
    pub fn tag(self) -> char {
        match self {
            Cell::Start => 'S',
            Cell::Frozen => 'F',
            Cell::Hole => 'H',
            Cell::Goal => 'G',
        }
    }

    /// Holes and goals end an episode on entry.
    pub fn is_terminal(self) -> bool {
        matches!(self, Cell::Hole | Cell::Goal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Agent state: a grid coordinate, or the sink entered after a terminal cell.
pub enum GridState {
    Cell { row: usize, col: usize },
    Absorbing,
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridState::Cell { row, col } => write!(f, "({row}, {col})"),
            GridState::Absorbing => f.write_str("absorbing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Symbolic action token. `Absorb` is the only action of terminal and
/// absorbing states.
pub enum Action {
    Up,
    Right,
    Down,
    Left,
    Absorb,
}

impl Action {
    fn delta(self) -> Option<(isize, isize)> {
        match self {
            Action::Up => Some((-1, 0)),
            Action::Right => Some((0, 1)),
            Action::Down => Some((1, 0)),
            Action::Left => Some((0, -1)),
            Action::Absorb => None,
        }
    }

    /// The two directions orthogonal to this one. The reverse direction is
    /// never a slip outcome.
    fn lateral(self) -> Option<[Action; 2]> {
        match self {
            Action::Up | Action::Down => Some([Action::Left, Action::Right]),
            Action::Left | Action::Right => Some([Action::Up, Action::Down]),
            Action::Absorb => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Up => "up",
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
            Action::Absorb => "absorb",
        })
    }
}

#[derive(Debug, Clone)]
/// Runtime form of a validated grid: immutable geometry plus the entry
/// reward for non-terminal cells.
pub struct GridWorld {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    start: (usize, usize),
    step_reward: f64,
}

impl GridWorld {
    /// Compile and validate a spec into the runtime representation.
    pub(crate) fn from_spec(spec: &GridSpec) -> Result<Self, GridError> {
        spec.validate()?;

        let rows = spec.rows.len();
        let cols = spec.rows[0].chars().count();
        let mut cells = Vec::with_capacity(rows * cols);
        let mut start = None;

        for (row, line) in spec.rows.iter().enumerate() {
            for (col, tag) in line.chars().enumerate() {
                let cell = Cell::from_tag(tag).ok_or(GridError::UnknownTag { row, col, tag })?;
                if cell == Cell::Start {
                    start = Some((row, col));
                }
                cells.push(cell);
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;

        Ok(Self {
            cells,
            rows,
            cols,
            start,
            step_reward: spec.step_reward.unwrap_or(DEFAULT_STEP_REWARD),
        })
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry reward paid by start and frozen cells.
    pub fn step_reward(&self) -> f64 {
        self.step_reward
    }

    /// Return the state of the unique start cell.
    pub fn start_state(&self) -> GridState {
        GridState::Cell {
            row: self.start.0,
            col: self.start.1,
        }
    }

    /// Tag of the cell at `(row, col)`, or `None` off the grid.
    ///
    /// This is the read-only query policies use to inspect the map.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Whether a state ends the episode: the absorbing state, or a hole or
    /// goal cell.
    pub fn is_terminal(&self, state: GridState) -> bool {
        match state {
            GridState::Absorbing => true,
            GridState::Cell { row, col } => self.cell(row, col).is_some_and(Cell::is_terminal),
        }
    }

    /// Legal actions for a state. Active cells move in the four compass
    /// directions; terminal cells and the absorbing state only absorb.
    pub fn actions(&self, state: GridState) -> &'static [Action] {
        if self.is_terminal(state) {
            &ABSORBING_ACTIONS
        } else {
            &DIRECTIONAL_ACTIONS
        }
    }

    /// Reward collected on *entering* a state.
    pub fn reward(&self, state: GridState) -> f64 {
        match state {
            GridState::Absorbing => 0.0,
            GridState::Cell { row, col } => match self.cell(row, col) {
                Some(Cell::Hole) => REWARD_HOLE,
                Some(Cell::Goal) => REWARD_GOAL,
                Some(Cell::Start | Cell::Frozen) => self.step_reward,
                None => 0.0,
            },
        }
    }

    /// Stochastic outcome distribution for `(state, action)`.
    ///
    /// Terminal states and the absorbing state transition to the absorbing
    /// state with probability 1 regardless of the chosen action. Active
    /// cells produce three weighted outcomes: the intended direction and
    /// the two lateral slips, each clamped at grid boundaries. Outcomes
    /// that land on the same cell stay separate entries; the list is a set
    /// of weighted alternatives, not a normalized mass function.
    pub fn transition(
        &self,
        state: GridState,
        action: Action,
    ) -> Result<Vec<(GridState, f64)>, GridError> {
        let (row, col) = match state {
            GridState::Absorbing => return Ok(vec![(GridState::Absorbing, 1.0)]),
            GridState::Cell { row, col } => (row, col),
        };

        if self.cell(row, col).is_none() {
            return Err(GridError::OutOfBounds { row, col });
        }

        if self.is_terminal(state) {
            return Ok(vec![(GridState::Absorbing, 1.0)]);
        }

        let Some(laterals) = action.lateral() else {
            return Err(GridError::IllegalAction { state, action });
        };

        let mut outcomes = Vec::with_capacity(3);
        for (candidate, prob) in [
            (action, P_INTENDED),
            (laterals[0], P_LATERAL),
            (laterals[1], P_LATERAL),
        ] {
            let (next_row, next_col) = self.clamped_move(row, col, candidate);
            outcomes.push((
                GridState::Cell {
                    row: next_row,
                    col: next_col,
                },
                prob,
            ));
        }

        Ok(outcomes)
    }

    /// Sample one `(next_state, entry_reward, next_is_terminal)` transition
    /// using a uniform random sample in `[0, 1)`.
    pub fn sample_transition(
        &self,
        state: GridState,
        action: Action,
        sample: f64,
    ) -> Result<(GridState, f64, bool), GridError> {
        let outcomes = self.transition(state, action)?;

        let mut cdf = Vec::with_capacity(outcomes.len());
        let mut cumulative = 0.0_f64;
        for &(_, prob) in &outcomes {
            cumulative += prob;
            cdf.push(cumulative);
        }

        let mut chosen_idx = cdf.partition_point(|p| *p < sample);
        if chosen_idx >= outcomes.len() {
            chosen_idx = outcomes.len() - 1;
        }

        let (next, _) = outcomes[chosen_idx];
        Ok((next, self.reward(next), self.is_terminal(next)))
    }

    /// Landing coordinate for a move, clamped at the boundary: attempting
    /// to step off the grid leaves the agent in place.
    fn clamped_move(&self, row: usize, col: usize, action: Action) -> (usize, usize) {
        let Some((d_row, d_col)) = action.delta() else {
            return (row, col);
        };

        let next_row = row as isize + d_row;
        let next_col = col as isize + d_col;
        if next_row < 0
            || next_col < 0
            || next_row >= self.rows as isize
            || next_col >= self.cols as isize
        {
            return (row, col);
        }

        (next_row as usize, next_col as usize)
    }
}
