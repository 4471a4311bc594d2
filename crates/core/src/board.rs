//! Board module - one game session
//!
//! Ties the grid, the color source and the resolver together and applies
//! player moves. A move is atomic: either the swap produces at least one run
//! and the whole cascade is kept, or the grid is restored from a snapshot and
//! the move costs the fixed penalty.

use log::{debug, info};

use crate::error::{ConfigError, IllegalMove};
use crate::grid::Grid;
use crate::moves::{parse_move, validate};
use crate::resolver::{self, CascadeStep, Resolution, Run};
use crate::rng::{ColorSource, SimpleRng};
use crate::types::{ColorId, Move, UNPRODUCTIVE_PENALTY};
use crate::BoardConfig;

/// Result of a validated move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The swap produced at least one run and the board changed
    pub accepted: bool,
    /// Points earned, or the penalty for a swap that matched nothing
    pub score_delta: i32,
    /// Clearing passes in the cascade (0 when rejected)
    pub passes: usize,
    /// Runs cleared by the cascade, in order
    pub runs: Vec<Run>,
}

impl MoveOutcome {
    fn rejected() -> Self {
        Self {
            accepted: false,
            score_delta: UNPRODUCTIVE_PENALTY,
            passes: 0,
            runs: Vec::new(),
        }
    }
}

impl From<Resolution> for MoveOutcome {
    fn from(res: Resolution) -> Self {
        Self {
            accepted: res.accepted,
            score_delta: res.score,
            passes: res.passes,
            runs: res.runs,
        }
    }
}

/// A game board: grid plus the color source that refills it
#[derive(Debug, Clone)]
pub struct Board<S: ColorSource = SimpleRng> {
    grid: Grid,
    source: S,
    total_score: i32,
    accepted_moves: u32,
    rejected_moves: u32,
}

impl Board<SimpleRng> {
    /// Create a random board from `config`
    ///
    /// Matches present in the initial fill are resolved before returning and
    /// award no score. Without a configured seed one is taken from the clock.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(clock_seed);
        Self::with_source(config, SimpleRng::new(seed))
    }
}

impl<S: ColorSource> Board<S> {
    /// Create a random board drawing every color from `source`
    pub fn with_source(config: BoardConfig, mut source: S) -> Result<Self, ConfigError> {
        let mut grid = Grid::random(config.width, config.height, config.n_colors, &mut source)?;
        let setup = resolver::resolve(&mut grid, &mut source);
        info!(
            "new {}x{} board with {} colors ({} setup pass(es) discarded)",
            config.width, config.height, config.n_colors, setup.passes
        );

        Ok(Self::from_grid(grid, source))
    }

    /// Wrap an existing grid without resolving it
    ///
    /// Used for literal test boards and replays.
    pub fn from_grid(grid: Grid, source: S) -> Self {
        Self {
            grid,
            source,
            total_score: 0,
            accepted_moves: 0,
            rejected_moves: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Sum of every score delta returned so far, penalties included
    pub fn total_score(&self) -> i32 {
        self.total_score
    }

    /// Validated moves applied so far, accepted or not
    pub fn moves_played(&self) -> u32 {
        self.accepted_moves + self.rejected_moves
    }

    pub fn accepted_moves(&self) -> u32 {
        self.accepted_moves
    }

    pub fn rejected_moves(&self) -> u32 {
        self.rejected_moves
    }

    /// Parse, validate and apply a move token
    ///
    /// An [`IllegalMove`] leaves the board untouched and is not counted.
    pub fn apply_move(&mut self, token: &str) -> Result<MoveOutcome, IllegalMove> {
        self.apply_move_observed(token, |_, _| {})
    }

    /// [`Board::apply_move`], reporting every cascade step to `observe`
    pub fn apply_move_observed<F>(
        &mut self,
        token: &str,
        observe: F,
    ) -> Result<MoveOutcome, IllegalMove>
    where
        F: FnMut(CascadeStep, &Grid),
    {
        let mv = match parse_move(token, self.width(), self.height()) {
            Ok(mv) => mv,
            Err(err) => {
                debug!("illegal move {:?}: {}", token, err);
                return Err(err);
            }
        };
        self.apply_observed(mv, observe)
    }

    /// Apply an already-built move
    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, IllegalMove> {
        self.apply_observed(mv, |_, _| {})
    }

    /// [`Board::apply`], reporting every cascade step to `observe`
    ///
    /// A rejected swap is rolled back without any step being reported.
    pub fn apply_observed<F>(&mut self, mv: Move, observe: F) -> Result<MoveOutcome, IllegalMove>
    where
        F: FnMut(CascadeStep, &Grid),
    {
        validate(&mv, self.width(), self.height())?;

        let backup = self.grid.snapshot();
        let (a, b) = mv.cells();
        self.grid.swap(a, b);

        let resolution = resolver::resolve_observed(&mut self.grid, &mut self.source, observe);
        let outcome = if resolution.accepted {
            self.accepted_moves += 1;
            MoveOutcome::from(resolution)
        } else {
            self.grid.restore(&backup);
            self.rejected_moves += 1;
            MoveOutcome::rejected()
        };

        self.total_score = self.total_score.saturating_add(outcome.score_delta);
        debug!(
            "{} swap {:?}<->{:?}: accepted={} delta={} total={}",
            mv.axis.as_str(),
            a,
            b,
            outcome.accepted,
            outcome.score_delta,
            self.total_score
        );
        Ok(outcome)
    }
}

/// Create a random, already-resolved board with a clock-derived seed
pub fn new_board(
    width: usize,
    height: usize,
    n_colors: ColorId,
) -> Result<Board<SimpleRng>, ConfigError> {
    Board::new(BoardConfig::new(width, height, n_colors))
}

/// Apply a move token to `board`; see [`Board::apply_move`]
pub fn apply_move<S: ColorSource>(
    board: &mut Board<S>,
    token: &str,
) -> Result<MoveOutcome, IllegalMove> {
    board.apply_move(token)
}

fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
