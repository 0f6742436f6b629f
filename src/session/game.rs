//! Turn-driving session.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::snapshot::Snapshot;
use crate::core::{
    ConfigError, Direction, GameConfig, GameRng, Grid, Position, TileRng, BEST_SCORE_KEY, STARTING_TILES,
};
use crate::rules::{can_move, has_won, slide, spawn_tile};
use crate::store::ScoreStore;

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    Playing,
    /// The winning tile has been reached. Play may continue.
    Won,
    /// No move can change the board.
    GameOver,
}

impl GameStatus {
    pub(crate) fn from_flags(won: bool, game_over: bool) -> Self {
        if game_over {
            GameStatus::GameOver
        } else if won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}

/// Everything a presentation layer needs about one accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnSummary {
    /// Direction that was played.
    pub direction: Direction,
    /// Board after the slide and the spawn.
    pub grid: Grid,
    /// Points earned by this move.
    pub score_delta: u64,
    /// Cell the new tile was written to. `None` only if the slide left no
    /// empty cell.
    pub spawned: Option<Position>,
    /// Cells holding a tile produced by a merge this move.
    pub merges: Vec<Position>,
    /// This move reached the winning tile for the first time.
    pub newly_won: bool,
    /// No further move can change the board.
    pub game_over: bool,
}

/// One play session: the current board plus score and flags across turns.
///
/// Best score is read from the [`ScoreStore`] at construction and written
/// back whenever it improves. Spawns draw from `R`.
///
/// ```
/// use rust_2048::core::{Direction, GameConfig};
/// use rust_2048::session::Session;
/// use rust_2048::store::MemoryStore;
///
/// let mut session = Session::with_seed(GameConfig::default(), MemoryStore::new(), 7).unwrap();
/// assert_eq!(session.grid().tile_count(), 2);
///
/// for dir in Direction::ALL {
///     session.apply_move(dir);
/// }
/// assert!(session.score() <= session.best_score());
/// ```
#[derive(Debug)]
pub struct Session<S: ScoreStore, R: TileRng = GameRng> {
    config: GameConfig,
    store: S,
    rng: R,
    grid: Grid,
    score: u64,
    best_score: u64,
    won: bool,
    game_over: bool,
    turn: u64,
    last_spawn: Option<Position>,
    last_merges: Vec<Position>,
}

impl<S: ScoreStore> Session<S, GameRng> {
    /// Start a session whose spawns come from a seeded [`GameRng`].
    pub fn with_seed(config: GameConfig, store: S, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, store, GameRng::new(seed))
    }
}

impl<S: ScoreStore, R: TileRng> Session<S, R> {
    /// Start a new game with two random tiles on an empty board.
    pub fn new(config: GameConfig, store: S, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = fresh_grid(config.size, &mut rng);
        Ok(Self::assemble(config, store, rng, grid))
    }

    /// Start from a caller-supplied board.
    ///
    /// The session counts as won if the board already holds the winning tile.
    /// A stuck board is not flagged up front; the first move attempt on it
    /// ends the game. A board without tiles gets the starting tiles, as in
    /// [`Session::new`].
    pub fn with_grid(config: GameConfig, grid: Grid, store: S, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.size() != config.size {
            return Err(ConfigError::GridSizeMismatch {
                expected: config.size,
                actual: grid.size(),
            });
        }
        let grid = if grid.tile_count() == 0 {
            fresh_grid(config.size, &mut rng)
        } else {
            grid
        };
        let mut session = Self::assemble(config, store, rng, grid);
        session.won = has_won(&session.grid, session.config.win_tile);
        Ok(session)
    }

    fn assemble(config: GameConfig, store: S, rng: R, grid: Grid) -> Self {
        let best_score = store.load(BEST_SCORE_KEY).unwrap_or(0);
        info!(size = config.size, win_tile = config.win_tile, best_score, "new game");

        Self {
            config,
            store,
            rng,
            grid,
            score: 0,
            best_score,
            won: false,
            game_over: false,
            turn: 0,
            last_spawn: None,
            last_merges: Vec::new(),
        }
    }

    // === Turns ===

    /// Play one move.
    ///
    /// Returns `None` when the move is rejected: the game is over, or
    /// nothing would slide or merge. A rejected attempt on a board with no
    /// possible move marks the game over.
    pub fn apply_move(&mut self, direction: Direction) -> Option<TurnSummary> {
        if self.game_over && !self.won {
            debug!(%direction, "move rejected: game over");
            return None;
        }

        let moved = slide(&self.grid, direction);
        if !moved.changed(&self.grid) {
            debug!(%direction, "move rejected: board unchanged");
            if !self.game_over && !can_move(&self.grid) {
                self.finish();
            }
            return None;
        }

        let (grid, spawned) = spawn_tile(&moved.grid, &mut self.rng);
        self.grid = grid;
        self.turn += 1;
        self.score += moved.score;
        self.last_spawn = spawned;
        self.last_merges = moved.merges.clone();

        debug!(
            %direction,
            turn = self.turn,
            gained = moved.score,
            merges = moved.merges.len(),
            "move applied"
        );

        if self.score > self.best_score {
            self.best_score = self.score;
            self.store.save(BEST_SCORE_KEY, self.best_score);
        }

        let newly_won = !self.won && has_won(&self.grid, self.config.win_tile);
        if newly_won {
            self.won = true;
            info!(turn = self.turn, score = self.score, "winning tile reached");
        }

        if !can_move(&self.grid) {
            self.finish();
        }

        Some(TurnSummary {
            direction,
            grid: self.grid.clone(),
            score_delta: moved.score,
            spawned,
            merges: moved.merges,
            newly_won,
            game_over: self.game_over,
        })
    }

    fn finish(&mut self) {
        self.game_over = true;
        info!(turn = self.turn, score = self.score, best_score = self.best_score, "game over");
    }

    /// Discard the current game and start a fresh one. Best score is kept.
    pub fn reset(&mut self) {
        self.grid = fresh_grid(self.config.size, &mut self.rng);
        self.score = 0;
        self.won = false;
        self.game_over = false;
        self.turn = 0;
        self.last_spawn = None;
        self.last_merges.clear();
        info!(best_score = self.best_score, "game reset");
    }

    // === Accessors ===

    /// Read-only copy of the session state.
    #[must_use]
    pub fn state(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            score: self.score,
            best_score: self.best_score,
            game_over: self.game_over,
            won: self.won,
            turn: self.turn,
            last_spawn: self.last_spawn,
            last_merges: self.last_merges.clone(),
        }
    }

    /// Current status derived from the win and game-over flags.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::from_flags(self.won, self.game_over)
    }

    /// Rules this session was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Points scored in this game.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Highest score seen, including earlier games loaded from the store.
    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    /// The winning tile has been reached in this game.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// No move can change the board any more.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Accepted moves since the game started.
    #[must_use]
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Backing score store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Spawn randomness.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

fn fresh_grid<R: TileRng + ?Sized>(size: usize, rng: &mut R) -> Grid {
    (0..STARTING_TILES).fold(Grid::empty(size), |grid, _| spawn_tile(&grid, &mut *rng).0)
}
