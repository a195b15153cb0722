use std::collections::VecDeque;

use log::{debug, info};

use crate::config::EngineConfig;
use crate::json_export::Snapshot;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::update::{apply_changes, is_solved, resolve_move};
use crate::core::{
    Cell, Direction, EngineInput, GridChange, InputOutcome, Level, MoveResult, MoveStatus, PlayState,
    Position, Result,
};

/// Everything needed to step one successful move back.
#[derive(Clone, Debug)]
struct HistoryEntry {
    previous_cells: Vec<GridChange>,
    player: Position,
    pushed_box: Option<(Position, Position)>,
    state: PlayState,
}

/// Owns the working copy of a level and applies moves to it.
#[derive(Clone, Debug)]
pub struct GridPuzzleEngine {
    level: Level,
    config: EngineConfig,
    grid: BoundedGrid<Cell>,
    player: Position,
    boxes: Vec<Position>,
    targets: Vec<Position>,
    state: PlayState,
    history: VecDeque<HistoryEntry>,
    move_count: usize,
    push_count: usize,
}

impl GridPuzzleEngine {
    /// Parses and loads a level, rejecting it unless it has exactly one player.
    pub fn load(level_text: &str, config: EngineConfig) -> Result<Self> {
        let level = Level::parse(level_text)?;
        Ok(Self::from_level(level, config))
    }

    pub fn from_level(level: Level, config: EngineConfig) -> Self {
        info!(
            "loaded {}x{} level with {} boxes and {} targets",
            level.width(),
            level.height(),
            level.box_count(),
            level.target_count()
        );
        let grid = level.cells().clone();
        let mut engine = GridPuzzleEngine {
            player: level.player_start(),
            level,
            config,
            grid,
            boxes: Vec::new(),
            targets: Vec::new(),
            state: PlayState::Playing,
            history: VecDeque::new(),
            move_count: 0,
            push_count: 0,
        };
        engine.restore_initial();
        engine
    }

    pub fn new(level: Level) -> Self {
        Self::from_level(level, EngineConfig::default())
    }

    pub fn attempt_move(&mut self, dir: Direction) -> MoveResult {
        if self.state == PlayState::Won && self.config.lock_after_win {
            debug!("ignoring {:?}, puzzle already solved", dir);
            return MoveResult::blocked(true);
        }

        let resolution = resolve_move(&self.grid, self.player, dir);
        if resolution.status == MoveStatus::Blocked {
            debug!("{:?} from {:?} is blocked", dir, self.player);
            return MoveResult::blocked(self.is_won());
        }

        let entry = HistoryEntry {
            previous_cells: resolution
                .changes
                .iter()
                .map(|change| GridChange { position: change.position, cell: self.grid[&change.position] })
                .collect(),
            player: self.player,
            pushed_box: resolution.pushed_box,
            state: self.state,
        };
        self.push_history(entry);

        apply_changes(&mut self.grid, &resolution.changes);
        self.player = resolution.player;
        self.move_count += 1;
        if let Some((from, to)) = resolution.pushed_box {
            self.relocate_box(from, to);
            self.push_count += 1;
        }
        debug!("{:?} -> {:?}, player now at {:?}", dir, resolution.status, self.player);

        self.update_state();
        MoveResult {
            status: resolution.status,
            won: self.is_won(),
            changes: resolution.changes,
        }
    }

    /// Steps back the last successful move. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop_back() else {
            return false;
        };
        apply_changes(&mut self.grid, &entry.previous_cells);
        self.player = entry.player;
        self.move_count -= 1;
        if let Some((from, to)) = entry.pushed_box {
            self.relocate_box(to, from);
            self.push_count -= 1;
        }
        self.state = entry.state;
        debug!("undo, player back at {:?}", self.player);
        true
    }

    pub fn reset(&mut self) {
        self.restore_initial();
        debug!("reset to initial level");
    }

    pub fn apply(&mut self, input: EngineInput) -> InputOutcome {
        match input {
            EngineInput::Move(dir) => InputOutcome::Move(self.attempt_move(dir)),
            EngineInput::Reset => {
                self.reset();
                InputOutcome::Reset
            }
            EngineInput::Undo => InputOutcome::Undone(self.undo()),
            EngineInput::RotateView => InputOutcome::Ignored,
        }
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.grid.get(&pos).copied()
    }

    pub fn grid(&self) -> &BoundedGrid<Cell> {
        &self.grid
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn boxes(&self) -> &[Position] {
        &self.boxes
    }

    pub fn targets(&self) -> &[Position] {
        &self.targets
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == PlayState::Won
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn push_count(&self) -> usize {
        self.push_count
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(self)
    }

    fn restore_initial(&mut self) {
        self.grid = self.level.cells().clone();
        self.player = self.level.player_start();
        self.boxes = self.positions_where(Cell::has_box);
        self.targets = self.positions_where(Cell::is_target);
        self.state = PlayState::Playing;
        self.history.clear();
        self.move_count = 0;
        self.push_count = 0;
    }

    fn positions_where(&self, predicate: impl Fn(Cell) -> bool) -> Vec<Position> {
        self.grid
            .iter_positions()
            .filter(|pos| predicate(self.grid[pos]))
            .collect()
    }

    fn relocate_box(&mut self, from: Position, to: Position) {
        if let Some(b) = self.boxes.iter_mut().find(|b| **b == from) {
            *b = to;
        }
    }

    fn push_history(&mut self, entry: HistoryEntry) {
        if self.config.undo_limit == Some(0) {
            return;
        }
        self.history.push_back(entry);
        if let Some(limit) = self.config.undo_limit {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }
    }

    fn update_state(&mut self) {
        let solved = is_solved(&self.grid, &self.targets);
        let next = if solved { PlayState::Won } else { PlayState::Playing };
        if next == PlayState::Won && self.state == PlayState::Playing {
            info!("puzzle solved in {} moves, {} pushes", self.move_count, self.push_count);
        }
        self.state = next;
    }
}
