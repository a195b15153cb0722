use std::fmt;

use log::warn;

use crate::core::bounded_grid::BoundedGrid;
use crate::core::consts::EMBEDDED_LEVEL;
use crate::core::{Cell, InvalidLevel, Position, Result};

/// Immutable starting layout of a puzzle. Always holds exactly one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    cells: BoundedGrid<Cell>,
    player_start: Position,
}

impl Level {
    /// Parses the usual Sokoban text notation. Empty lines are skipped, a line
    /// of spaces is a row of floor, and shorter rows are padded with floor.
    pub fn parse(text: &str) -> Result<Level> {
        let mut rows = Vec::new();
        for line in text.lines() {
            if line.is_empty() {
                continue;
            }

            let row_index = rows.len();
            let row = line
                .chars()
                .enumerate()
                .map(|(column, symbol)| {
                    Cell::from_symbol(symbol).ok_or(InvalidLevel::UnknownSymbol {
                        symbol,
                        row: row_index,
                        column,
                    })
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Level::from_cells(rows)
    }

    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Level> {
        if rows.iter().all(|row| row.is_empty()) {
            return Err(InvalidLevel::NoRows.into());
        }
        let cells = BoundedGrid::from_rows(rows, Cell::Empty);

        let players: Vec<Position> = cells
            .iter_positions()
            .filter(|pos| cells[pos].has_player())
            .collect();
        let player_start = match players.as_slice() {
            [] => return Err(InvalidLevel::NoPlayer.into()),
            [only] => *only,
            many => return Err(InvalidLevel::MultiplePlayers(many.len()).into()),
        };

        let level = Level { cells, player_start };
        if level.box_count() != level.target_count() {
            warn!(
                "level has {} boxes but {} targets, it cannot be solved",
                level.box_count(),
                level.target_count()
            );
        }
        Ok(level)
    }

    pub fn embedded() -> Result<Level> {
        Level::parse(EMBEDDED_LEVEL)
    }

    pub fn cells(&self) -> &BoundedGrid<Cell> {
        &self.cells
    }

    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    pub fn height(&self) -> i32 {
        self.cells.height()
    }

    pub fn player_start(&self) -> Position {
        self.player_start
    }

    pub fn box_count(&self) -> usize {
        self.count_where(Cell::has_box)
    }

    pub fn target_count(&self) -> usize {
        self.count_where(Cell::is_target)
    }

    fn count_where(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells
            .iter_positions()
            .filter(|pos| predicate(self.cells[pos]))
            .count()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cells, f)
    }
}

/// Text notation, one line per row.
impl fmt::Display for BoundedGrid<Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write;
        for row in self.rows() {
            for cell in row {
                f.write_char(cell.symbol())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
