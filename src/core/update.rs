use crate::core::bounded_grid::BoundedGrid;
use crate::core::{Cell, Direction, GridChange, MoveStatus, Position};

/// Outcome of resolving one move against a grid, before anything is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub status: MoveStatus,
    pub player: Position,
    /// Set only for pushes: where the pushed box came from and where it lands.
    pub pushed_box: Option<(Position, Position)>,
    pub changes: Vec<GridChange>,
}

impl Resolution {
    fn blocked(player: Position) -> Self {
        Resolution {
            status: MoveStatus::Blocked,
            player,
            pushed_box: None,
            changes: Vec::new(),
        }
    }
}

pub fn resolve_move(grid: &BoundedGrid<Cell>, player: Position, dir: Direction) -> Resolution {
    let dest = player.step(dir);
    let Some(&dest_cell) = grid.get(&dest) else {
        return Resolution::blocked(player);
    };
    let origin_cell = grid[&player];

    match dest_cell {
        Cell::Wall | Cell::Player | Cell::PlayerOnTarget => Resolution::blocked(player),
        Cell::Empty | Cell::Target => Resolution {
            status: MoveStatus::Moved,
            player: dest,
            pushed_box: None,
            changes: vec![
                GridChange { position: player, cell: origin_cell.vacated() },
                GridChange { position: dest, cell: dest_cell.with_player() },
            ],
        },
        Cell::Box | Cell::BoxOnTarget => {
            let beyond = dest.step(dir);
            let beyond_cell = match grid.get(&beyond) {
                Some(&cell) if cell.is_walkable() => cell,
                _ => return Resolution::blocked(player),
            };
            Resolution {
                status: MoveStatus::Pushed,
                player: dest,
                pushed_box: Some((dest, beyond)),
                changes: vec![
                    GridChange { position: player, cell: origin_cell.vacated() },
                    GridChange { position: dest, cell: dest_cell.vacated().with_player() },
                    GridChange { position: beyond, cell: beyond_cell.with_box() },
                ],
            }
        }
    }
}

/// Writes a resolution's changes into the grid.
pub fn apply_changes(grid: &mut BoundedGrid<Cell>, changes: &[GridChange]) {
    for change in changes {
        grid[&change.position] = change.cell;
    }
}

/// Every target is covered by a box. A level without targets counts as solved.
pub fn is_solved(grid: &BoundedGrid<Cell>, targets: &[Position]) -> bool {
    targets.iter().all(|target| grid[target] == Cell::BoxOnTarget)
}
