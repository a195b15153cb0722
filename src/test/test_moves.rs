#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right() {
        let level = r#"
#@ #
"#;
        let mut game = GameTestState::new(level);
        let result = game.assert_move(Right);

        let expected_level = r#"
# @#
"#;
        game.assert_matches(expected_level);
        assert_eq!(MoveStatus::Moved, result.status);
    }

    #[test]
    fn when_push_pushes() {
        let level = r#"
#@$ #
"#;
        let mut game = GameTestState::new(level);
        let result = game.assert_move(Right);

        let expected_level = r#"
# @$#
"#;
        game.assert_matches(expected_level);
        assert_eq!(MoveStatus::Pushed, result.status);
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks() {
        let level = r#"
#@$$ #
"#;
        let mut game = GameTestState::new(level);
        game.assert_blocked(Right);

        let expected_level = r#"
#@$$ #
"#;
        game.assert_matches(expected_level);
    }

    #[test]
    fn when_block_pushed_into_wall_is_blocked() {
        let mut game = GameTestState::new(r#"
#@$#
"#);
        game.assert_blocked(Right);
        game.assert_matches("#@$#");
    }

    #[test]
    fn when_block_pushed_onto_box_on_target_is_blocked() {
        let mut game = GameTestState::new(r#"
#@$*.#
"#);
        game.assert_blocked(Right);
    }

    #[test]
    fn when_walled_in_every_direction_is_blocked() {
        let mut game = GameTestState::new(r#"
###
#@#
###
"#);
        for dir in Direction::ALL {
            game.assert_blocked(dir);
        }
    }

    #[test]
    fn when_moving_off_grid_is_blocked() {
        let mut game = GameTestState::new("@ ");
        game.assert_blocked(Up);
        game.assert_blocked(Left);
        game.assert_move(Right);
        game.assert_blocked(Right);
    }

    #[test]
    fn when_box_pushed_off_grid_is_blocked() {
        let mut game = GameTestState::new(r#"
 @$
"#);
        game.assert_blocked(Right);
        game.assert_matches(" @$");
    }

    #[test]
    fn wall_adjacent_moves_never_change_the_grid() {
        let size = 5;
        for z in 1..size - 1 {
            for x in 1..size - 1 {
                let mut rows = vec![vec![Cell::Wall; size]; size];
                for row in rows.iter_mut().take(size - 1).skip(1) {
                    row[1..size - 1].fill(Cell::Empty);
                }
                rows[z][x] = Cell::Player;
                let level = Level::from_cells(rows.clone()).unwrap();
                let mut game = GameTestState { engine: GridPuzzleEngine::new(level) };

                let pos = Position::new(x as i32, z as i32);
                for dir in Direction::ALL {
                    let next = pos.step(dir);
                    if rows[next.z as usize][next.x as usize] == Cell::Wall {
                        game.assert_blocked(dir);
                    }
                }
            }
        }
    }

    #[test]
    fn when_move_onto_target_player_stands_on_target() {
        let mut game = GameTestState::new(r#"
#@.#
"#);
        let result = game.assert_move(Right);
        game.assert_matches("# +#");
        assert_eq!(
            vec![
                GridChange { position: Position::new(1, 0), cell: Cell::Empty },
                GridChange { position: Position::new(2, 0), cell: Cell::PlayerOnTarget },
            ],
            result.changes
        );

        game.assert_move(Left);
        game.assert_matches("#@.#");
    }

    #[test]
    fn when_leaving_target_it_is_restored() {
        let mut game = GameTestState::new(r#"
#+ #
"#);
        game.assert_move(Right);
        game.assert_matches("#.@#");
    }

    #[test]
    fn moving_onto_floor_leaves_boxes_in_place() {
        let mut game = GameTestState::new(r#"
######
#@ $.#
#  . #
# $  #
######
"#);
        let boxes_before = game.engine.boxes().to_vec();
        game.assert_move(Down);
        game.assert_move(Right);
        game.assert_move(Right);
        assert_eq!(boxes_before, game.engine.boxes());
        assert_eq!(Position::new(3, 2), game.engine.player());
        assert_eq!(Some(Cell::PlayerOnTarget), game.engine.cell(Position::new(3, 2)));
    }

    #[test]
    fn when_box_pushed_onto_target_it_is_marked() {
        let mut game = GameTestState::new(r#"
#@$. .$#
"#);
        let result = game.assert_move(Right);
        game.assert_matches("# @* .$#");
        assert_eq!(
            vec![
                GridChange { position: Position::new(1, 0), cell: Cell::Empty },
                GridChange { position: Position::new(2, 0), cell: Cell::Player },
                GridChange { position: Position::new(3, 0), cell: Cell::BoxOnTarget },
            ],
            result.changes
        );
        assert!(!result.won);
    }

    #[test]
    fn when_box_pushed_off_target_target_is_restored() {
        let mut game = GameTestState::new(r#"
#@*  #
"#);
        let result = game.assert_move(Right);
        game.assert_matches("# +$ #");
        assert_eq!(MoveStatus::Pushed, result.status);
        assert_eq!(vec![Position::new(3, 0)], game.engine.boxes());
    }

    #[test]
    fn when_blocks_swap_game_remains_equal() {
        let level = r#"
#    #
#@$  #
# $  #
#    #
"#;
        let mut game = GameTestState::new(level);
        let original_grid = game.engine.grid().clone();
        game.assert_moves(&[
            Right, Left,
            Down, Down,
            Right, Up,
            Right, Right, Up, Up,
            Left, Down, Right, Down, Left,]);
        game.assert_matches(r#"
#    #
# $  #
# $@ #
#    #
"#);
        game.assert_moves(&[
            Down, Left, Left, Up, Up,]);

        let expected_level = r#"
#    #
#@$  #
# $  #
#    #
"#;
        game.assert_matches(expected_level);
        assert_eq!(&original_grid, game.engine.grid());
    }
}
