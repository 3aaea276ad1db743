use crate::*;

/// Wire rendering convention, preserved bit-exactly from the original
/// service: blank for anything the player cannot see, `'X'` for mines, and
/// the ASCII digit of the adjacency count for opened cells.
pub const HIDDEN_CHAR: char = ' ';
pub const MINE_CHAR: char = 'X';

/// Player-visible projection of an in-progress game: unrevealed cells are
/// blank, and mine cells are forced blank even if something marked them
/// revealed (mines only ever surface through the full view).
pub fn hidden_field(game: &Game) -> Vec<Vec<char>> {
    render(game, |game, coords| {
        if game.board().contains_mine(coords) || !game.is_revealed(coords) {
            HIDDEN_CHAR
        } else {
            count_char(game.board().adjacent_mines(coords))
        }
    })
}

/// Terminal projection returned once a game completes: every cell is shown,
/// mines included.
pub fn full_field(game: &Game) -> Vec<Vec<char>> {
    render(game, |game, coords| {
        if game.board().contains_mine(coords) {
            MINE_CHAR
        } else {
            count_char(game.board().adjacent_mines(coords))
        }
    })
}

fn render(game: &Game, cell: impl Fn(&Game, Coord2) -> char) -> Vec<Vec<char>> {
    let (height, width) = game.config().size();
    (0..height)
        .map(|row| (0..width).map(|col| cell(game, (row, col))).collect())
        .collect()
}

/// Adjacency counts are always `0..=8`, one ASCII digit.
fn count_char(count: u8) -> char {
    debug_assert!(count <= 8);
    (b'0' + count) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_game_renders_all_blank() {
        let game = Game::new(Board::with_mines(3, 2, &[(0, 0)]).unwrap());

        let field = hidden_field(&game);
        assert_eq!(field, vec![vec![' ', ' ', ' '], vec![' ', ' ', ' ']]);
    }

    #[test]
    fn hidden_field_shows_digits_for_opened_cells_only() {
        let mut game = Game::new(Board::with_mines(3, 3, &[(0, 0)]).unwrap());
        game.reveal((1, 1)).unwrap();

        let field = hidden_field(&game);
        assert_eq!(field[1][1], '1');
        assert_eq!(field[0][0], ' ');
        assert_eq!(field[2][2], ' ');
    }

    #[test]
    fn full_field_shows_mines_and_every_count() {
        let game = Game::new(Board::with_mines(2, 2, &[(0, 1)]).unwrap());

        let field = full_field(&game);
        assert_eq!(field, vec![vec!['1', 'X'], vec!['1', '1']]);
    }

    #[test]
    fn full_field_digits_cover_zero_regions() {
        let game = Game::new(Board::with_mines(3, 1, &[(0, 2)]).unwrap());

        assert_eq!(full_field(&game), vec![vec!['0', '1', 'X']]);
    }

    #[test]
    fn row_major_shape_matches_height_then_width() {
        let game = Game::new(Board::with_mines(4, 2, &[]).unwrap());

        let field = hidden_field(&game);
        assert_eq!(field.len(), 2);
        assert!(field.iter().all(|row| row.len() == 4));
    }
}
