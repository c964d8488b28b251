use tile_game::game::{letter_value, Board, PlacedTile, Position, Tile};
use tile_game::{GameConfig, GameEngine};

fn tile_at(letter: char, row: usize, col: usize) -> PlacedTile {
    PlacedTile::new(
        Tile::new(format!("{letter}-{row}-{col}"), letter.to_string(), letter_value(letter)),
        Position::new(row, col),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = GameConfig::from_env();
    let engine = GameEngine::from_config(&config)?;
    println!("Dictionary holds {} words", engine.dictionary().len());

    // Opening move: CAT across the center star.
    let empty = Board::new();
    let opening = vec![tile_at('C', 7, 6), tile_at('A', 7, 7), tile_at('T', 7, 8)];
    let board = empty.with_tiles(&opening);
    let result = engine.validate_move(&board, &opening, Some(&empty));
    println!("CAT: valid={} score={}", result.is_valid, result.total_score);
    println!("{board}");

    // A floating tile that also misspells: every problem is reported at once.
    let bad = vec![tile_at('Q', 2, 2), tile_at('X', 2, 3)];
    let next = board.with_tiles(&bad);
    let result = engine.validate_move(&next, &bad, Some(&board));
    println!("QX: valid={}", result.is_valid);
    for error in &result.errors {
        println!("  - {error}");
    }

    // Extend CAT to CATS.
    let extension = vec![tile_at('S', 7, 9)];
    let next = board.with_tiles(&extension);
    let result = engine.validate_move(&next, &extension, Some(&board));
    println!(
        "{}: valid={} score={}",
        result.word_list(),
        result.is_valid,
        result.total_score
    );

    Ok(())
}
