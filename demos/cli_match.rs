//! CLI match example: runs one seeded game and prints the outcome.
//!
//! Set `RUST_LOG=trace` to watch every turn.

use std::time::{SystemTime, UNIX_EPOCH};

use lcrs::{Color, Game};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut game = Game::new(seed);
    let result = match game.play() {
        Ok(result) => result,
        Err(err) => {
            eprintln!("engine fault: {err}");
            return;
        }
    };

    println!("Match finished after {} turns (seed {seed})", result.turns);

    for (seat, player) in game.players.iter().enumerate() {
        println!("Player {}: {} points", seat + 1, player.score());
        for color in Color::ALL {
            let expedition = player.board.expedition(color);
            if !expedition.is_empty() {
                println!(
                    "  {:<6} {:?} = {}",
                    color.name(),
                    expedition.values(),
                    expedition.score()
                );
            }
        }
        println!("  hand: {:?}", player.show_hand());
    }

    let piles = game.discard.show();
    for (index, color) in Color::ALL.iter().enumerate() {
        if !piles[index].is_empty() {
            println!("Discard {:<6} {:?}", color.name(), piles[index]);
        }
    }

    match result.winner {
        Some(seat) => println!("Player {} wins", seat + 1),
        None => println!("Tie game"),
    }
}
