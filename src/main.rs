use std::io::{self, BufRead, Write};

use kestrel_board::GameState;
use kestrel_engine::{Game, Outcome, PlayError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use console::{Command, Pending};

mod console;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // any arguments are taken as a fen for the starting position
    let fen = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let state = if fen.is_empty() {
        GameState::starting()
    } else {
        match kestrel_fen::from_str(&fen) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        }
    };

    debug!(fen = %kestrel_fen::to_string(&state), "session started");

    let mut game = Game::from_state(state);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    let mut pending = Pending::default();

    loop {
        if pending.is_empty() {
            println!("\n{}", game.state());
            print!("Enter move (e.g., 'e2 e4') or 'quit': ");
            stdout.flush()?;
        }

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match pending.feed(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Quit => {
                println!("Thanks for playing!");
                break;
            }
            Command::Fen => println!("{}", kestrel_fen::to_string(game.state())),
            Command::Moves(square) => {
                let moves: Vec<String> = game
                    .legal_destinations(square)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                println!("{square}: {}", moves.join(" "));
            }
            Command::Play(m) => match game.play(m) {
                Ok(outcome) => {
                    match outcome {
                        Outcome::Ongoing => {}
                        Outcome::Check => println!("Check!"),
                        Outcome::Checkmate { winner } => {
                            println!("{}", game.state());
                            println!("Check!");
                            println!("Checkmate! {winner} wins!");
                        }
                    }

                    if outcome.is_terminal() {
                        break;
                    }
                }
                Err(PlayError::EmptySquare(square)) => println!("No piece at {square}!"),
                Err(PlayError::WrongSide { expected }) => println!("It's {expected}'s turn!"),
                Err(PlayError::IllegalMove(_)) => println!("Illegal move! Try again."),
                Err(e @ PlayError::GameOver { .. }) => {
                    println!("{e}");
                    break;
                }
            },
        }
    }

    Ok(())
}
