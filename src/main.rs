use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use revbot::agent::Agent;
use revbot::board::{Board, Cell, Color, Move};
use revbot::search::alphabeta::SearchParams;
use serde::Deserialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Slack kept between the external per-move limit and the budget handed to
/// the agent, covering call overhead and the final deadline poll.
const MOVETIME_SLACK: Duration = Duration::from_millis(20);

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Reversi against the alpha-beta agent", long_about = None)]
struct Args {
    /// Board size (6, 8 or 10)
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// Operation mode: 'h' human vs agent, 's' agent self-play, 'r' agent vs random mover
    #[arg(long, default_value = "h")]
    mode: String,

    /// Your color in human mode (or the random mover's in random mode): 'b' or 'w'
    #[arg(long, default_value = "b")]
    color: String,

    /// External per-move time limit in milliseconds
    #[arg(long, default_value_t = 5000)]
    movetime: u64,

    /// Search to a fixed depth instead of the clock (deterministic play)
    #[arg(long)]
    depth: Option<u32>,

    /// Starting position file (JSON: rows of '.', 'B', 'W' and a side to move)
    #[arg(long)]
    position: Option<PathBuf>,

    /// Seed for the random mover
    #[arg(long)]
    seed: Option<u64>,
}

/// JSON shape of a `--position` file.
#[derive(Deserialize)]
struct PositionFile {
    rows: Vec<String>,
    to_move: String,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "b" | "black" => Ok(Color::Black),
        "w" | "white" => Ok(Color::White),
        _ => bail!("invalid color: use 'b' or 'w'"),
    }
}

fn load_position(path: &Path) -> Result<(Board, Color)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading position file {}", path.display()))?;
    let file: PositionFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing position file {}", path.display()))?;
    let size = file.rows.len();
    let mut board = Board::empty(size);
    for (row, line) in file.rows.iter().enumerate() {
        if line.chars().count() != size {
            bail!("row {row} has {} cells, expected {size}", line.chars().count());
        }
        for (col, ch) in line.chars().enumerate() {
            match ch {
                '.' => {}
                'B' => board.set(row, col, Cell::Black),
                'W' => board.set(row, col, Cell::White),
                other => bail!("unexpected cell '{other}' at ({row}, {col})"),
            }
        }
    }
    let to_move = parse_color(&file.to_move).context("to_move field")?;
    Ok((board, to_move))
}

/// One side of the game loop.
enum Mover {
    Engine(Box<Agent>),
    Human,
    Random(SmallRng),
}

impl Mover {
    fn engine(color: Color, size: usize, movetime: Duration) -> Result<Self> {
        let mut agent = Agent::new(color, color.opponent(), size)
            .context("configuring agent")?;
        agent.set_movetime(movetime.saturating_sub(MOVETIME_SLACK).max(Duration::from_millis(1)));
        Ok(Mover::Engine(Box::new(agent)))
    }

    fn pick(&mut self, board: &Board, color: Color, depth: Option<u32>) -> Result<Option<Move>> {
        match self {
            Mover::Engine(agent) => Ok(match depth {
                Some(d) => agent.choose_move_with(
                    board,
                    SearchParams {
                        movetime: Duration::from_secs(3600),
                        max_depth: Some(d),
                    },
                ),
                None => agent.choose_move(board),
            }),
            Mover::Human => get_human_move(board, color),
            Mover::Random(rng) => Ok(board.legal_moves(color).choose(rng).copied()),
        }
    }
}

fn get_human_move(board: &Board, color: Color) -> Result<Option<Move>> {
    let legal = board.legal_moves(color);
    if legal.is_empty() {
        return Ok(None);
    }
    loop {
        print!("Enter your move as 'row col': ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            bail!("input closed");
        }
        let fields: Vec<&str> = input.split_whitespace().collect();
        let coords: Option<(usize, usize)> = match fields.as_slice() {
            [row, col] => row.parse().ok().zip(col.parse().ok()),
            _ => None,
        };
        match coords {
            Some((row, col)) if legal.contains(&Move::new(row, col)) => {
                return Ok(Some(Move::new(row, col)));
            }
            Some(_) => {
                println!("Illegal move! Legal moves are:");
                for mv in &legal {
                    print!("{mv} ");
                }
                println!();
            }
            None => println!("Invalid format! Use two numbers like '2 3'"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = args.mode.chars().next().unwrap_or('h');
    let side_color = parse_color(&args.color)?;
    let movetime = Duration::from_millis(args.movetime);

    let (mut board, mut to_move) = match &args.position {
        Some(path) => load_position(path)?,
        None => {
            if !matches!(args.size, 6 | 8 | 10) {
                bail!("unsupported board size {}: use 6, 8 or 10", args.size);
            }
            (Board::standard(args.size), Color::Black)
        }
    };
    let size = board.size();

    let (mut black, mut white): (Mover, Mover) = match mode {
        's' => (
            Mover::engine(Color::Black, size, movetime)?,
            Mover::engine(Color::White, size, movetime)?,
        ),
        'r' => {
            let rng = match args.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };
            match side_color {
                Color::Black => (Mover::Random(rng), Mover::engine(Color::White, size, movetime)?),
                Color::White => (Mover::engine(Color::Black, size, movetime)?, Mover::Random(rng)),
            }
        }
        'h' => match side_color {
            Color::Black => (Mover::Human, Mover::engine(Color::White, size, movetime)?),
            Color::White => (Mover::engine(Color::Black, size, movetime)?, Mover::Human),
        },
        other => bail!("invalid mode '{other}': use 'h', 's' or 'r'"),
    };

    loop {
        println!("\n{board}");
        if board.is_terminal() {
            break;
        }
        println!("{to_move}'s turn");
        if !board.has_any_move(to_move) {
            println!("{to_move} has no legal move and passes");
            to_move = to_move.opponent();
            continue;
        }

        let mover = match to_move {
            Color::Black => &mut black,
            Color::White => &mut white,
        };
        match mover.pick(&board, to_move, args.depth)? {
            Some(mv) => {
                println!("{to_move} plays {mv}");
                board.apply_move(mv, to_move);
            }
            None => {
                println!("{to_move} has no legal move and passes");
            }
        }
        to_move = to_move.opponent();
    }

    let (black_discs, white_discs) = board.counts();
    println!("\nGame over: Black {black_discs} - White {white_discs}");
    if black_discs > white_discs {
        println!("Black wins!");
    } else if white_discs > black_discs {
        println!("White wins!");
    } else {
        println!("It's a draw!");
    }

    Ok(())
}
