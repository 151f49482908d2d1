use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use engine::store::DEFAULT_DIR;
use engine::{Dice, RecordStore, Tables};
use tracing_subscriber::EnvFilter;

mod console;
mod flows;

use console::Console;
use flows::Session;

const USAGE: &str =
    "Usage: d2sheet <file.dnd | charactersearch | deletecharacter | fightforever>";
const ROLL_PAUSE: Duration = Duration::from_millis(400);

#[derive(Parser)]
#[command(name = "d2sheet")]
#[command(about = "Character sheet interpreter, editor and arena")]
struct Cli {
    /// Character definition file, or one of: charactersearch, deletecharacter, fightforever
    target: Option<String>,

    /// Directory holding saved characters
    #[arg(long, env = "D2SHEET_DIR", default_value = DEFAULT_DIR)]
    dir: PathBuf,

    /// RNG seed for determinism
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the pause between ability rolls
    #[arg(long, env = "D2SHEET_NO_PAUSE", default_value_t = false)]
    no_pause: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Interpret(PathBuf),
    Search,
    Delete,
    Fight,
}

impl Mode {
    fn from_target(target: &str) -> Self {
        match target {
            "charactersearch" => Mode::Search,
            "deletecharacter" => Mode::Delete,
            "fightforever" => Mode::Fight,
            path => Mode::Interpret(PathBuf::from(path)),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let Some(target) = cli.target.as_deref() else {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    };

    let mut session = Session {
        store: RecordStore::new(&cli.dir),
        tables: Tables::builtin()?,
        dice: match cli.seed {
            Some(seed) => Dice::from_seed(seed),
            None => Dice::from_entropy(),
        },
        pause: if cli.no_pause { Duration::ZERO } else { ROLL_PAUSE },
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match Mode::from_target(target) {
        Mode::Interpret(path) => flows::run_interpreter(&mut session, &mut console, &path)?,
        Mode::Search => flows::run_search(&mut session, &mut console)?,
        Mode::Delete => flows::run_delete(&mut session, &mut console)?,
        Mode::Fight => flows::run_fight(&mut session, &mut console)?,
    }
    Ok(())
}
