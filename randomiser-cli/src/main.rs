use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use achievement_randomiser_core::{
    Objective, Phase, Randomiser, RandomiserError, RandomiserMode, RandomiserSettings, Result,
    SaveData,
};

mod config;

use config::{load_config, save_config, CliConfig};

const RECENT_ACHIEVEMENTS: usize = 5;

const PRIKOLS: &[&str] = &[
    "Isaac's mom would be proud. Probably.",
    "Another one for the basement wall.",
    "The Lamb felt that.",
];

#[derive(Debug, Parser)]
#[command(
    name = "achievement-randomiser",
    version,
    about = "Binding of Isaac achievement randomiser"
)]
struct Args {
    /// Save file to read and write. Paths ending in .gz are compressed.
    #[arg(long, global = true)]
    save: Option<PathBuf>,

    #[arg(long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate achievements for a new seed.
    Start {
        #[arg(long, value_enum, default_value_t = ModeArg::Standard)]
        mode: ModeArg,

        #[arg(long)]
        seed: Option<u64>,

        /// Give up after this many attempts instead of retrying forever.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_attempts: Option<u32>,
    },
    /// Stop the randomiser and clear the seed.
    End,
    /// Show the seed, mode and progress.
    Status,
    /// Record an objective by id, e.g. `0.2.0` or `2.20`.
    Complete { objective: String },
    /// Show or change the stored CLI settings.
    Config {
        #[arg(long)]
        save_path: Option<PathBuf>,
        #[arg(long)]
        timer: Option<bool>,
        #[arg(long)]
        enable_prikols: Option<bool>,
        #[arg(long)]
        delay_achievement_text: Option<bool>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Standard,
    Nightmare,
}

impl From<ModeArg> for RandomiserMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Standard => RandomiserMode::Standard,
            ModeArg::Nightmare => RandomiserMode::Nightmare,
        }
    }
}

fn load_randomiser(path: &Path) -> Result<Randomiser> {
    if path.exists() {
        debug!("Loading save from {}", path.display());
        Randomiser::load(path)
    } else {
        debug!("No save at {}, starting from an empty one", path.display());
        Ok(Randomiser::new(SaveData::default()))
    }
}

fn start(
    path: &Path,
    cfg: &CliConfig,
    mode: RandomiserMode,
    seed: Option<u64>,
    max_attempts: Option<u32>,
) -> Result<()> {
    let mut randomiser = load_randomiser(path)?;
    let settings = RandomiserSettings {
        seed: Some(seed.unwrap_or_else(|| rand::thread_rng().gen())),
        mode,
        max_attempts,
    };

    let started_at = Instant::now();
    let seed = randomiser.start(&settings)?;
    println!("Seed: {seed} ({mode})");

    loop {
        let attempt = randomiser.generator().map_or(0, |g| g.attempts());
        if randomiser.tick()? == Phase::Accepted {
            println!("Accepted after {attempt} attempt(s)");
            break;
        }
        if let Some(playthrough) = randomiser.generator().and_then(|g| g.last_playthrough()) {
            println!(
                "Attempt #{attempt}: {} / {}",
                playthrough.completed, playthrough.total
            );
        }
    }

    if cfg.timer {
        println!("Generation took {} ms", started_at.elapsed().as_millis());
    }

    randomiser.save(path)?;
    info!("Saved randomiser state to {}", path.display());
    Ok(())
}

fn end(path: &Path) -> Result<()> {
    let mut randomiser = load_randomiser(path)?;
    if !randomiser.tracker().is_active() {
        return Err(RandomiserError::NotActive);
    }
    randomiser.end();
    randomiser.save(path)?;
    info!("Saved randomiser state to {}", path.display());
    println!("Randomiser ended");
    Ok(())
}

fn status(path: &Path) -> Result<()> {
    let randomiser = load_randomiser(path)?;
    let tracker = randomiser.tracker();

    match tracker.seed() {
        Some(seed) => println!("Seed: {seed}"),
        None => println!("Seed: none (randomiser inactive)"),
    }
    println!("Mode: {}", tracker.mode());
    println!("Achievements version: {}", tracker.data().achievements_version);

    let (completed, total) = tracker.progress();
    println!("Progress: {completed} / {total}");

    let recent = tracker.recent_achievements(RECENT_ACHIEVEMENTS);
    if !recent.is_empty() {
        println!("Recent achievements:");
        for (objective, unlock) in recent {
            println!("- {objective} -> {unlock}");
        }
    }
    Ok(())
}

fn complete(path: &Path, cfg: &CliConfig, objective_id: &str) -> Result<()> {
    let objective: Objective = objective_id.parse()?;
    let mut randomiser = load_randomiser(path)?;

    match randomiser.complete(objective)? {
        Some(unlock) => {
            println!("Completed: {objective}");
            if cfg.delay_achievement_text {
                thread::sleep(Duration::from_secs(2));
            }
            println!("Unlocked: {unlock}");
            if cfg.enable_prikols {
                let mut rng = rand::thread_rng();
                println!("{}", PRIKOLS[rng.gen_range(0..PRIKOLS.len())]);
            }
        }
        None => println!("Already completed: {objective}"),
    }

    randomiser.save(path)
}

fn configure(
    cfg: &mut CliConfig,
    save_path: Option<PathBuf>,
    timer: Option<bool>,
    enable_prikols: Option<bool>,
    delay_achievement_text: Option<bool>,
) -> Result<()> {
    let changed = save_path.is_some()
        || timer.is_some()
        || enable_prikols.is_some()
        || delay_achievement_text.is_some();

    if let Some(save_path) = save_path {
        cfg.save_path = save_path;
    }
    if let Some(timer) = timer {
        cfg.timer = timer;
    }
    if let Some(enable_prikols) = enable_prikols {
        cfg.enable_prikols = enable_prikols;
    }
    if let Some(delay) = delay_achievement_text {
        cfg.delay_achievement_text = delay;
    }
    if changed {
        save_config(cfg)?;
        info!("CLI settings updated");
    }

    println!("save_path: {}", cfg.save_path.display());
    println!("timer: {}", cfg.timer);
    println!("enable_prikols: {}", cfg.enable_prikols);
    println!("delay_achievement_text: {}", cfg.delay_achievement_text);
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let mut cfg = load_config();
    let save_path = args.save.clone().unwrap_or_else(|| cfg.save_path.clone());
    debug!("Using save file {}", save_path.display());

    match args.command {
        Command::Start {
            mode,
            seed,
            max_attempts,
        } => start(&save_path, &cfg, mode.into(), seed, max_attempts),
        Command::End => end(&save_path),
        Command::Status => status(&save_path),
        Command::Complete { objective } => complete(&save_path, &cfg, &objective),
        Command::Config {
            save_path,
            timer,
            enable_prikols,
            delay_achievement_text,
        } => configure(
            &mut cfg,
            save_path,
            timer,
            enable_prikols,
            delay_achievement_text,
        ),
    }
}

fn main() {
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_attempts_must_be_positive() {
        let zero = Args::try_parse_from(["cli", "start", "--max-attempts", "0"]);
        assert!(zero.is_err());

        let args = Args::try_parse_from(["cli", "start", "--max-attempts", "3"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Start {
                max_attempts: Some(3),
                ..
            }
        ));
    }

    #[test]
    fn save_flag_is_global() {
        let args = Args::try_parse_from(["cli", "status", "--save", "run.json.gz"]).unwrap();
        assert_eq!(args.save, Some(PathBuf::from("run.json.gz")));
    }
}
