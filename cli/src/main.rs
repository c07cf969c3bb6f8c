use anyhow::{Context, Result};
use clap::Parser;
use detonello::{
    agents::{Agent, AgentKind, DEFAULT_DEPTH},
    Game, Outcome,
};
use detonello_types::Player;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Let two agents play each other and report the tally.
#[derive(Parser, Debug)]
#[command(name = "detonello", version, about)]
struct Args {
    /// Agent for the first player: random, greedy, minimax or positional
    #[arg(long, default_value_t = AgentKind::Positional)]
    first: AgentKind,

    /// Agent for the second player
    #[arg(long, default_value_t = AgentKind::Random)]
    second: AgentKind,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Seed for the random agents
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Minimax search depth
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Log filter, e.g. `debug` or `detonello=trace`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log: String,

    /// Print the board after every game
    #[arg(long, action = clap::ArgAction::SetTrue)]
    show_board: bool,
}

fn play_game(game: &mut Game, agents: &mut [Box<dyn Agent>; 2]) -> Result<Option<Outcome>> {
    game.reset();
    while !game.is_finished() {
        let mover = game.player_to_move();
        let agent = &mut agents[usize::from(!mover.is_first())];
        let placement = agent
            .choose_move(game.board())
            .with_context(|| format!("{} agent failed for {mover}", agent.name()))?;
        let mv = game
            .try_place_disc(placement)
            .with_context(|| format!("{} agent proposed {placement}", agent.name()))?;
        debug!(agent = agent.name(), %mv, "move");
    }
    Ok(game.outcome())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_new(&args.log).context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut game = Game::new();
    let mut draws = 0;
    for round in 0..args.games {
        let seed = args.seed.wrapping_add(u64::from(round) * 2);
        let mut agents = [
            args.first.build(seed, args.depth),
            args.second.build(seed.wrapping_add(1), args.depth),
        ];
        info!(game = round + 1, seed, first = %args.first, second = %args.second, "starting");
        let outcome = play_game(&mut game, &mut agents)
            .with_context(|| format!("game {} with seed {seed}", round + 1))?;
        if outcome == Some(Outcome::Draw) {
            draws += 1;
        }
        if args.show_board {
            println!("{}\n", game.board());
        }
    }

    println!(
        "{} ({}) {} - {} ({}) {}, {} drawn",
        Player::First,
        args.first,
        game.first_player().wins,
        Player::Second,
        args.second,
        game.second_player().wins,
        draws
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arguments() {
        let args = Args::try_parse_from([
            "detonello",
            "--first",
            "minimax",
            "--second",
            "greedy",
            "--games",
            "3",
            "--depth",
            "2",
            "--log",
            "debug",
            "--show-board",
        ])
        .unwrap();
        assert_eq!(args.first, AgentKind::Minimax);
        assert_eq!(args.second, AgentKind::Greedy);
        assert_eq!(args.games, 3);
        assert_eq!(args.depth, 2);
        assert!(args.show_board);
        assert!(Args::try_parse_from(["detonello", "--first", "clever"]).is_err());
    }

    #[test]
    fn tallies_carry_over_between_games() {
        let mut game = Game::new();
        let mut decided = 0;
        for seed in 0..3 {
            let mut agents = [AgentKind::Greedy.build(seed, 1), AgentKind::Random.build(seed, 1)];
            if let Some(Outcome::Winner(_)) = play_game(&mut game, &mut agents).unwrap() {
                decided += 1;
            }
        }
        assert_eq!(game.first_player().wins + game.second_player().wins, decided);
    }
}
