use detonello::{board::Board, Game, Outcome};
use detonello_types::{BitBoard, Disc, DiscKind, Player, Position, DISC_KINDS};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

const GAMES: u64 = 24;

/// Plays random affordable placements until the game ends, calling `check` before every move.
fn self_play(seed: u64, mut check: impl FnMut(&Game)) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    while !game.is_finished() {
        check(&game);
        let placements = game.board().legal_placements();
        let placement = *placements.choose(&mut rng).unwrap();
        game.try_place_disc(placement).unwrap();
    }
    check(&game);
    game
}

#[test]
fn every_move_adds_exactly_one_disc() {
    for seed in 0..GAMES {
        let game = self_play(seed, |game| {
            assert_eq!(game.board().total_discs(), 4 + game.history().len());
        });
        assert!(game.history().len() <= 60);
    }
}

#[test]
fn undo_restores_the_exact_state() {
    for seed in 0..GAMES {
        self_play(seed, |game| {
            let before = *game.board();
            for placement in before.legal_placements() {
                let mut trial = game.clone();
                trial.try_place_disc(placement).unwrap();
                trial.undo_last_move().unwrap();
                assert_eq!(*trial.board(), before, "{placement}");
                assert_eq!(trial.history(), game.history());
            }
        });
    }
}

#[test]
fn placement_succeeds_iff_legal_and_affordable() {
    for seed in 0..4 {
        self_play(seed, |game| {
            let legal = game.legal_moves();
            let record = *game.board().record(game.player_to_move());
            for index in 0..64 {
                let position = Position::from_index(index);
                for kind in DISC_KINDS {
                    let expected = legal.has(position) && record.has_budget(kind);
                    let mut trial = game.clone();
                    assert_eq!(trial.place_disc(position, kind), expected, "{position} {kind:?}");
                }
            }
        });
    }
}

#[test]
fn captures_only_take_opponent_discs() {
    for seed in 0..GAMES {
        self_play(seed, |game| {
            let board = game.board();
            let mover = board.player_to_move();
            for position in game.legal_moves() {
                let captured = board.captures(position, mover);
                assert!(!captured.is_empty());
                assert!(captured.is_subset(board.discs_of(!mover)));
                assert!(captured.is_disjoint(board.immune()));
            }
        });
    }
}

#[test]
fn finished_games_award_the_majority() {
    let mut wins = [0u32, 0];
    let mut draws = 0u32;
    let mut game = Game::new();
    for seed in 0..GAMES {
        let played = self_play(seed, |_| {});
        let board = played.board();
        assert!(board.legal_moves().is_empty());
        let first = board.count(Player::First);
        let second = board.count(Player::Second);
        match played.outcome() {
            Some(Outcome::Winner(Player::First)) => {
                assert!(first > second);
                wins[0] += 1;
            }
            Some(Outcome::Winner(Player::Second)) => {
                assert!(second > first);
                wins[1] += 1;
            }
            Some(Outcome::Draw) => {
                assert_eq!(first, second);
                draws += 1;
            }
            None => panic!("finished game without an outcome"),
        }
        assert_eq!(
            played.first_player().wins + played.second_player().wins,
            u32::from(played.outcome() != Some(Outcome::Draw))
        );

        // Same moves through one long-lived game, tallies accumulate across resets
        game.reset();
        for mv in played.history().iter() {
            game.try_place_disc(mv.placement()).unwrap();
        }
        for player in [Player::First, Player::Second] {
            assert_eq!(game.board().discs_of(player), board.discs_of(player));
        }
        assert_eq!(game.outcome(), played.outcome());
    }
    assert_eq!(game.first_player().wins, wins[0]);
    assert_eq!(game.second_player().wins, wins[1]);
    assert_eq!(wins[0] + wins[1] + draws, u32::try_from(GAMES).unwrap());
}

#[test]
fn cyclic_detonation_terminates_through_the_game_surface() {
    let mut board = Board::empty();
    let ring = [(2, 2), (2, 3), (2, 4), (3, 4), (4, 4), (4, 3), (4, 2), (3, 2)];
    for (row, col) in ring {
        board.set(Position::new(row, col), Disc::new(Player::Second, DiscKind::Detonating));
    }
    board.set(Position::new(3, 3), Disc::plain(Player::Second));
    board.set(Position::new(2, 5), Disc::plain(Player::First));
    let mut game = Game::from_board(board);
    let mv = game.place_at(2, 1, DiscKind::Plain).unwrap();
    assert_eq!(mv.captured.len(), 9);
    assert_eq!(game.board().discs_of(Player::Second), BitBoard::EMPTY);
    assert!(game.is_finished());
}
