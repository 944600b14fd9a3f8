//! Seeded random games played to completion.

use lineae::{play_game, Game, GameBuilder, GameRng, Phase, PlayerId, Policy, RandomPolicy};

fn play(players: usize, seed: u64) -> Game {
    let mut game = GameBuilder::new()
        .players((0..players).map(|i| format!("Bot {}", i + 1)))
        .seed(seed)
        .build()
        .unwrap();
    let random: &dyn Policy = &RandomPolicy;
    let policies = vec![random; players];
    play_game(&mut game, &policies, &mut GameRng::new(seed ^ 0xA5A5)).unwrap();
    game
}

fn check_invariants(game: &Game) {
    let config = game.config();
    assert!(game.is_game_over());
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.round() <= config.max_rounds);

    for sub in game.board().submersibles() {
        assert!(sub.cargo().total() <= sub.capacity(), "{sub}");
        let pos = sub.position().unwrap();
        assert_eq!(game.board().cell(pos).unwrap().craft(), Some(sub.id()));
    }

    for (id, player) in game.players().iter() {
        assert!(player.electricity() <= config.max_electricity);
        assert!(player.available_workers() <= player.total_workers());
        assert!(player.technology_cards().len() <= config.max_technology_cards);
        for name in player.launched_rockets() {
            let rocket = game.board().rockets().iter().find(|r| r.name() == name).unwrap();
            assert_eq!(rocket.completed_by(), Some(id));
            assert!(rocket.is_complete());
        }
    }

    for deposit in game.board().deposits() {
        let held: Vec<PlayerId> = deposit.track().iter().flatten().copied().collect();
        let mut unique = held.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(held.len(), unique.len());
    }

    let scores = game.final_scores();
    for (id, player) in game.players().iter() {
        assert!(scores[id].victory_points >= player.victory_points());
    }
    let winner = game.winner().unwrap();
    let best = scores.values().map(|s| s.victory_points).max().unwrap();
    assert_eq!(scores[winner].victory_points, best);
}

#[test]
fn test_random_games_finish_for_every_table_size() {
    for players in 1..=5 {
        for seed in 0..4 {
            let game = play(players, seed * 31 + players as u64);
            check_invariants(&game);
        }
    }
}

#[test]
fn test_replay_is_deterministic() {
    let a = play(3, 2024);
    let b = play(3, 2024);
    assert_eq!(a.summary(), b.summary());
    assert_eq!(a.history(), b.history());
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_history_is_sequenced() {
    let game = play(2, 8);
    for (i, record) in game.history().iter().enumerate() {
        assert_eq!(record.sequence, i as u64);
        assert!(record.round >= 1 && record.round <= game.round());
    }
    let summary = game.summary();
    assert_eq!(summary.actions_taken, game.history().len() as u64);
    assert_eq!(summary.rounds_played, game.round());
}
