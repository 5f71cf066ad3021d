//! Rules engine integration tests.

use rust_scopone::cards::{Card, PointTable};
use rust_scopone::core::{
    Capture, ErrorKind, GameConfig, GameState, LeftoverFallback, Move, PlayerId, Team,
};
use rust_scopone::games::scopone::ScoponeBuilder;
use rust_scopone::greedy::{GreedyPolicy, OpponentPolicy};
use rust_scopone::rules::ScoponeEngine;

fn card(rank: u8, suit: u8) -> Card {
    Card::new(rank, suit).unwrap()
}

fn seat(n: u8) -> PlayerId {
    PlayerId::new(n).unwrap()
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_sweep_adds_values_and_bonus() {
    let (game, state) = ScoponeBuilder::new()
        .hand(seat(0), [card(7, 1)])
        .hand(seat(1), [card(9, 4)])
        .table([card(3, 2), card(4, 2)])
        .build()
        .unwrap();

    let mv = GreedyPolicy
        .choose_move(&state, game.engine().values())
        .unwrap();
    assert_eq!(mv.capture, Capture::from_cards(&[card(3, 2), card(4, 2)]));

    let next = game.apply_external_move(&state, &mv).unwrap();
    let values = PointTable::standard();
    let expected = values.value(card(7, 1))
        + values.value(card(3, 2))
        + values.value(card(4, 2))
        + game.engine().config().sweep_bonus;

    assert_eq!(next.score(Team::Hand), expected);
    assert_eq!(next.score(Team::Deck), 0);
    assert_eq!(next.reward_for(Team::Hand), expected);
}

#[test]
fn test_custom_sweep_bonus_from_json() {
    let config = GameConfig::from_json(r#"{"sweep_bonus": 1}"#).unwrap();
    let engine = ScoponeEngine::new(config).unwrap();
    let state = GameState::new(
        seat(0),
        [vec![card(2, 1)], vec![card(9, 4)], vec![], vec![]],
        vec![card(2, 3)],
        vec![],
    )
    .unwrap();

    let next = engine
        .apply_move(&state, &Move::new(card(2, 1), Capture::Direct(card(2, 3))))
        .unwrap();
    assert_eq!(next.score(Team::Hand), 22 + 12 + 1);
}

// =============================================================================
// Leftover attribution
// =============================================================================

#[test]
fn test_leftover_credited_to_last_capturing_team() {
    let engine = ScoponeEngine::default();
    let state = GameState::new(
        seat(1),
        [vec![], vec![card(6, 3)], vec![card(9, 2)], vec![]],
        vec![card(6, 2)],
        vec![],
    )
    .unwrap();

    // Seat 1 (Deck) captures and sweeps, seat 2 (Hand) places the last card.
    let state = engine
        .apply_move(&state, &Move::new(card(6, 3), Capture::Direct(card(6, 2))))
        .unwrap();
    assert_eq!(state.score(Team::Deck), 18 + 18 + 100);

    let end = engine.apply_move(&state, &Move::placement(card(9, 2))).unwrap();
    assert!(end.is_terminal());
    assert!(end.table().is_empty());
    assert_eq!(end.score(Team::Deck), 18 + 18 + 100 + 10);
    assert_eq!(end.score(Team::Hand), 0);
    assert_eq!(end.captured(Team::Deck).len(), 3);
}

#[test]
fn test_leftover_without_any_capture() {
    let state = GameState::new(
        seat(0),
        [vec![card(8, 1)], vec![card(9, 1)], vec![], vec![]],
        vec![card(10, 2)],
        vec![],
    )
    .unwrap();

    let dealing = ScoponeEngine::default();
    let s = dealing.apply_move(&state, &Move::placement(card(8, 1))).unwrap();
    let end = dealing.apply_move(&s, &Move::placement(card(9, 1))).unwrap();
    assert!(end.is_terminal());
    assert_eq!(end.last_capture(), None);
    assert_eq!(end.score(Team::Deck), 10 + 20 + 20);
    assert_eq!(end.score(Team::Hand), 0);

    let nobody = ScoponeEngine::new(
        GameConfig::default().with_leftover_fallback(LeftoverFallback::Nobody),
    )
    .unwrap();
    let s = nobody.apply_move(&state, &Move::placement(card(8, 1))).unwrap();
    let end = nobody.apply_move(&s, &Move::placement(card(9, 1))).unwrap();
    assert_eq!(end.score(Team::Deck), 0);
    assert_eq!(end.table().len(), 3);
}

// =============================================================================
// Full hands
// =============================================================================

#[test]
fn test_greedy_hand_conserves_cards() {
    for seed in [1u64, 2, 3, 4, 5] {
        let (game, mut state) = ScoponeBuilder::new().deal(seed).build().unwrap();
        let engine = game.engine();
        let mut moves = 0;

        while !state.is_terminal() {
            let mv = GreedyPolicy.choose_move(&state, engine.values()).unwrap();
            assert!(engine.legal_moves(&state).contains(&mv));

            let before = state.scores().clone();
            state = engine.apply_move(&state, &mv).unwrap();
            moves += 1;

            assert!(engine.accounts_for_full_deck(&state));
            for team in Team::ALL {
                assert!(state.score(team) >= before[team]);
            }
        }

        assert_eq!(moves, 40);
        assert!(state.hands_exhausted());
        assert!(state.table().is_empty());
        assert_eq!(
            state.captured(Team::Hand).len() + state.captured(Team::Deck).len(),
            40
        );

        // Everything was banked once; the rest is whole sweep bonuses.
        let total = state.score(Team::Hand) + state.score(Team::Deck);
        let card_points = PointTable::standard().sum(Card::universe().collect::<Vec<_>>().iter());
        assert!(total >= card_points);
        assert_eq!((total - card_points) % 100, 0);
    }
}

#[test]
fn test_children_match_legal_moves() {
    let (game, state) = ScoponeBuilder::new().deal(8).build().unwrap();
    let engine = game.engine();

    let moves = engine.legal_moves(&state);
    let children = engine.find_children(&state).unwrap();
    assert_eq!(moves.len(), children.len());
    for (mv, child) in moves.iter().zip(&children) {
        assert_eq!(child.parent_move(), Some(mv));
        assert_eq!(child.active(), seat(1));
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_external_move_errors_are_domain_violations() {
    let (game, state) = ScoponeBuilder::new()
        .hand(seat(0), [card(7, 1), card(2, 2)])
        .hand(seat(1), [card(1, 3)])
        .table([card(3, 2), card(5, 4), card(2, 3)])
        .build()
        .unwrap();

    let bad = [
        Move::placement(card(9, 1)),
        Move::new(card(7, 1), Capture::from_cards(&[card(3, 2), card(4, 4)])),
        Move::new(card(7, 1), Capture::from_cards(&[card(3, 2), card(5, 4)])),
        Move::placement(card(2, 2)),
    ];
    for mv in &bad {
        let err = game.apply_external_move(&state, mv).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainViolation, "{mv}: {err}");
    }

    // Rejected moves leave the caller's state as it was.
    assert_eq!(state.hand(seat(0)).len(), 2);
    assert_eq!(state.table().len(), 3);
}

#[test]
fn test_bad_config_rejected_before_play() {
    let mut config = GameConfig::default();
    config.sweep_bonus = -500;

    let err = ScoponeEngine::new(config.clone()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = ScoponeBuilder::new().config(config).deal(1).build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = GameConfig::from_json(r#"{"sweep_bonus": -500}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_sweep_never_lowers_score() {
    let config = GameConfig::from_json(r#"{"sweep_bonus": 0}"#).unwrap();
    let engine = ScoponeEngine::new(config).unwrap();
    let state = GameState::new(
        seat(0),
        [vec![card(2, 1)], vec![card(9, 4)], vec![], vec![]],
        vec![card(2, 3)],
        vec![],
    )
    .unwrap();

    let next = engine
        .apply_move(&state, &Move::new(card(2, 1), Capture::Direct(card(2, 3))))
        .unwrap();
    assert!(next.table().is_empty());
    assert_eq!(next.score(Team::Hand), 22 + 12);
}

#[test]
fn test_initialize_rejects_bad_deals() {
    let err = ScoponeBuilder::new()
        .hand(seat(0), [card(1, 1), card(2, 1)])
        .table([card(2, 1)])
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);

    let eleven: Vec<Card> = (1..=10).map(|r| card(r, 2)).chain([card(1, 3)]).collect();
    let err = ScoponeBuilder::new().hand(seat(2), eleven).build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Usage);

    let err = Card::new(11, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
