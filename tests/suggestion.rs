use nrow::{
    Advisor, AdvisorConfig, BoardState, Error, Tier, next_suggested_move, suggest_move,
};
use rand::{SeedableRng, rngs::StdRng};

mod common;
use common::play;

#[test]
fn takes_the_only_winning_move() {
    // X X .
    // O O .
    // . . .    X to move
    let board = play(3, &[1, 4, 2, 5]);
    let mut rng = StdRng::seed_from_u64(1);
    let suggestion = suggest_move(&board, &mut rng).unwrap();
    assert_eq!(suggestion.position, 3);
    assert_eq!(suggestion.tier, Tier::SureWin);
}

#[test]
fn suggestions_are_always_legal() {
    for moves in [&[5][..], &[1, 5], &[5, 1, 9, 3], &[1, 2, 3, 5, 8, 4]] {
        let board = play(3, moves);
        let position = next_suggested_move(&board).unwrap();
        assert!(
            board.legal_moves().contains(&position),
            "{position} is not legal after {moves:?}"
        );
    }
}

#[test]
fn opening_is_random_but_on_the_board() {
    let board = BoardState::new(4).unwrap();
    let mut advisor = Advisor::new(&AdvisorConfig::new().with_seed(11));
    for _ in 0..20 {
        let suggestion = advisor.suggest(&board).unwrap();
        assert_eq!(suggestion.tier, Tier::Opening);
        assert!((1..=16).contains(&suggestion.position));
    }
}

#[test]
fn refuses_finished_games() {
    let board = play(3, &[5, 1, 2, 8, 4, 6, 9, 3, 7]);
    assert_eq!(next_suggested_move(&board), Err(Error::GameAlreadyOver));
}

#[test]
fn seeded_advisors_agree() {
    let board = play(3, &[5]);
    let config = AdvisorConfig::new().with_seed(42);
    let a = Advisor::new(&config).suggest(&board).unwrap();
    let b = Advisor::new(&config).suggest(&board).unwrap();
    assert_eq!(a, b);
}

#[test]
fn self_play_reaches_the_end() {
    let mut advisor = Advisor::new(&AdvisorConfig::new().with_seed(3));
    let mut board = play(3, &[5]);
    while !board.game_over() {
        let position = advisor.next_suggested_move(&board).unwrap();
        board = board.apply_move(position).unwrap();
    }
    assert!(board.turn() <= 9);
    assert!(board.flags().full || board.winner().is_some());
}
