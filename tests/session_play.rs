//! Whole games driven through the session and configuration layers

use noughts::{
    Error,
    agents::{HumanAgent, MinimaxAgent, RandomAgent},
    config::{GameConfig, Mode, PlayerKind},
    session::{GameOutcome, Session},
    tictactoe::{Board, Player, Position},
};

#[test]
fn test_seeded_computer_games_are_reproducible() {
    let config = GameConfig::from_mode(Mode::ComputerVsComputer).with_seed(42);

    let first = Session::from_config(&config)
        .unwrap()
        .play(&mut std::io::sink())
        .unwrap();
    let second = Session::from_config(&config)
        .unwrap()
        .play(&mut std::io::sink())
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.replay().unwrap().encode().len(), 9);
}

#[test]
fn test_demo_mode_minimax_never_loses() {
    for seed in 0..30 {
        let config = GameConfig::from_mode(Mode::ComputerVsComputer).with_seed(seed);
        assert_eq!(config.kind_for(Player::O), PlayerKind::Minimax);

        let record = Session::from_config(&config)
            .unwrap()
            .play(&mut std::io::sink())
            .unwrap();
        assert_ne!(record.outcome, GameOutcome::Win(Player::X), "seed {seed}");
    }
}

#[test]
fn test_random_games_on_larger_boards_finish() {
    let config = GameConfig::default()
        .with_players(PlayerKind::Random, PlayerKind::Random)
        .with_board_size(6)
        .with_seed(3);

    let mut session = Session::from_config(&config).unwrap();
    let record = session.play(&mut std::io::sink()).unwrap();

    assert!(session.board().is_finished());
    assert!(record.moves.len() >= 11 && record.moves.len() <= 36);
    assert_eq!(GameOutcome::of(session.board()), Some(record.outcome));
}

#[test]
fn test_human_against_minimax_never_wins() {
    // Every cell once in row-major order; occupied cells are re-prompted
    let script: String = (0..3)
        .flat_map(|r| (0..3).map(move |c| format!("{r}\n{c}\n")))
        .collect();
    let human = HumanAgent::new("human", std::io::Cursor::new(script), Vec::new());

    let mut session = Session::new(
        Board::default(),
        Box::new(human),
        Box::new(MinimaxAgent::new("minimax")),
    );
    let record = session.play(&mut std::io::sink()).unwrap();

    assert_eq!(record.moves[0].position, Position::new(0, 0));
    assert_ne!(record.outcome, GameOutcome::Win(Player::X));
}

#[test]
fn test_closed_input_stops_the_game() {
    let human = HumanAgent::new("human", &b"1\n1\n"[..], std::io::sink());
    let mut session = Session::new(
        Board::default(),
        Box::new(human),
        Box::new(RandomAgent::with_seed("random", 1)),
    );

    let err = session.play(&mut std::io::sink()).unwrap_err();
    assert!(matches!(err, Error::InputClosed));
    assert_eq!(session.moves().len(), 2);
}

#[test]
fn test_diagonal_ends_game_before_board_fills() {
    // X completes the main diagonal on the fifth move
    let mut board = Board::default();
    for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
        assert!(board.place(row, col));
    }

    assert!(board.is_finished());
    assert_eq!(board.winner(), Some(Player::X));
    assert!(!board.is_draw());
}

#[test]
fn test_record_replays_to_final_board() {
    let mut session = Session::new(
        Board::new(4).unwrap(),
        Box::new(RandomAgent::with_seed("x", 5)),
        Box::new(RandomAgent::with_seed("o", 6)),
    );
    let record = session.play(&mut std::io::sink()).unwrap();
    assert_eq!(&record.replay().unwrap(), session.board());

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["size"], 4);
    assert_eq!(
        value["moves"].as_array().map(Vec::len),
        Some(record.moves.len())
    );
}
