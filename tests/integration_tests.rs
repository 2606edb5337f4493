//! Integration tests for the key → action → engine → view loop

use crossterm::event::{KeyCode, KeyEvent};

use tui_2048::config::AppConfig;
use tui_2048::core::GameState;
use tui_2048::input::handle_key_event;
use tui_2048::term::{GameView, Viewport};
use tui_2048::types::{Direction, GameAction, Status};

fn press(game: &mut GameState, code: KeyCode) -> bool {
    match handle_key_event(KeyEvent::from(code)) {
        Some(action) => game.apply_action(action),
        None => false,
    }
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(12345);
    assert_eq!(game.status(), Status::Idle);

    // Moves are ignored before the game starts.
    assert!(!press(&mut game, KeyCode::Left));

    assert!(press(&mut game, KeyCode::Enter));
    assert_eq!(game.status(), Status::Playing);

    let mut changed_turns = 0;
    for code in [KeyCode::Left, KeyCode::Up, KeyCode::Right, KeyCode::Down].repeat(5) {
        if press(&mut game, code) {
            changed_turns += 1;
        }
        if game.status().is_over() {
            break;
        }
    }
    assert_eq!(game.moves(), changed_turns);

    assert!(press(&mut game, KeyCode::Char('r')));
    assert_eq!(game.status(), Status::Idle);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_every_changed_turn_spawns_one_tile() {
    let mut game = GameState::new(77);
    game.start();

    for _ in 0..50 {
        if game.status() != Status::Playing {
            break;
        }
        for dir in [Direction::Left, Direction::Down] {
            let before = game.state();
            let outcome = game.play_turn(dir);
            if outcome.changed && !outcome.won {
                let spawn = outcome.spawned.expect("changed board has a free cell");
                assert_eq!(game.state()[spawn.row][spawn.col], spawn.value);
                assert_ne!(before, game.state());
            }
        }
    }
}

#[test]
fn test_view_renders_engine_snapshot() {
    let cfg = AppConfig::from_lookup(|key| match key {
        "TUI2048_SEED" => Some("3".to_string()),
        "TUI2048_INITIAL_GRID" => Some("1024,1024,0,0/0,0,0,0/0,0,0,0/0,0,0,0".to_string()),
        _ => None,
    })
    .unwrap();
    let mut game = cfg.new_game();
    game.start();
    game.apply_action(GameAction::Move(Direction::Left));
    assert_eq!(game.status(), Status::Win);

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(60, 20));
    let text: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
    assert!(text.contains("2048"));
    assert!(text.contains("YOU WIN!"));
}
