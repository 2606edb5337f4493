use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::term::{AnchorY, GameView, Viewport};
use tui_2048::types::Status;

fn screen_text(fb: &tui_2048::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 4 tiles * 6 columns + border = 26 wide; 4 tiles * 3 rows + border = 14 tall.
    let fb = view.render(&snap, Viewport::new(26, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╔');
    assert_eq!(fb.get(25, 0).unwrap().ch, '╗');
    assert_eq!(fb.get(0, 13).unwrap().ch, '╚');
    assert_eq!(fb.get(25, 13).unwrap().ch, '╝');
}

#[test]
fn term_view_centers_tile_value() {
    let mut snap = GameSnapshot {
        status: Status::Playing,
        ..GameSnapshot::default()
    };
    snap.grid[0][0] = 2048;
    snap.grid[3][3] = 2;

    let fb = GameView::default().render(&snap, Viewport::new(26, 14));

    // Tile (0,0) spans x 1..7, y 1..4; value on the middle row, centered.
    let row: String = fb.row_text(2).chars().skip(2).take(4).collect();
    assert_eq!(row, "2048");
    // Tile (3,3) spans x 19..25, y 10..13; "2" at x = 19 + (6 - 1) / 2.
    assert_eq!(fb.get(21, 11).unwrap().ch, '2');
    assert_ne!(fb.get(2, 2).unwrap().style.bg, fb.get(21, 11).unwrap().style.bg);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.status = Status::Playing;

    let fb = GameView::default().render(&snap, Viewport::new(60, 20));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("playing"));

    let narrow = GameView::default().render(&snap, Viewport::new(30, 20));
    assert!(!screen_text(&narrow).contains("SCORE"));
}

#[test]
fn term_view_shows_status_overlays() {
    let mut snap = GameSnapshot::default();
    let view = GameView::default();
    let vp = Viewport::new(60, 20);

    assert!(screen_text(&view.render(&snap, vp)).contains("PRESS ENTER"));

    snap.status = Status::Playing;
    let playing = screen_text(&view.render(&snap, vp));
    assert!(!playing.contains("PRESS ENTER"));
    assert!(!playing.contains("GAME OVER"));

    snap.status = Status::Lose;
    assert!(screen_text(&view.render(&snap, vp)).contains("GAME OVER"));

    snap.status = Status::Win;
    assert!(screen_text(&view.render(&snap, vp)).contains("YOU WIN!"));
}

#[test]
fn term_view_anchor_top_and_center() {
    let snap = GameSnapshot::default();

    // start_y = (30 - 14) / 2 = 8 when centered.
    let fb = GameView::default().render(&snap, Viewport::new(26, 30));
    assert_eq!(fb.get(0, 8).unwrap().ch, '╔');

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(26, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '╔');
}
