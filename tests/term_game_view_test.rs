use fruitris::core::{GameSnapshot, GameState};
use fruitris::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport, Weight};
use fruitris::types::{Fruit, BOARD_WIDTH};

fn render(view: &GameView, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(snap, viewport, &mut fb);
    fb
}

fn screen_text(fb: &FrameBuffer) -> String {
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

    // 10x20 cells at 2x1 plus the border => 22x22
    let fb = render(&view, &snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_floor_row_at_the_bottom() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[0] = Some(Fruit::Lime);

    let fb = render(&GameView::default(), &snap, Viewport::new(22, 22));

    // Board (0, 0) sits just above the bottom border, two chars wide
    let lime = Rgb::from(Fruit::Lime.rgb());
    for x in [1, 2] {
        let cell = fb.get(x, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, lime);
    }
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_falling_piece_in_its_fruit_colours() {
    let snap = GameState::new(1).snapshot();
    let fb = render(&GameView::default(), &snap, Viewport::new(22, 22));

    for ((col, row), fruit) in snap.piece.iter() {
        let x = 1 + col as u16 * 2;
        let y = 1 + (19 - row) as u16;
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::from(fruit.rgb()));
        assert_eq!(cell.style.weight, Weight::Bold);
    }
}

#[test]
fn term_view_shows_pause_and_game_over_overlays() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let mut snap = GameState::new(1).snapshot();
    assert!(!screen_text(&render(&view, &snap, vp)).contains("PAUSED"));

    snap.running = false;
    assert!(render(&view, &snap, vp).row_text(11).contains("PAUSED"));

    snap.game_over = true;
    let text = screen_text(&render(&view, &snap, vp));
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn term_view_draws_legend_and_controls_when_wide_enough() {
    let snap = GameState::new(1).snapshot();
    let fb = render(&GameView::default(), &snap, Viewport::new(60, 22));
    let text = screen_text(&fb);

    assert!(text.contains("EPISODE"));
    for fruit in Fruit::ALL {
        assert!(text.contains(fruit.as_str()), "legend misses {:?}", fruit);
    }
    assert!(text.contains("shuffle"));
    assert!(text.contains("pause"));
}

#[test]
fn term_view_skips_side_panel_on_narrow_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = render(&GameView::default(), &snap, Viewport::new(30, 22));
    assert!(!screen_text(&fb).contains("EPISODE"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = render(&GameView::default(), &snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = render(&view, &snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(BOARD_WIDTH as u16 * 2 + 2, 22);

    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&snap, vp, &mut fb);
    let first = fb.clone();
    view.render_into(&snap, vp, &mut fb);
    assert_eq!(fb, first);
}
