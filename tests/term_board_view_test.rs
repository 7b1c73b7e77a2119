use concentration::core::Theme;
use concentration::engine::{GameConfig, Session, SessionSnapshot};
use concentration::term::{BoardView, FrameBuffer, Glyph, Rgb, Viewport};

fn snapshot_with_theme(pairs: usize, seed: u64, theme: Theme) -> (Session, SessionSnapshot) {
    let session = Session::new(&GameConfig {
        pairs,
        seed,
        ..GameConfig::default()
    })
    .unwrap();
    let mut snap = session.snapshot();
    snap.theme = theme;
    (session, snap)
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

// 16 cards in 4 columns with 6x3 cards and 1-cell gaps: grid is 27x15.
// In a 27x20 viewport the grid starts at (0, 2).
const VP: Viewport = Viewport {
    width: 27,
    height: 20,
};

#[test]
fn face_down_cards_use_theme_card_color() {
    let (_, snap) = snapshot_with_theme(8, 1, Theme::Fruits);
    let fb = BoardView::default().render(&snap, None, VP);

    assert_eq!(fb.get(0, 2).unwrap().style.bg, Theme::Fruits.card_color());
    // Gap between cards shows the background.
    assert_eq!(fb.get(6, 2).unwrap().style.bg, Theme::Fruits.background_color());
}

#[test]
fn face_up_card_shows_remembered_glyph_on_white() {
    let (mut session, _) = snapshot_with_theme(8, 1, Theme::Animals);
    session.tap_card(0);
    let snap = session.snapshot();
    let expected = snap.glyph_at(0).unwrap();

    let fb = BoardView::default().render(&snap, None, VP);

    // Glyph centered in the 6x3 card: x = 2, y = 2 + 1.
    assert_eq!(fb.get(2, 3).unwrap().glyph, Glyph::Wide(expected));
    assert_eq!(fb.get(3, 3).unwrap().glyph, Glyph::Continuation);
    assert_eq!(fb.get(0, 2).unwrap().style.bg, Rgb::WHITE);
}

#[test]
fn matched_face_down_card_blends_into_background() {
    let (_, mut snap) = snapshot_with_theme(8, 1, Theme::Sports);
    snap.game.cards[0].is_matched = true;
    snap.game.cards[0].is_face_up = false;

    let fb = BoardView::default().render(&snap, None, VP);
    assert_eq!(fb.get(0, 2).unwrap().style.bg, Theme::Sports.background_color());
}

#[test]
fn labels_and_title_are_drawn() {
    let (mut session, _) = snapshot_with_theme(8, 3, Theme::Flags);
    session.tap_card(0);
    let snap = session.snapshot();

    let fb = BoardView::default().render(&snap, None, Viewport::new(60, 24));
    let text = screen_text(&fb);

    assert!(text.contains("Flips: 1"));
    assert!(text.contains("Score: 0"));
    assert!(text.contains(&snap.theme.to_string()));
}

#[test]
fn selected_card_gets_corner_marks() {
    let (_, snap) = snapshot_with_theme(8, 1, Theme::Faces);
    let fb = BoardView::default().render(&snap, Some(1), VP);

    // Card 1 spans x 7..13, y 2..5.
    assert_eq!(fb.get(7, 2).unwrap().ch(), Some('┌'));
    assert_eq!(fb.get(12, 2).unwrap().ch(), Some('┐'));
    assert_eq!(fb.get(7, 4).unwrap().ch(), Some('└'));
    assert_eq!(fb.get(12, 4).unwrap().ch(), Some('┘'));
    assert_eq!(fb.get(0, 2).unwrap().ch(), Some(' '));
}

#[test]
fn completed_game_shows_overlay() {
    let (_, mut snap) = snapshot_with_theme(2, 1, Theme::Faces);
    for card in snap.game.cards.iter_mut() {
        card.is_matched = true;
        card.is_face_up = true;
    }
    snap.game.complete = true;

    let fb = BoardView::default().render(&snap, None, Viewport::new(60, 24));
    assert!(screen_text(&fb).contains("ALL PAIRS MATCHED"));
}

#[test]
fn hit_test_agrees_with_drawing() {
    let view = BoardView::new(4);
    for index in 0..16 {
        let col = (index % 4) as u16;
        let row = (index / 4) as u16;
        let x = col * 7 + 3;
        let y = 2 + row * 4 + 1;
        assert_eq!(view.hit_test(16, VP, x, y), Some(index));
    }
}
