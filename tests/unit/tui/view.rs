use super::*;
use crate::kernel::services::ports::{DeckConfig, Item};
use crate::kernel::{card_style, DragState, SwipeCard};

fn area() -> Rect {
    Rect::new(0, 0, 80, 20)
}

#[test]
fn resting_top_card_is_centered() {
    let config = DeckConfig::default();
    let style = card_style(0, &DragState::default(), None, &config);
    let rect = card_rect(area(), &style).unwrap();
    assert_eq!(rect, Rect::new(20, 0, 40, 12));
}

#[test]
fn drag_offset_moves_card_by_cells() {
    let config = DeckConfig::default();
    let drag = DragState {
        active: true,
        offset_x: 80.0,
        offset_y: 8.0,
        ..DragState::default()
    };
    let style = card_style(0, &drag, None, &config);
    let rect = card_rect(area(), &style).unwrap();
    assert_eq!((rect.x, rect.y), (30, 1));
    assert_eq!(rect.width, 40);
}

#[test]
fn card_pushed_off_screen_has_no_rect() {
    let config = DeckConfig::default();
    let drag = DragState {
        active: true,
        offset_x: 1000.0,
        ..DragState::default()
    };
    let style = card_style(0, &drag, None, &config);
    assert_eq!(card_rect(area(), &style), None);
}

#[test]
fn hit_test_prefers_top_card() {
    let config = DeckConfig::default();
    let items = [Item::new(1, "A", "a", ""), Item::new(2, "B", "b", "")];
    let views: Vec<CardView<'_>> = items
        .iter()
        .enumerate()
        .map(|(depth, item)| {
            let card = SwipeCard::new(item.id, depth);
            CardView {
                card,
                item,
                style: card.style(&DragState::default(), &config),
            }
        })
        .collect();

    assert_eq!(hit_test(area(), &views, 40, 5), Some(0));
    assert_eq!(hit_test(area(), &views, 2, 5), None);
    // Depth 1 sits one row lower, so the row below the top card hits it.
    assert_eq!(hit_test(area(), &views, 40, 12), Some(1));
}
