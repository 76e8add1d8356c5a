//! End-to-end gesture flows: pointer session in, committed snapshot out.

use dragdeck_core::easing::{floor_for_display, group_thousands};
use dragdeck_core::{
    move_card, move_item, reorder_by_id, Board, Card, Clock, Column, DeckError, DragSession,
    GridItem, GridSpec, ManualClock, OrderedList, Timeline, TimelineStatus,
    DEFAULT_ACTIVATION_DISTANCE,
};
use kurbo::Point;
use std::time::Duration;

fn demo_board() -> Board {
    Board::new(vec![
        Column::new("column-1", "Todo")
            .with_cards(vec![
                Card::new("card-1", "Tidy the component catalog"),
                Card::new("card-2", "Learn advanced drag-and-drop"),
            ])
            .unwrap(),
        Column::new("column-2", "In progress")
            .with_cards(vec![Card::new("card-3", "Multi-column board")])
            .unwrap(),
        Column::new("column-3", "Done")
            .with_cards(vec![
                Card::new("card-4", "UI primitives"),
                Card::new("card-5", "Vertical sortable list"),
            ])
            .unwrap(),
    ])
    .unwrap()
}

fn ids(board: &Board, column: &str) -> Vec<String> {
    board
        .column(column)
        .unwrap()
        .cards
        .iter()
        .map(|card| card.id.clone())
        .collect()
}

#[test]
fn test_drag_card_across_columns() {
    let board = demo_board();

    let mut session = DragSession::begin("card-1", Point::new(40.0, 40.0), DEFAULT_ACTIVATION_DISTANCE);
    session.update(Point::new(200.0, 60.0));
    session.update(Point::new(340.0, 80.0));
    let end = session.finish(Some("card-3")).unwrap();

    let next = move_card(&board, &end.move_instruction().unwrap()).unwrap();
    assert_eq!(ids(&next, "column-1"), vec!["card-2"]);
    assert_eq!(ids(&next, "column-2"), vec!["card-1", "card-3"]);
    assert_eq!(next.total_cards(), board.total_cards());
}

#[test]
fn test_failed_drop_keeps_previous_snapshot() {
    let board = demo_board();

    let mut session = DragSession::begin("card-9", Point::ZERO, DEFAULT_ACTIVATION_DISTANCE);
    session.update(Point::new(50.0, 0.0));
    let end = session.finish(Some("column-2")).unwrap();

    let result = move_card(&board, &end.move_instruction().unwrap());
    assert!(matches!(result, Err(DeckError::CardNotFound { .. })));
    let current = result.unwrap_or_else(|_| board.clone());
    assert_eq!(current, board);
}

#[test]
fn test_sortable_list_drop() {
    let list = OrderedList::new(vec![
        Card::new("a", "Alpha"),
        Card::new("b", "Beta"),
        Card::new("c", "Gamma"),
    ])
    .unwrap();

    let mut session = DragSession::begin("c", Point::new(0.0, 120.0), DEFAULT_ACTIVATION_DISTANCE);
    session.update(Point::new(0.0, 10.0));
    let end = session.finish(Some("a")).unwrap();

    let next = reorder_by_id(&list, &end.active_id, end.over_id.as_deref().unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(next.ids(), vec!["c", "a", "b"]);
}

#[test]
fn test_grid_tile_drag_snaps_into_container() {
    let grid = GridSpec::default();
    let items = OrderedList::new(vec![
        GridItem::new("item-1", Point::new(0.0, 0.0)),
        GridItem::new("item-2", Point::new(100.0, 100.0)),
        GridItem::new("item-3", Point::new(200.0, 200.0)),
    ])
    .unwrap();

    let mut session = DragSession::begin("item-3", Point::new(250.0, 250.0), DEFAULT_ACTIVATION_DISTANCE);
    session.update(Point::new(1200.0, 310.0));
    let end = session.finish(None).unwrap();

    let next = move_item(&items, &end.active_id, end.delta, &grid).unwrap();
    assert_eq!(next.get("item-3").unwrap().position, Point::new(700.0, 300.0));
    assert_eq!(next.get("item-1").unwrap().position, Point::ZERO);
}

#[test]
fn test_progress_bar_with_pause() {
    let clock = ManualClock::new();
    let mut timeline = Timeline::new(Duration::from_millis(5000), 0.0, 85.0);
    timeline.start(clock.now());

    clock.advance(Duration::from_millis(1000));
    let before_pause = floor_for_display(timeline.sample(clock.now()).value);
    timeline.pause(clock.now());

    clock.advance(Duration::from_secs(30));
    assert_eq!(floor_for_display(timeline.sample(clock.now()).value), before_pause);
    assert_eq!(timeline.status(), TimelineStatus::Paused);

    timeline.resume(clock.now());
    let mut last = before_pause;
    let mut frames = 0;
    loop {
        clock.advance(Duration::from_millis(16));
        let sample = timeline.sample(clock.now());
        let shown = floor_for_display(sample.value);
        assert!(shown >= last);
        last = shown;
        frames += 1;
        if sample.finished {
            break;
        }
    }
    assert_eq!(last, 85);
    // 4000ms of remaining run time at 16ms per frame
    assert_eq!(frames, 250);
}

#[test]
fn test_number_counter_labels() {
    let clock = ManualClock::new();
    let mut timeline = Timeline::new(Duration::from_millis(1500), 0.0, 12000.0);
    timeline.start(clock.now());
    clock.advance(Duration::from_millis(1500));
    let sample = timeline.sample(clock.now());
    assert!(sample.finished);
    assert_eq!(group_thousands(floor_for_display(sample.value)), "12,000");
}
