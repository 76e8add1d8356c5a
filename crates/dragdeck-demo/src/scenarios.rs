//! Scripted walkthroughs of each widget, mirroring the catalog's demo pages.

use dragdeck_core::easing::{floor_for_display, group_thousands};
use dragdeck_core::{
    move_card, move_item, reorder_by_id, Board, Card, Clock, Column, DeckConfig, DragSession,
    GridItem, ManualClock, OrderedList, Result, Tab, TabSet, Timeline,
};
use kurbo::Point;
use std::time::Duration;

/// Frame interval used when simulating an animation loop.
const FRAME: Duration = Duration::from_millis(16);

/// Run every scenario in catalog order.
pub fn run_all(config: &DeckConfig) -> Result<()> {
    sortable_list(config)?;
    kanban_board(config)?;
    grid_snap(config)?;
    progress_bar(config);
    number_scroll(config);
    tab_switch()?;
    Ok(())
}

fn sortable_list(config: &DeckConfig) -> Result<()> {
    log::info!("== Sortable list");
    let items = OrderedList::new(vec![
        Card::new("item-1", "Item 1"),
        Card::new("item-2", "Item 2"),
        Card::new("item-3", "Item 3"),
        Card::new("item-4", "Item 4"),
    ])?;

    let mut session = DragSession::begin("item-1", Point::new(20.0, 20.0), config.sortable.activation_distance);
    session.update(Point::new(22.0, 140.0));
    let Some(end) = session.finish(Some("item-3")) else {
        return Ok(());
    };
    let Some(over_id) = end.over_id.as_deref() else {
        return Ok(());
    };

    match reorder_by_id(&items, &end.active_id, over_id)? {
        Some(next) => log::info!("Order changed: {:?}", next.ids()),
        None => log::info!("Order unchanged"),
    }
    Ok(())
}

fn kanban_board(config: &DeckConfig) -> Result<()> {
    log::info!("== Kanban board");
    let mut board = Board::new(vec![
        Column::new("column-1", "Todo").with_cards(vec![
            Card::new("card-1", "Tidy the component catalog"),
            Card::new("card-2", "Learn advanced drag-and-drop"),
        ])?,
        Column::new("column-2", "In progress")
            .with_cards(vec![Card::new("card-3", "Multi-column board")])?,
        Column::new("column-3", "Done").with_cards(vec![
            Card::new("card-4", "UI primitives"),
            Card::new("card-5", "Vertical sortable list"),
        ])?,
    ])?;

    let gestures = [
        ("card-1", "card-3"),
        ("card-2", "column-3"),
        ("card-5", "card-4"),
        ("card-9", "column-1"),
    ];
    for (active, over) in gestures {
        let mut session = DragSession::begin(active, Point::ZERO, config.kanban.activation_distance);
        session.update(Point::new(120.0, 30.0));
        let Some(instruction) = session.finish(Some(over)).and_then(|end| end.move_instruction()) else {
            continue;
        };

        // A rejected drop leaves the previous board in place.
        match move_card(&board, &instruction) {
            Ok(next) => board = next,
            Err(e) => log::warn!("Drop of {} over {} ignored: {}", active, over, e),
        }
    }

    for column in board.columns() {
        log::info!("{}", column.heading(config.kanban.show_card_count));
    }
    println!("{}", board.to_json()?);
    Ok(())
}

fn grid_snap(config: &DeckConfig) -> Result<()> {
    log::info!("== Grid snap");
    let grid = &config.grid_snap.grid;
    let mut items = OrderedList::new(vec![
        GridItem::new("item-1", Point::new(0.0, 0.0)),
        GridItem::new("item-2", Point::new(100.0, 100.0)),
        GridItem::new("item-3", Point::new(200.0, 200.0)),
    ])?;

    for (id, to) in [("item-1", Point::new(130.0, 260.0)), ("item-3", Point::new(1000.0, 900.0))] {
        let mut session = DragSession::begin(id, Point::ZERO, config.sortable.activation_distance);
        session.update(to);
        if let Some(end) = session.finish(None) {
            items = move_item(&items, &end.active_id, end.delta, grid)?;
        }
    }

    for item in items.iter() {
        log::info!("{} at ({}, {})", item.id, item.position.x, item.position.y);
    }
    Ok(())
}

fn progress_bar(config: &DeckConfig) {
    log::info!("== Progress bar");
    let clock = ManualClock::new();
    let mut timeline = Timeline::new(config.progress.duration(), 0.0, config.progress.target);
    timeline.start(clock.now());

    let mut frames = 0u32;
    loop {
        clock.advance(FRAME);
        frames += 1;
        // Pause for two seconds a third of the way through.
        if frames == 100 {
            timeline.pause(clock.now());
            log::info!("Paused at {}%", floor_for_display(timeline.sample(clock.now()).value));
            clock.advance(Duration::from_secs(2));
            timeline.resume(clock.now());
        }
        let sample = timeline.sample(clock.now());
        if sample.finished {
            log::info!("Reached {}% after {} frames", floor_for_display(sample.value), frames);
            break;
        }
    }
}

fn number_scroll(config: &DeckConfig) {
    log::info!("== Number scroll");
    let clock = ManualClock::new();
    let mut timeline = Timeline::new(config.counter.duration(), 0.0, config.counter.target);
    timeline.start(clock.now());

    loop {
        clock.advance(FRAME * 10);
        let sample = timeline.sample(clock.now());
        log::info!("{}", group_thousands(floor_for_display(sample.value)));
        if sample.finished {
            break;
        }
    }
}

fn tab_switch() -> Result<()> {
    log::info!("== Tab switch");
    let tabs = || {
        vec![
            Tab::new("home", "Home"),
            Tab::new("profile", "Profile"),
            Tab::new("settings", "Settings"),
        ]
    };

    let mut uncontrolled = TabSet::uncontrolled(tabs())?;
    let change = uncontrolled.select("profile")?;
    log::info!("Uncontrolled: switched={} now {:?}", change.switched, uncontrolled.active_id());

    let mut controlled = TabSet::controlled(tabs(), Some("home".to_string()))?;
    let change = controlled.select("settings")?;
    log::info!("Controlled: requested {} still {:?}", change.requested, controlled.active_id());
    controlled.sync_active(Some(change.requested))?;
    log::info!("Controlled: owner synced to {:?}", controlled.active_id());
    Ok(())
}
