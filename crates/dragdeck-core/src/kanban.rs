//! Kanban board model and the cross-column card move engine.

use crate::error::{DeckError, Result};
use crate::list::{reorder, Identified, OrderedList};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Card identifier.
pub type CardId = String;
/// Column identifier.
pub type ColumnId = String;

/// A card on the board. `content` is opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub content: String,
}

impl Card {
    /// Create a card with a caller-chosen id.
    pub fn new(id: impl Into<CardId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Create a card with a freshly generated id.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), content)
    }
}

impl Identified for Card {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A named, ordered list of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub cards: OrderedList<Card>,
}

impl Column {
    /// Create an empty column.
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: OrderedList::default(),
        }
    }

    /// Replace the column's cards.
    pub fn with_cards(mut self, cards: Vec<Card>) -> Result<Self> {
        self.cards = OrderedList::new(cards)?;
        Ok(self)
    }

    /// Column heading, optionally suffixed with the card count: `"Todo (2)"`.
    pub fn heading(&self, show_count: bool) -> String {
        if show_count {
            format!("{} ({})", self.title, self.cards.len())
        } else {
            self.title.clone()
        }
    }
}

/// Columns keyed by id, plus their display order.
///
/// Every card id appears in exactly one column, and no card shares an id
/// with a column, so a drop target id always resolves unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Board {
    columns: HashMap<ColumnId, Column>,
    column_order: Vec<ColumnId>,
}

impl Board {
    /// Build a board from columns in display order.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut column_ids = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !column_ids.insert(column.id.as_str()) {
                return Err(DeckError::DuplicateId { id: column.id.clone() });
            }
        }

        let mut card_ids = HashSet::new();
        for card in columns.iter().flat_map(|column| column.cards.iter()) {
            if column_ids.contains(card.id.as_str()) || !card_ids.insert(card.id.as_str()) {
                return Err(DeckError::DuplicateId { id: card.id.clone() });
            }
        }

        let column_order = columns.iter().map(|column| column.id.clone()).collect();
        let columns = columns
            .into_iter()
            .map(|column| (column.id.clone(), column))
            .collect();
        Ok(Self {
            columns,
            column_order,
        })
    }

    /// Parse a board from a JSON array of columns.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the board to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order.iter().filter_map(|id| self.columns.get(id))
    }

    /// Column by id.
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Id of the column holding card `card_id`.
    pub fn column_of_card(&self, card_id: &str) -> Option<&str> {
        self.columns()
            .find(|column| column.cards.contains(card_id))
            .map(|column| column.id.as_str())
    }

    /// Resolve a drop target: a column id resolves to itself, a card id to
    /// the column holding the card.
    pub fn find_container(&self, id: &str) -> Option<&str> {
        match self.columns.get_key_value(id) {
            Some((column_id, _)) => Some(column_id.as_str()),
            None => self.column_of_card(id),
        }
    }

    /// Card by id, wherever it lives.
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.columns().find_map(|column| column.cards.get(id))
    }

    /// Total number of cards across all columns.
    pub fn total_cards(&self) -> usize {
        self.columns.values().map(|column| column.cards.len()).sum()
    }
}

impl TryFrom<Vec<Column>> for Board {
    type Error = DeckError;

    fn try_from(columns: Vec<Column>) -> Result<Self> {
        Self::new(columns)
    }
}

impl From<Board> for Vec<Column> {
    fn from(mut board: Board) -> Self {
        board
            .column_order
            .iter()
            .filter_map(|id| board.columns.remove(id))
            .collect()
    }
}

/// A completed drag: the dragged card and what it was released over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInstruction {
    /// The dragged card.
    pub active_id: CardId,
    /// Drop target: either a column id or a card id.
    pub over_id: String,
}

impl MoveInstruction {
    /// Create a move instruction.
    pub fn new(active_id: impl Into<CardId>, over_id: impl Into<String>) -> Self {
        Self {
            active_id: active_id.into(),
            over_id: over_id.into(),
        }
    }
}

/// Apply a card drop to `board`, returning the updated board.
///
/// Within one column the card takes the target card's index (dropping on
/// the column itself changes nothing). Across columns the card is inserted
/// before the target card, or appended when the target is the column.
pub fn move_card(board: &Board, instruction: &MoveInstruction) -> Result<Board> {
    let active_id = instruction.active_id.as_str();
    let over_id = instruction.over_id.as_str();

    let source_id = board
        .column_of_card(active_id)
        .ok_or_else(|| DeckError::CardNotFound { id: active_id.to_string() })?
        .to_string();
    let dest_id = board
        .find_container(over_id)
        .ok_or_else(|| DeckError::ContainerNotFound { id: over_id.to_string() })?
        .to_string();

    let mut next = board.clone();

    if source_id == dest_id {
        let column = next
            .columns
            .get_mut(&source_id)
            .ok_or_else(|| DeckError::ContainerNotFound { id: source_id.clone() })?;
        let from = column
            .cards
            .position(active_id)
            .ok_or_else(|| DeckError::CardNotFound { id: active_id.to_string() })?;
        match column.cards.position(over_id) {
            Some(to) if to != from => {
                column.cards = reorder(&column.cards, from, to)?;
                log::debug!("Reordered {} in {} ({} -> {})", active_id, source_id, from, to);
            }
            _ => log::debug!("Drop of {} leaves {} unchanged", active_id, source_id),
        }
        return Ok(next);
    }

    let card = next
        .columns
        .get_mut(&source_id)
        .and_then(|column| column.cards.remove(active_id))
        .ok_or_else(|| DeckError::CardNotFound { id: active_id.to_string() })?;
    let dest = next
        .columns
        .get_mut(&dest_id)
        .ok_or_else(|| DeckError::ContainerNotFound { id: dest_id.clone() })?;
    match dest.cards.position(over_id) {
        Some(index) => dest.cards.insert(index, card)?,
        None => dest.cards.push(card)?,
    }
    log::debug!("Moved {} from {} to {}", active_id, source_id, dest_id);

    Ok(next)
}
