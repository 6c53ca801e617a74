use serde::{Deserialize, Serialize};

use crate::models::{Card, CardId, ColumnId, Priority};

/// A drag gesture in flight: the card being carried and the column it left.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingMove {
    pub card: CardId,
    pub source: ColumnId,
}

/// What `complete_move` did. Only used for console logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { card: CardId, from: ColumnId, to: ColumnId },
    SameColumn { card: CardId, column: ColumnId },
    Stale { card: CardId, source: ColumnId },
    NothingPending,
    UnknownTarget,
}

/// In-memory demo board. Columns partition the seeded card set; cards are
/// only ever relocated, never created or dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    columns: [Vec<Card>; ColumnId::COUNT],
    pending: Option<PendingMove>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl BoardState {
    pub fn new(columns: [Vec<Card>; ColumnId::COUNT]) -> Self {
        Self { columns, pending: None }
    }

    /// Board shown on the landing page.
    pub fn seeded() -> Self {
        Self::new([
            vec![
                Card::new(1, "Revisión de especificaciones", Priority::High),
                Card::new(2, "Estimación de costos", Priority::Medium),
                Card::new(3, "Aprobación de cliente", Priority::High),
            ],
            vec![
                Card::new(4, "Creación de patrones", Priority::High),
                Card::new(5, "Preparación de materiales", Priority::Medium),
            ],
            vec![
                Card::new(6, "QC primera línea", Priority::Medium),
                Card::new(7, "Empaque y etiquetado", Priority::Low),
            ],
            vec![
                Card::new(8, "Producción completada", Priority::High),
                Card::new(9, "Envío a bodega", Priority::Medium),
            ],
        ])
    }

    pub fn cards(&self, column: ColumnId) -> &[Card] {
        &self.columns[column.index()]
    }

    pub fn len(&self, column: ColumnId) -> usize {
        self.columns[column.index()].len()
    }

    pub fn total_cards(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn column_of(&self, card: CardId) -> Option<ColumnId> {
        ColumnId::all()
            .into_iter()
            .find(|column| self.cards(*column).iter().any(|c| c.id == card))
    }

    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    pub fn is_dragging(&self) -> bool {
        self.pending.is_some()
    }

    /// Start carrying `card` out of `source`. A gesture already in flight is
    /// replaced.
    pub fn begin_move(&mut self, card: CardId, source: ColumnId) {
        self.pending = Some(PendingMove { card, source });
    }

    /// Drop the carried card onto `target`. Same-column drops, stale gestures
    /// and calls with nothing pending leave the columns untouched.
    pub fn complete_move(&mut self, target: ColumnId) -> MoveOutcome {
        let Some(PendingMove { card, source }) = self.pending.take() else {
            return MoveOutcome::NothingPending;
        };

        if source == target {
            return MoveOutcome::SameColumn { card, column: target };
        }

        let from = &mut self.columns[source.index()];
        let Some(position) = from.iter().position(|c| c.id == card) else {
            return MoveOutcome::Stale { card, source };
        };

        let moved = from.remove(position);
        self.columns[target.index()].push(moved);

        MoveOutcome::Moved { card, from: source, to: target }
    }

    /// `complete_move` keyed by the column's DOM key. Unknown keys change
    /// nothing, not even the pending gesture.
    pub fn complete_move_to(&mut self, key: &str) -> MoveOutcome {
        match key.parse::<ColumnId>() {
            Ok(target) => self.complete_move(target),
            Err(_) => MoveOutcome::UnknownTarget,
        }
    }

    pub fn cancel_move(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(board: &BoardState, column: ColumnId) -> Vec<CardId> {
        board.cards(column).iter().map(|c| c.id).collect()
    }

    fn assert_partition(board: &BoardState) {
        let mut seen: Vec<CardId> = ColumnId::all()
            .into_iter()
            .flat_map(|column| ids(board, column))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=9).collect::<Vec<_>>(), "every card in exactly one column");
    }

    #[test]
    fn seeded_board_layout() {
        let board = BoardState::seeded();
        assert_eq!(ids(&board, ColumnId::Pending), vec![1, 2, 3]);
        assert_eq!(ids(&board, ColumnId::InProgress), vec![4, 5]);
        assert_eq!(ids(&board, ColumnId::Review), vec![6, 7]);
        assert_eq!(ids(&board, ColumnId::Completed), vec![8, 9]);
        assert_eq!(board.total_cards(), 9);
        assert!(!board.is_dragging());
        assert_partition(&board);
    }

    #[test]
    fn move_appends_to_target_and_keeps_order() {
        let mut board = BoardState::seeded();
        board.begin_move(2, ColumnId::Pending);
        assert!(board.is_dragging());

        let outcome = board.complete_move(ColumnId::InProgress);

        assert_eq!(
            outcome,
            MoveOutcome::Moved { card: 2, from: ColumnId::Pending, to: ColumnId::InProgress }
        );
        assert_eq!(ids(&board, ColumnId::Pending), vec![1, 3]);
        assert_eq!(ids(&board, ColumnId::InProgress), vec![4, 5, 2]);
        assert_eq!(board.column_of(2), Some(ColumnId::InProgress));
        assert_eq!(board.pending(), None);
        assert_partition(&board);
    }

    #[test]
    fn moved_card_keeps_title_and_priority() {
        let mut board = BoardState::seeded();
        board.begin_move(7, ColumnId::Review);
        board.complete_move(ColumnId::Pending);

        let last = board.cards(ColumnId::Pending).last().cloned();
        assert_eq!(last, Some(Card::new(7, "Empaque y etiquetado", Priority::Low)));
    }

    #[test]
    fn drop_on_source_column_is_noop() {
        let mut board = BoardState::seeded();
        let before = board.clone();
        board.begin_move(1, ColumnId::Pending);

        let outcome = board.complete_move(ColumnId::Pending);

        assert_eq!(outcome, MoveOutcome::SameColumn { card: 1, column: ColumnId::Pending });
        assert_eq!(board, before);
    }

    #[test]
    fn cancel_restores_idle_board() {
        let mut board = BoardState::seeded();
        let before = board.clone();
        board.begin_move(5, ColumnId::InProgress);
        board.cancel_move();

        assert_eq!(board, before);
        assert_eq!(board.complete_move(ColumnId::Completed), MoveOutcome::NothingPending);
        assert_eq!(board, before);
    }

    #[test]
    fn second_complete_is_noop() {
        let mut board = BoardState::seeded();
        board.begin_move(4, ColumnId::InProgress);
        board.complete_move(ColumnId::Review);
        let after_first = board.clone();

        assert_eq!(board.complete_move(ColumnId::Completed), MoveOutcome::NothingPending);
        assert_eq!(board, after_first);
    }

    #[test]
    fn begin_while_dragging_replaces_gesture() {
        let mut board = BoardState::seeded();
        board.begin_move(1, ColumnId::Pending);
        board.begin_move(8, ColumnId::Completed);

        board.complete_move(ColumnId::Review);

        assert_eq!(ids(&board, ColumnId::Pending), vec![1, 2, 3]);
        assert_eq!(ids(&board, ColumnId::Review), vec![6, 7, 8]);
        assert_eq!(ids(&board, ColumnId::Completed), vec![9]);
    }

    #[test]
    fn stale_gesture_leaves_board_alone() {
        let mut board = BoardState::seeded();
        let before = board.clone();
        // card 4 lives in inProgress, not pending
        board.begin_move(4, ColumnId::Pending);

        let outcome = board.complete_move(ColumnId::Completed);

        assert_eq!(outcome, MoveOutcome::Stale { card: 4, source: ColumnId::Pending });
        assert_eq!(board, before);
    }

    #[test]
    fn unknown_drop_key_changes_nothing() {
        let mut board = BoardState::seeded();
        board.begin_move(3, ColumnId::Pending);
        let before = board.clone();

        assert_eq!(board.complete_move_to("archived"), MoveOutcome::UnknownTarget);
        assert_eq!(board, before);

        assert_eq!(
            board.complete_move_to("completed"),
            MoveOutcome::Moved { card: 3, from: ColumnId::Pending, to: ColumnId::Completed }
        );
        assert_eq!(ids(&board, ColumnId::Completed), vec![8, 9, 3]);
    }

    #[test]
    fn emptied_column_accepts_cards_back() {
        let mut board = BoardState::seeded();
        for card in [8, 9] {
            board.begin_move(card, ColumnId::Completed);
            board.complete_move(ColumnId::Pending);
        }
        assert_eq!(board.len(ColumnId::Completed), 0);

        board.begin_move(2, ColumnId::Pending);
        board.complete_move(ColumnId::Completed);

        assert_eq!(ids(&board, ColumnId::Pending), vec![1, 3, 8, 9]);
        assert_eq!(ids(&board, ColumnId::Completed), vec![2]);
        assert_partition(&board);
    }

    #[test]
    fn partition_holds_for_every_single_move() {
        let seed = BoardState::seeded();
        for source in ColumnId::all() {
            for card in ids(&seed, source) {
                for target in ColumnId::all() {
                    let mut board = seed.clone();
                    board.begin_move(card, source);
                    board.complete_move(target);

                    assert_partition(&board);
                    assert_eq!(board.column_of(card), Some(target));
                    for other in ColumnId::all().into_iter().filter(|c| *c != source && *c != target) {
                        assert_eq!(ids(&board, other), ids(&seed, other));
                    }
                }
            }
        }
    }
}
