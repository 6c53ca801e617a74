use leptos::prelude::*;
use crate::features::kanban::state::{BoardState, MoveOutcome};
use crate::models::{CardId, ColumnId};

pub struct BoardHook {
    pub board: ReadSignal<BoardState>,
    pub begin_move: Callback<(CardId, ColumnId)>,
    pub complete_move: Callback<String>,
    pub cancel_move: Callback<()>,
}

pub fn use_board() -> BoardHook {
    let board = RwSignal::new(BoardState::seeded());

    let begin_move = Callback::new(move |(card, source): (CardId, ColumnId)| {
        board.update(|b| b.begin_move(card, source));
    });

    // Drop targets report their DOM key; parsing happens inside the board
    let complete_move = Callback::new(move |target: String| {
        let outcome = board.try_update(|b| b.complete_move_to(&target));
        match outcome {
            Some(MoveOutcome::Moved { card, from, to }) => {
                web_sys::console::log_1(&format!("Card {} moved from {} to {}", card, from, to).into());
            }
            Some(MoveOutcome::Stale { card, source }) => {
                web_sys::console::error_1(&format!("Card {} is no longer in {}, drop ignored", card, source).into());
            }
            Some(MoveOutcome::UnknownTarget) => {
                web_sys::console::error_1(&format!("Unknown drop target: {}", target).into());
            }
            _ => {}
        }
    });

    // dragend fires after every gesture; after a drop there is nothing left to clear
    let cancel_move = Callback::new(move |_: ()| {
        if board.with_untracked(|b| b.is_dragging()) {
            board.update(|b| b.cancel_move());
        }
    });

    BoardHook {
        board: board.read_only(),
        begin_move,
        complete_move,
        cancel_move,
    }
}
