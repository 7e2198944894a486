//! Board container: the ordered stroke store plus its undo buffer.

use super::stroke::Stroke;

/// Container for all committed strokes in the current sketch.
///
/// Strokes are kept in commit order (first = bottom, last = top). Every
/// committing operation ([`commit`](Board::commit) and
/// [`clear`](Board::clear)) pushes a snapshot of the prior store onto the
/// undo buffer; [`undo`](Board::undo) pops exactly one snapshot and restores
/// the store to it wholesale. There is no redo: an undone state is gone.
#[derive(Debug, Default)]
pub struct Board {
    /// Committed strokes in draw order
    strokes: Vec<Stroke>,
    /// Prior store snapshots, last pushed = first restored
    undo_stack: Vec<Vec<Stroke>>,
}

impl Board {
    /// Creates a new empty board with no undo history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of committed strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Whether the board has no committed strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Number of snapshots available to undo.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Commits a finished stroke, recording one undo step. Always succeeds.
    pub fn commit(&mut self, stroke: Stroke) {
        self.undo_stack.push(self.strokes.clone());
        self.strokes.push(stroke);
        log::debug!(
            "Committed stroke ({} points), {} on board",
            self.strokes.last().map_or(0, Stroke::len),
            self.strokes.len()
        );
    }

    /// Empties the store, recording one undo step.
    ///
    /// Clearing an already-empty board still records an undo entry so that
    /// every clear is exactly one undo step.
    pub fn clear(&mut self) {
        self.undo_stack.push(std::mem::take(&mut self.strokes));
        log::debug!("Cleared board");
    }

    /// Restores the store to the most recent snapshot.
    ///
    /// Returns `true` if a snapshot was restored, `false` if the undo buffer
    /// was empty (a silent no-op).
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                self.strokes = snapshot;
                log::debug!("Undo: {} strokes restored", self.strokes.len());
                true
            }
            None => false,
        }
    }
}
