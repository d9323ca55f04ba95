use super::Stack;
use crate::lang::{Cursor, Ident};

/// ## Control stack entries
///
/// Subroutine calls, until-loops and counted loops share one stack.
/// A loop step only pops a loop frame of its own kind from the top. A
/// return pops the nearest call frame and any loops opened above it.

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Pushed by `!=` and consumed by `]`.
    Return(Cursor),
    /// Pushed by `@` and consumed by `@=(`.
    Until(Cursor),
    /// Pushed by `V=start,limit` and consumed by `@=`.
    Next {
        var: Ident,
        cursor: Cursor,
        limit: i16,
    },
}

impl Stack<Frame> {
    /// Loops left open inside the subroutine are discarded with it.
    pub fn pop_return(&mut self) -> Option<Cursor> {
        match self.unwind_to(|frame| matches!(frame, Frame::Return(_))) {
            Some(Frame::Return(cursor)) => Some(cursor),
            _ => None,
        }
    }

    pub fn pop_until(&mut self) -> Option<Cursor> {
        match self.pop_if(|frame| matches!(frame, Frame::Until(_))) {
            Some(Frame::Until(cursor)) => Some(cursor),
            _ => None,
        }
    }

    pub fn pop_next(&mut self) -> Option<(Ident, Cursor, i16)> {
        match self.pop_if(|frame| matches!(frame, Frame::Next { .. })) {
            Some(Frame::Next { var, cursor, limit }) => Some((var, cursor, limit)),
            _ => None,
        }
    }
}
