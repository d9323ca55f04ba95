use super::{Frame, Runtime, LINE_END};
use crate::lang::{Error, Ident, LineNumber};

type Result<T> = std::result::Result<T, Error>;

// Control flow moves the cursor. A jump lands on the start of a line so
// the dispatcher re-reads its line number; everything else resumes
// mid-line. Popping a frame of the wrong kind, or from an empty stack,
// does nothing.

impl Runtime {
    /// `#=line`
    pub(super) fn goto(&mut self, target: LineNumber) {
        self.line_start = true;
        if target == LINE_END {
            self.line = LINE_END;
            return;
        }
        match self.program.search(target) {
            Some((number, cursor)) => {
                self.line = number;
                self.cursor = cursor;
            }
            None => self.line = LINE_END,
        }
    }

    /// `!=line`
    pub(super) fn gosub(&mut self, target: LineNumber) -> Result<()> {
        self.stack.push(Frame::Return(self.cursor.clone()))?;
        self.goto(target);
        Ok(())
    }

    /// `]` restores the cursor but not the current line number.
    pub(super) fn return_from_gosub(&mut self) {
        if let Some(cursor) = self.stack.pop_return() {
            self.cursor = cursor;
        }
    }

    /// `@`
    pub(super) fn do_loop(&mut self) -> Result<()> {
        self.stack.push(Frame::Until(self.cursor.clone()))
    }

    /// `@=(cond)` loops back to the matching `@` while `cond` is zero.
    pub(super) fn until(&mut self) -> Result<()> {
        match self.stack.pop_until() {
            Some(cursor) => {
                if self.expression()? == 0 {
                    self.cursor = cursor.clone();
                    self.stack.push(Frame::Until(cursor))?;
                }
            }
            None => {
                self.expression()?;
            }
        }
        Ok(())
    }

    /// `V=start,limit` after the assignment to `var` is done.
    pub(super) fn counted_loop(&mut self, var: Ident) -> Result<()> {
        let limit = self.expression()?;
        if self.var.fetch(var) > limit && self.for_mode {
            if self.cursor.seek(b'@') {
                self.cursor.advance();
                self.expect(b'=');
                self.expression()?;
            }
            return Ok(());
        }
        self.stack.push(Frame::Next {
            var,
            cursor: self.cursor.clone(),
            limit,
        })
    }

    /// `@=step` stores the step into the loop variable and loops while
    /// it has not passed the limit.
    pub(super) fn next(&mut self) -> Result<()> {
        match self.stack.pop_next() {
            Some((var, cursor, limit)) => {
                let value = self.expression()?;
                self.var.store(var, value);
                if value <= limit {
                    self.cursor = cursor.clone();
                    self.stack.push(Frame::Next { var, cursor, limit })?;
                }
            }
            None => {
                self.expression()?;
            }
        }
        Ok(())
    }
}
