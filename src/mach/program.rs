use crate::lang::{Cursor, LineNumber};
use std::rc::Rc;

/// Current line before any line has been entered.
pub const LINE_NONE: LineNumber = 0;
/// Current line once execution must stop. Also what an unnumbered line parses as.
pub const LINE_END: LineNumber = -1;

/// ## The active program text
///
/// Lines are found by scanning the text from the top every time.

#[derive(Debug, Clone)]
pub struct Program {
    text: Rc<[u8]>,
}

impl Default for Program {
    fn default() -> Program {
        Program::new(Rc::from(Vec::new()))
    }
}

impl Program {
    pub fn new(text: Rc<[u8]>) -> Program {
        Program { text }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.text.clone())
    }

    /// The first line numbered `target` or above, with a cursor at its start.
    /// A leading `#` line is a comment. An unnumbered line ends the search.
    pub fn search(&self, target: LineNumber) -> Option<(LineNumber, Cursor)> {
        let mut cursor = self.cursor();
        if cursor.peek() == Some(b'#') {
            cursor.skip_line();
        }
        while !cursor.is_at_end() {
            let start = cursor.clone();
            let number = match cursor.decimal() {
                Some(number) if number != LINE_END => number,
                _ => return None,
            };
            if number >= target {
                return Some((number, start));
            }
            cursor.skip_line();
        }
        None
    }
}
