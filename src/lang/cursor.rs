use super::Ident;
use std::rc::Rc;

pub fn is_miep_whitespace(c: u8) -> bool {
    c == b' '
}

pub fn is_miep_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn is_miep_hexdigit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

pub fn is_miep_alphabetic(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// ## Program counter
///
/// A position in a program text. The text is shared, so a cursor is cheap
/// to clone and a saved cursor keeps reading the text it was taken from
/// even after another program is loaded.

#[derive(Clone)]
pub struct Cursor {
    text: Rc<[u8]>,
    pos: usize,
}

impl Default for Cursor {
    fn default() -> Cursor {
        Cursor::new(Rc::from(Vec::new()))
    }
}

impl std::fmt::Debug for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cursor {{ {}/{} }}", self.pos, self.text.len())
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Cursor) -> bool {
        Rc::ptr_eq(&self.text, &other.text) && self.pos == other.pos
    }
}

impl Cursor {
    pub fn new(text: Rc<[u8]>) -> Cursor {
        Cursor { text, pos: 0 }
    }

    pub fn text(&self) -> &Rc<[u8]> {
        &self.text
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.text.get(self.pos).copied()
    }

    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.text.get(self.pos + offset).copied()
    }

    pub fn advance(&mut self) {
        if self.pos < self.text.len() {
            self.pos += 1;
        }
    }

    pub fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(c) if is_miep_whitespace(c)) {
            self.advance();
        }
    }

    /// Consume `ch` if it is next.
    pub fn eat(&mut self, ch: u8) -> bool {
        if self.peek() == Some(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: fn(u8) -> bool) -> &[u8] {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if pred(c)) {
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    /// Unsigned decimal literal, wrapped into 16 bits.
    pub fn decimal(&mut self) -> Option<i16> {
        let digits = self.take_while(is_miep_digit);
        if digits.is_empty() {
            return None;
        }
        Some(digits.iter().fold(0i16, |acc, d| {
            acc.wrapping_mul(10).wrapping_add((d - b'0') as i16)
        }))
    }

    /// Hexadecimal digits without the `$` prefix, wrapped into 16 bits.
    pub fn hex(&mut self) -> Option<i16> {
        let digits = self.take_while(is_miep_hexdigit);
        if digits.is_empty() {
            return None;
        }
        Some(digits.iter().fold(0i16, |acc, d| {
            let nibble = (*d as char).to_digit(16).unwrap_or(0) as i16;
            acc.wrapping_mul(16).wrapping_add(nibble)
        }))
    }

    /// Body of a string literal: everything up to the closing quote or
    /// end of text. The quotes themselves are left to the caller.
    pub fn string(&mut self) -> Vec<u8> {
        let start = self.pos;
        while !matches!(self.peek(), Some(b'"') | None) {
            self.pos += 1;
        }
        self.text[start..self.pos].to_vec()
    }

    /// A variable name: one letter followed by any number of ignored letters.
    pub fn ident(&mut self) -> Option<Ident> {
        let name = self.take_while(is_miep_alphabetic);
        name.first().copied().and_then(Ident::from_letter)
    }

    /// Move to the newline ending this line without consuming it.
    pub fn skip_to_newline(&mut self) {
        while !matches!(self.peek(), Some(b'\n') | None) {
            self.pos += 1;
        }
    }

    /// Move to the start of the next line.
    pub fn skip_line(&mut self) {
        self.skip_to_newline();
        self.eat(b'\n');
    }

    /// Move forward until `ch` is next, crossing lines. Returns false
    /// and rests at end of text when there is no `ch`.
    pub fn seek(&mut self, ch: u8) -> bool {
        while let Some(c) = self.peek() {
            if c == ch {
                return true;
            }
            self.pos += 1;
        }
        false
    }

    /// Everything up to the end of the line, newline excluded.
    pub fn rest_of_line(&mut self) -> String {
        let start = self.pos;
        self.skip_to_newline();
        String::from_utf8_lossy(&self.text[start..self.pos]).into_owned()
    }
}
