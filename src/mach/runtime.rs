use super::io::{justify, Input};
use super::{Frame, Memory, Program, Stack, Var, LINE_END, LINE_NONE};
use crate::error;
use crate::lang::{is_miep_alphabetic, Cursor, Error, LineNumber};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::BufRead;
use std::rc::Rc;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Events
///
/// `Runtime::execute` returns to the caller whenever there is something
/// for the terminal to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A fatal error. The runtime is stopped.
    Errors(Arc<Vec<Error>>),
    /// `*LD`: the terminal should read this file and hand it to `load`.
    Load(String),
    /// Output of the statement that just ran. Write it out and flush.
    Print(String),
    /// `*QU`: the process should exit successfully.
    Quit,
    /// The cycle budget ran out. Call `execute` again.
    Running,
    /// End of program.
    Stopped,
}

/// ## Interpreter state
///
/// Everything one running program can touch. Nothing is global, so any
/// number of runtimes can coexist.
pub struct Runtime {
    pub(super) program: Program,
    pub(super) cursor: Cursor,
    pub(super) line: LineNumber,
    pub(super) line_start: bool,
    stopped: bool,
    pending: Option<Event>,
    pub(super) stack: Stack<Frame>,
    pub(super) var: Var,
    pub(super) mem: Memory,
    pub(super) remainder: i16,
    pub(super) rng: StdRng,
    pub(super) input: Input,
    pub(super) print_buffer: String,
    tron: bool,
    pub(super) for_mode: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            program: Program::default(),
            cursor: Cursor::default(),
            line: LINE_NONE,
            line_start: true,
            stopped: true,
            pending: None,
            stack: Stack::new("TOO MANY NESTED FRAMES"),
            var: Var::new(),
            mem: Memory::new(),
            remainder: 0,
            rng: StdRng::from_entropy(),
            input: Input::default(),
            print_buffer: String::new(),
            tron: false,
            for_mode: false,
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Replace standard input as the source for `$` and `?` terms.
    pub fn set_input(&mut self, reader: Box<dyn BufRead>) {
        self.input = Input::new(reader);
    }

    /// Make `text` the active program. Nothing else is reset: a running
    /// program keeps executing the old text until its next jump.
    pub fn load<T: AsRef<[u8]>>(&mut self, text: T) {
        self.program = Program::new(Rc::from(text.as_ref()));
    }

    /// Begin execution at the first line numbered 1 or above.
    pub fn start(&mut self) {
        self.stopped = false;
        self.pending = None;
        self.goto(1);
    }

    pub fn line_number(&self) -> LineNumber {
        self.line
    }

    pub fn is_tracing(&self) -> bool {
        self.tron
    }

    pub fn is_for_mode(&self) -> bool {
        self.for_mode
    }

    /// Evaluate an expression outside of any program, sharing variables,
    /// memory and the remainder register with it.
    pub fn evaluate(&mut self, expression: &str) -> Result<i16> {
        let saved = std::mem::replace(
            &mut self.cursor,
            Cursor::new(Rc::from(expression.as_bytes())),
        );
        let result = self.expression();
        self.cursor = saved;
        result
    }

    /// Run at most `cycles` steps. A step is one statement or one line
    /// number. Output is returned after every statement that made some.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.pending.take() {
            return event;
        }
        if self.stopped {
            return Event::Stopped;
        }
        for _ in 0..cycles {
            let event = match self.step() {
                Ok(None) => None,
                Ok(Some(event)) => Some(event),
                Err(error) => Some(Event::Errors(Arc::new(vec![
                    error.or_line_number(self.line)
                ]))),
            };
            if let Some(event) = event {
                if !matches!(event, Event::Load(_)) {
                    self.stopped = true;
                }
                if self.print_buffer.is_empty() {
                    return event;
                }
                self.pending = Some(event);
                return Event::Print(std::mem::take(&mut self.print_buffer));
            }
            if !self.print_buffer.is_empty() {
                return Event::Print(std::mem::take(&mut self.print_buffer));
            }
        }
        Event::Running
    }

    pub(super) fn print(&mut self, s: &str) {
        self.print_buffer.push_str(s);
    }

    /// Consume `ch`, or report a syntax error and carry on without it.
    pub(super) fn expect(&mut self, ch: u8) {
        if !self.cursor.eat(ch) {
            let error = error!(SyntaxError, self.line);
            self.print(&format!("{}\n", error));
        }
    }

    /// Double-quoted literal with the cursor on the opening quote. A
    /// literal may run across lines; one left open ends at end of text.
    pub(super) fn string(&mut self) -> Vec<u8> {
        self.expect(b'"');
        let bytes = self.cursor.string();
        self.expect(b'"');
        bytes
    }

    fn step(&mut self) -> Result<Option<Event>> {
        if !self.line_start {
            return self.statement();
        }
        if self.cursor.is_at_end() || self.line == LINE_END {
            return Ok(Some(Event::Stopped));
        }
        self.line_start = false;
        if self.line != LINE_NONE {
            let number = self.cursor.decimal().unwrap_or(LINE_END);
            if self.tron {
                self.print(&format!("[{}]", number));
            }
            self.line = number;
            if self.cursor.peek() != Some(b' ') {
                self.cursor.skip_line();
                self.line_start = true;
            }
        }
        Ok(None)
    }

    fn statement(&mut self) -> Result<Option<Event>> {
        let ch = match self.cursor.peek() {
            Some(ch) => ch,
            None => return Ok(Some(Event::Stopped)),
        };
        match ch {
            b'\n' => {
                self.cursor.advance();
                self.line_start = true;
                return Ok(None);
            }
            b' ' | b'\r' => {
                self.cursor.advance();
                return Ok(None);
            }
            b'"' => {
                let bytes = self.string();
                let text: String = bytes.into_iter().map(char::from).collect();
                self.print(&text);
                return Ok(None);
            }
            _ if is_miep_alphabetic(ch) => {
                self.assignment()?;
                return Ok(None);
            }
            _ => {}
        }
        self.cursor.advance();
        match ch {
            b'/' => self.print("\n"),
            b'.' => {
                self.expect(b'=');
                let count = self.expression()?;
                if count > 0 {
                    self.print(&" ".repeat(count as usize));
                }
            }
            b'*' => return self.command(),
            b'?' => self.print_value()?,
            b'\'' => {
                self.expect(b'=');
                let seed = self.expression()?;
                self.rng = StdRng::seed_from_u64(seed as u64);
            }
            b'$' => {
                self.expect(b'=');
                let value = self.expression()?;
                self.print(&char::from(value as u8).to_string());
            }
            b'#' => {
                self.expect(b'=');
                let target = self.expression()?;
                self.goto(target);
            }
            b'!' => {
                self.expect(b'=');
                let target = self.expression()?;
                self.gosub(target)?;
            }
            b']' => self.return_from_gosub(),
            b'@' => {
                if self.cursor.eat(b'=') {
                    if self.cursor.peek() == Some(b'(') {
                        self.until()?;
                    } else {
                        self.next()?;
                    }
                } else {
                    self.do_loop()?;
                }
            }
            b';' => {
                self.expect(b'=');
                if self.expression()? == 0 {
                    self.cursor.skip_to_newline();
                }
            }
            _ => return Err(error!(SyntaxError)),
        }
        Ok(None)
    }

    /// `V=expr`, `V:index)=expr` or `V(index)=expr`, optionally
    /// followed by `,limit` to open a counted loop on `V`.
    fn assignment(&mut self) -> Result<()> {
        let var = match self.cursor.ident() {
            Some(var) => var,
            None => return Err(error!(SyntaxError)),
        };
        if self.cursor.eat(b':') {
            let index = self.expression()?;
            self.expect(b')');
            self.expect(b'=');
            let value = self.expression()?;
            self.mem.store_byte(self.var.fetch(var), index, value);
        } else if self.cursor.eat(b'(') {
            let index = self.expression()?;
            self.expect(b')');
            self.expect(b'=');
            let value = self.expression()?;
            self.mem.store_word(self.var.fetch(var), index, value);
        } else {
            self.expect(b'=');
            let value = self.expression()?;
            self.var.store(var, value);
        }
        if self.cursor.eat(b',') {
            self.counted_loop(var)?;
        }
        Ok(())
    }

    /// `?=`, `??=`, `?$=` and `?(width)=`.
    fn print_value(&mut self) -> Result<()> {
        let text = match self.cursor.peek() {
            Some(b'=') => {
                self.cursor.advance();
                self.expression()?.to_string()
            }
            Some(b'?') => {
                self.cursor.advance();
                self.expect(b'=');
                format!("{:04x}", self.expression()? as u16)
            }
            Some(b'$') => {
                self.cursor.advance();
                self.expect(b'=');
                format!("{:02x}", self.expression()? as u8)
            }
            Some(b'(') => {
                self.cursor.advance();
                let width = self.expression()?;
                self.expect(b')');
                self.expect(b'=');
                justify(self.expression()?, width)
            }
            _ => return Err(error!(SyntaxError)),
        };
        self.print(&text);
        Ok(())
    }

    /// Two letter `*` commands.
    fn command(&mut self) -> Result<Option<Event>> {
        let first = self.command_letter();
        let second = self.command_letter();
        match (first, second) {
            (b'L', b'D') => {
                self.cursor.skip_spaces();
                let filename = self.cursor.rest_of_line();
                return Ok(Some(Event::Load(filename.trim_end().to_string())));
            }
            (b'Q', b'U') => return Ok(Some(Event::Quit)),
            (b'T', b'N') => self.tron = true,
            (b'T', b'F') => self.tron = false,
            (b'S', b'H') => self.print("Shell command not supported\n"),
            (b'F', b'M') => {
                self.cursor.eat(b'=');
                self.for_mode = self.expression()? != 0;
            }
            _ => return Err(error!(SyntaxError)),
        }
        Ok(None)
    }

    fn command_letter(&mut self) -> u8 {
        let letter = self.cursor.peek().unwrap_or(0).to_ascii_uppercase();
        self.cursor.advance();
        letter
    }
}
