use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_len() {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }
    /// Pop the top entry only when `pred` accepts it.
    pub fn pop_if<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnOnce(&T) -> bool,
    {
        match self.vec.last() {
            Some(top) if pred(top) => self.vec.pop(),
            _ => None,
        }
    }
    /// Pop the nearest entry `pred` accepts, dropping everything above it.
    /// Nothing changes when no entry is accepted.
    pub fn unwind_to<F>(&mut self, pred: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        let pos = self.vec.iter().rposition(pred)?;
        self.vec.truncate(pos + 1);
        self.vec.pop()
    }
}
