use crate::lang::Ident;

/// ## Variable memory
///
/// One signed 16-bit cell per letter. Variables start at zero and are
/// never cleared while the interpreter lives.

#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: [i16; Ident::COUNT],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var: Ident) -> i16 {
        self.vars[var.index()]
    }

    pub fn store(&mut self, var: Ident, value: i16) {
        self.vars[var.index()] = value;
    }
}
