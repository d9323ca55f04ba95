/// A variable name. Only the first letter of a name is significant and
/// case is folded, so there are exactly 26 of them.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Ident(u8);

impl Ident {
    pub const COUNT: usize = 26;

    pub fn from_letter(ch: u8) -> Option<Ident> {
        if ch.is_ascii_alphabetic() {
            Some(Ident(ch.to_ascii_uppercase() - b'A'))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(b'A' + self.0))
    }
}
