/// Size of the flat address space.
pub const MEMORY_SIZE: usize = 0x10000;

/// ## 64K of byte memory
///
/// Addresses are 16-bit and wrap, so there is no out of range access.
/// Words are little-endian and may straddle the top of memory.

#[derive(Clone)]
pub struct Memory {
    ram: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Memory {
        Memory {
            ram: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Memory {{ {} bytes }}", self.ram.len())
    }
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    pub fn byte_address(base: i16, index: i16) -> u16 {
        (base as u16).wrapping_add(index as u16)
    }

    pub fn word_address(base: i16, index: i16) -> u16 {
        (base as u16).wrapping_add((index as u16).wrapping_mul(2))
    }

    pub fn peek(&self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    pub fn poke(&mut self, address: u16, value: u8) {
        self.ram[address as usize] = value;
    }

    /// `V:index)` read. Bytes are unsigned.
    pub fn fetch_byte(&self, base: i16, index: i16) -> i16 {
        self.peek(Memory::byte_address(base, index)) as i16
    }

    pub fn store_byte(&mut self, base: i16, index: i16, value: i16) {
        self.poke(Memory::byte_address(base, index), value as u8);
    }

    /// `V(index)` read.
    pub fn fetch_word(&self, base: i16, index: i16) -> i16 {
        let address = Memory::word_address(base, index);
        let lo = self.peek(address);
        let hi = self.peek(address.wrapping_add(1));
        i16::from_le_bytes([lo, hi])
    }

    pub fn store_word(&mut self, base: i16, index: i16, value: i16) {
        let address = Memory::word_address(base, index);
        let [lo, hi] = value.to_le_bytes();
        self.poke(address, lo);
        self.poke(address.wrapping_add(1), hi);
    }
}
