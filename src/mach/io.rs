use std::io::{BufRead, BufReader, Read};

/// ## Blocking program input
///
/// Both reads block the whole interpreter. End of stream and read
/// failures read as zero.

pub struct Input {
    reader: Box<dyn BufRead>,
}

impl Default for Input {
    fn default() -> Input {
        Input::new(Box::new(BufReader::new(std::io::stdin())))
    }
}

impl Input {
    pub fn new(reader: Box<dyn BufRead>) -> Input {
        Input { reader }
    }

    /// One raw byte, for the `$` term.
    pub fn read_byte(&mut self) -> i16 {
        let mut byte = [0u8; 1];
        match self.reader.read(&mut byte) {
            Ok(1) => byte[0] as i16,
            _ => 0,
        }
    }

    /// One line as a number, for the `?` term.
    pub fn read_number(&mut self) -> i16 {
        let mut line = String::new();
        if self.reader.read_line(&mut line).is_err() {
            return 0;
        }
        parse_number(line.trim())
    }
}

/// `$` prefixed hexadecimal or signed decimal, truncated to 16 bits.
pub fn parse_number(s: &str) -> i16 {
    let parsed = match s.strip_prefix('$') {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => s.parse::<i64>(),
    };
    parsed.map(|n| n as i16).unwrap_or(0)
}

/// `?(width)=` output. A negative width pads on the right.
pub fn justify(value: i16, width: i16) -> String {
    let w = width.unsigned_abs() as usize;
    if width < 0 {
        format!("{:<w$}", value, w = w)
    } else {
        format!("{:>w$}", value, w = w)
    }
}
