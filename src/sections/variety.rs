//! Character variety section - detects which character classes a password uses.

/// Punctuation counted as the symbol class.
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~`";

pub const LOWERCASE_SIZE: u32 = 26;
pub const UPPERCASE_SIZE: u32 = 26;
pub const DIGIT_SIZE: u32 = 10;
pub const SYMBOL_SIZE: u32 = 32;

/// Presence flags for the four character classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    /// Size of the keyspace implied by the classes present, each counted once.
    pub fn charset_size(&self) -> u32 {
        [
            (self.lowercase, LOWERCASE_SIZE),
            (self.uppercase, UPPERCASE_SIZE),
            (self.digits, DIGIT_SIZE),
            (self.symbols, SYMBOL_SIZE),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum()
    }
}

pub fn is_symbol(c: char) -> bool {
    SYMBOL_CHARS.contains(c)
}

/// Scans the password once and records every class that appears.
pub fn character_variety_section(pwd: &str) -> CharacterClasses {
    pwd.chars().fold(CharacterClasses::default(), |mut classes, c| {
        classes.lowercase |= c.is_ascii_lowercase();
        classes.uppercase |= c.is_ascii_uppercase();
        classes.digits |= c.is_ascii_digit();
        classes.symbols |= is_symbol(c);
        classes
    })
}
