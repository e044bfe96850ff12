//! Type tags prepended to every hashed payload.

use std::fmt;

/// Single-character discriminator hashed in front of each payload.
///
/// Tags keep values of different kinds apart: the empty string, `nil`,
/// `false`, `[]` and `{}` all hash differently because their tags differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `n` - nil / null.
    Nil,
    /// `u` - unicode string.
    Unicode,
    /// `b` - boolean.
    Boolean,
    /// `i` - integer. Reserved; numbers are always hashed as floats.
    Integer,
    /// `f` - floating-point number.
    Float,
    /// `l` - ordered list.
    List,
    /// `d` - dictionary.
    Dict,
}

impl TypeTag {
    /// All tags in the scheme, including the reserved integer tag.
    pub const ALL: [TypeTag; 7] = [
        TypeTag::Nil,
        TypeTag::Unicode,
        TypeTag::Boolean,
        TypeTag::Integer,
        TypeTag::Float,
        TypeTag::List,
        TypeTag::Dict,
    ];

    /// The tag as its one-character string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Nil => "n",
            TypeTag::Unicode => "u",
            TypeTag::Boolean => "b",
            TypeTag::Integer => "i",
            TypeTag::Float => "f",
            TypeTag::List => "l",
            TypeTag::Dict => "d",
        }
    }

    /// UTF-8 bytes fed to the hash ahead of the payload.
    pub fn as_bytes(&self) -> &'static [u8] {
        self.as_str().as_bytes()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
