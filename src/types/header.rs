//! Header constants for the encoded array form

/// Magic bytes identifying an encoded array
pub const MAGIC: &[u8; 8] = b"NIXNDARR";

/// Current format version
pub const VERSION: u32 = 1;

/// Header size in bytes (magic + version + flags)
pub const HEADER_SIZE: usize = 16;
