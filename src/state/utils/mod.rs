mod to_bytes;
mod try_from_bytes;
