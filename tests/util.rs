use uniregister::core::{Config, Transcoder};

/// Writes every byte of `bytes` into `t` through `write`, one at a time.
pub fn write_all(t: &mut Transcoder, bytes: &[u8], write: impl Fn(&mut Transcoder, u8)) {
    for &byte in bytes {
        write(t, byte);
    }
}

/// Reads `count` bytes out of `t` through `read`, collecting them in order.
pub fn read_n(t: &mut Transcoder, count: u8, read: impl Fn(&mut Transcoder) -> u8) -> Vec<u8> {
    (0..count).map(|_| read(t)).collect()
}

/// A fresh transcoder with permissive, little-endian configuration.
pub fn fresh() -> Transcoder {
    Transcoder::new(Config::default())
}
