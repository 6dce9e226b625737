//! End-to-end scenarios from `spec.md` §8, driven the way a host would:
//! one byte at a time through `Transcoder`.

mod util;

use uniregister::convenience::{decode_utf16, decode_utf8, decode_utf32, encode_utf32, encode_utf8};
use uniregister::core::{Config, Transcoder};
use util::{fresh, read_n, write_all};

#[test]
fn scenario_1_basic_bmp_round_trip() {
    let mut t = fresh();
    write_all(&mut t, &[0xE2, 0x98, 0x83], Transcoder::write_utf8);

    assert_eq!(t.register().raw(), 0x2603);
    let status = t.status();
    assert!(status.ready && !status.invalid && !status.overlong && !status.nonuni);
    assert!(t.properties().normal);
    assert!(!t.error());

    assert_eq!(read_n(&mut t, 4, Transcoder::read_utf32), [0x03, 0x26, 0x00, 0x00]);
    t.reset_read();
    assert_eq!(read_n(&mut t, 2, Transcoder::read_utf16), [0x03, 0x26]);
    t.reset_read();
    assert_eq!(read_n(&mut t, 3, Transcoder::read_utf8), [0xE2, 0x98, 0x83]);
}

/// `spec.md` §8 scenario 2 labels this input U+1F34D; applying §4.7's
/// formulas to these exact bytes yields U+1F64D instead, one hex digit off
/// in both surrogate halves — see `DESIGN.md` and
/// `uniregister::core::utf16::tests::decodes_surrogate_pair`.
#[test]
fn scenario_2_surrogate_pair_decode() {
    let mut t = fresh();
    write_all(&mut t, &[0x3D, 0xD8, 0x4D, 0xDE], Transcoder::write_utf16);

    assert_eq!(t.register().raw(), 0x1_F64D);
    assert!(t.status().ready);
    assert!(t.properties().normal);
    assert!(t.properties().highchar);

    let len = t.pointers().rbip();
    assert_eq!(read_n(&mut t, len, Transcoder::read_utf8), [0xF0, 0x9F, 0x99, 0x8D]);
}

#[test]
fn scenario_3_overlong_reject() {
    let mut t = fresh();
    write_all(&mut t, &[0xC0, 0x80], Transcoder::write_utf8);

    assert_eq!(t.register().raw(), 0xFFFF_F000);
    let status = t.status();
    assert!(status.ready);
    assert!(status.overlong);
    assert!(!status.invalid);
    assert!(t.error());

    assert_eq!(read_n(&mut t, 2, Transcoder::read_utf8), [0xC0, 0x80]);
}

#[test]
fn scenario_4_out_of_range_extended() {
    let mut t = fresh();
    write_all(&mut t, &[0xF4, 0x90, 0x80, 0x80], Transcoder::write_utf8);

    assert_eq!(t.register().raw(), 0x0011_0000);
    assert!(t.status().ready);
    assert!(t.status().nonuni);
    assert!(!t.error());

    let mut strict = Transcoder::new(Config::strict_le());
    write_all(&mut strict, &[0xF4, 0x90, 0x80, 0x80], Transcoder::write_utf8);
    assert!(strict.error());
}

#[test]
fn scenario_5_unpaired_high_surrogate_then_retry() {
    let mut t = fresh();
    write_all(&mut t, &[0x3D, 0xD8, 0x41, 0x00], Transcoder::write_utf16);

    assert_eq!(t.register().raw(), 0x0000_D83D);
    assert!(t.status().ready);
    assert!(t.retry());
    assert_eq!(t.pointers().ruip(), 2);

    t.reset_read();
    write_all(&mut t, &[0x41, 0x00], Transcoder::write_utf16);
    assert_eq!(t.register().raw(), 0x41);
    assert!(t.status().ready);
    assert!(!t.retry());
    assert!(!t.error());
}

/// `spec.md` §8 scenario 6 places the truncated register in `FFFF0000..
/// FFFFDFFF` ("3 of 4 bytes consumed"); `E2 98` is only 2 of 3 bytes of a
/// 3-byte lead, which by the §3 table is `FFFFF800..FFFFFF7F` — see
/// `DESIGN.md` and `uniregister::core::utf8::tests::
/// truncated_three_byte_lands_in_underflow_2_of_3`.
#[test]
fn scenario_6_truncated_utf8() {
    let mut t = fresh();
    write_all(&mut t, &[0xE2, 0x98], Transcoder::write_utf8);

    assert_eq!(t.region(), uniregister::core::Region::Utf8Underflow2Of3);
    assert!(!t.status().ready);
    assert!(!t.status().invalid);
    assert!(!t.pointers().bin_eof());
    assert!(!t.pointers().cin_eof());

    assert_eq!(read_n(&mut t, 2, Transcoder::read_utf8), [0xE2, 0x98]);
}

#[test]
fn convenience_helpers_round_trip_pineapple() {
    let encoded = encode_utf8(0x1F34D, Config::default()).unwrap();
    assert_eq!(encoded.as_slice(), [0xF0, 0x9F, 0x8D, 0x8D]);
    let (value, consumed) = decode_utf8(encoded.as_slice(), Config::default()).unwrap();
    assert_eq!(value, 0x1F34D);
    assert_eq!(consumed, 4);

    let bytes = encode_utf32(0x1F34D, Config::default());
    assert_eq!(decode_utf32(bytes, Config::default()), Ok(0x1F34D));
}

#[test]
fn convenience_utf16_surrogate_pair_round_trips() {
    use uniregister::convenience::encode_utf16;

    let encoded = encode_utf16(0x1F34D, Config::default()).unwrap();
    let bytes: Vec<u8> = encoded.as_slice().iter().flat_map(|u| u.to_le_bytes()).collect();
    let (value, consumed) = decode_utf16(&bytes, Config::default()).unwrap();
    assert_eq!(value, 0x1F34D);
    assert_eq!(consumed, 4);
}
