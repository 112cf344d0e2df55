#[path = "../common/mod.rs"]
mod common;

use indyhost::protocol::{AccessError, Payload, decode_packet};
use indyhost::test_support;

fn access_error(flags: u8) -> Option<AccessError> {
    let data = test_support::tag_access_packet(flags, 0x04, 0x0A01);
    match decode_packet(&data).unwrap().payload {
        Payload::TagAccess(access) => {
            assert_eq!(access.flags.bits(), flags);
            access.error
        }
        other => panic!("expected tag access, got {:?}", other),
    }
}

#[test]
fn clean_access_has_no_error_fields() {
    assert_eq!(access_error(0x00), None);
    assert_eq!(access_error(0x80), None);
}

#[test]
fn backscatter_error_reads_tag_error_byte() {
    assert_eq!(access_error(0x02), Some(AccessError::Backscatter(0x04)));
    assert_eq!(access_error(0x09), Some(AccessError::Backscatter(0x04)));
}

#[test]
fn protocol_error_reads_two_bytes() {
    let err = access_error(0x01).unwrap();
    assert_eq!(err, AccessError::Protocol(0x0A01));
    assert_eq!(err.to_string(), "0x0A01");
}
