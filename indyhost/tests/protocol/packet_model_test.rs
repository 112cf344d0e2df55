#[path = "../common/mod.rs"]
mod common;

use indyhost::protocol::{
    MAC_ERROR_CODES, MacErrorCode, PacketClass, PacketType, Payload, decode_packet,
    lookup_mac_error_code, lookup_packet_type,
};
use indyhost::test_support;

#[test]
fn packet_type_catalog_lookup() {
    assert_eq!(lookup_packet_type(0x0001), PacketType::CommandEnd);
    assert_eq!(lookup_packet_type(0x000E), PacketType::CommandActive);
    assert_eq!(lookup_packet_type(0x2000), PacketType::NonCriticalFault);
    assert_eq!(lookup_packet_type(0x2000).class(), PacketClass::Status);
    assert_eq!(lookup_packet_type(0x300D), PacketType::Unknown(0x300D));
}

#[test]
fn mac_error_catalog_size_and_lookup() {
    assert!(MAC_ERROR_CODES.len() > 150);
    assert_eq!(lookup_mac_error_code(0x0406).name(), Some("IO_NV_LOCK_ERR"));
    assert!(matches!(
        lookup_mac_error_code(0x0800),
        MacErrorCode::Unknown(0x0800)
    ));
}

#[test]
fn unknown_packet_types_decode_header_only() {
    let data = test_support::header_only_packet(0x5001);
    let packet = decode_packet(&data).unwrap();
    assert_eq!(packet.packet_type(), PacketType::Unknown(0x5001));
    assert_eq!(packet.payload, Payload::None);
}

#[test]
fn command_begin_fixture_is_header_only() {
    let packet = decode_packet(&common::fixtures::command_begin()).unwrap();
    assert_eq!(packet.packet_type(), PacketType::CommandBegin);
    assert_eq!(packet.header.version, 1);
    assert_eq!(packet.payload, Payload::None);
}
