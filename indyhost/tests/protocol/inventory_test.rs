#[path = "../common/mod.rs"]
mod common;

use indyhost::protocol::{Payload, decode_packet};
use indyhost::{Error, test_support};

#[test]
fn sixteen_byte_epc_renders_as_uppercase_hex() {
    let epc = common::fixtures::pattern_epc();
    let data = test_support::inventory_packet(&epc, 0x00);
    assert_eq!(u16::from_le_bytes([data[4], data[5]]), 7);

    match decode_packet(&data).unwrap().payload {
        Payload::Inventory(inv) => {
            assert_eq!(inv.epc.to_hex(), common::fixtures::PATTERN_EPC_HEX);
            assert_eq!(inv.epc.to_hex().len(), 32);
        }
        other => panic!("expected inventory, got {:?}", other),
    }
}

#[test]
fn padding_bytes_are_excluded() {
    let epc = common::fixtures::sample_epc();
    // 10 EPC bytes + 2 padding bytes announced in flags bits 6..7
    let data = test_support::inventory_packet(&epc[..10], 0x80);
    match decode_packet(&data).unwrap().payload {
        Payload::Inventory(inv) => assert_eq!(inv.epc.as_bytes(), &epc[..10]),
        other => panic!("expected inventory, got {:?}", other),
    }
}

#[test]
fn truncated_inventory_is_a_length_error() {
    let mut data = common::fixtures::inventory_sample();
    data.truncate(24);
    match decode_packet(&data) {
        Err(Error::InvalidLength { expected, actual }) => {
            assert_eq!(expected, 32);
            assert_eq!(actual, 24);
        }
        other => panic!("expected InvalidLength, got {:?}", other),
    }
}

#[test]
fn bare_header_inventory_decodes_without_epc() {
    // 16 bytes, length 3: no inventory data words
    let data = hex::decode("01000500030000000000000000000000").unwrap();
    let packet = decode_packet(&data).unwrap();
    match packet.payload {
        Payload::Inventory(inv) => assert!(inv.epc.is_empty()),
        other => panic!("expected inventory, got {:?}", other),
    }
}
