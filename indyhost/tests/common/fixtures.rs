// Captured-style host interface packets shared by the integration tests.

use indyhost::test_support;

/// 96-bit EPC used across the fixtures.
pub const SAMPLE_EPC_HEX: &str = "E2801160600002054CC2F6D1";

/// 128-bit pattern for the 16-byte EPC scenario.
pub const PATTERN_EPC_HEX: &str = "00112233445566778899AABBCCDDEEFF";

pub fn sample_epc() -> Vec<u8> {
    hex::decode(SAMPLE_EPC_HEX).unwrap()
}

pub fn pattern_epc() -> Vec<u8> {
    hex::decode(PATTERN_EPC_HEX).unwrap()
}

/// Command-begin, sixteen bytes, as emitted at the start of every operation.
pub fn command_begin() -> Vec<u8> {
    hex::decode("01000000020000000F00000010270000").unwrap()
}

/// Successful command-end.
pub fn command_end_ok() -> Vec<u8> {
    hex::decode("01000100020000002C01000000000000").unwrap()
}

pub fn command_end_with(status: u32) -> Vec<u8> {
    test_support::command_end_packet(status)
}

pub fn inventory_sample() -> Vec<u8> {
    test_support::inventory_packet(&sample_epc(), 0x00)
}

/// One inventory round: begin, `tags` inventory packets, end.
pub fn inventory_round(tags: usize) -> Vec<Vec<u8>> {
    let mut packets = vec![command_begin()];
    packets.extend((0..tags).map(|_| inventory_sample()));
    packets.push(command_end_ok());
    packets
}
