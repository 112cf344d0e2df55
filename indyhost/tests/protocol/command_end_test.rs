#[path = "../common/mod.rs"]
mod common;

use indyhost::protocol::{MacErrorCode, MacSubsystem, PacketType, Payload, decode_packet};

#[test]
fn successful_command_end_has_no_error() {
    let packet = decode_packet(&common::fixtures::command_end_ok()).unwrap();
    assert_eq!(packet.packet_type(), PacketType::CommandEnd);
    match packet.payload {
        Payload::CommandEnd(end) => {
            assert_eq!(end.status, MacErrorCode::SUCCESS);
            assert!(!end.is_error());
            assert_eq!(end.status_display(), "0x00000000");
        }
        other => panic!("expected command end, got {:?}", other),
    }
}

#[test]
fn known_mac_error_resolves_by_name() {
    let packet = decode_packet(&common::fixtures::command_end_with(0x0107)).unwrap();
    match packet.payload {
        Payload::CommandEnd(end) => {
            assert!(end.is_error());
            assert_eq!(end.status.name(), Some("HOSTIF_ERR_RXUNKNOWN"));
            assert_eq!(end.status.subsystem(), MacSubsystem::HostInterface);
            assert_eq!(end.status_display(), "0x00000107");
        }
        other => panic!("expected command end, got {:?}", other),
    }
}

#[test]
fn unknown_mac_error_is_still_reported() {
    let packet = decode_packet(&common::fixtures::command_end_with(0x0555)).unwrap();
    match packet.payload {
        Payload::CommandEnd(end) => {
            assert!(end.is_error());
            assert_eq!(end.status, MacErrorCode::Unknown(0x0555));
            assert_eq!(end.status.to_string(), "unknown code 1365");
        }
        other => panic!("expected command end, got {:?}", other),
    }
}

#[test]
fn warning_is_reported_only_for_nonzero_status() {
    common::init_logger();
    let ok = decode_packet(&common::fixtures::command_end_ok()).unwrap();
    assert_eq!(ok.warning(), None);

    for status in [0x0107u32, 0x0555] {
        let packet = decode_packet(&common::fixtures::command_end_with(status)).unwrap();
        let warning = packet.warning().expect("nonzero status warns");
        assert!(warning.starts_with("MAC error code "));
    }
}
