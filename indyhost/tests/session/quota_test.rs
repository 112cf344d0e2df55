#[path = "../common/mod.rs"]
mod common;

use indyhost::callback::{PacketHandler, QuotaPolicy};
use indyhost::host::{HostLibrary, MockHost, Operation};
use indyhost::{Continuation, SessionConfig, test_support};

#[test]
fn forty_packet_quota_stops_on_fortieth_call() {
    common::init_logger();
    let handler = PacketHandler::new(40, QuotaPolicy::AtLeast);
    let data = common::fixtures::inventory_sample();

    let decisions: Vec<Continuation> = (0..40)
        .map(|_| handler.process(&data).unwrap().continuation)
        .collect();
    assert!(decisions[..39].iter().all(|c| *c == Continuation::Continue));
    assert_eq!(decisions[39], Continuation::Stop);
    assert_eq!(handler.packets_handled(), 40);
}

#[test]
fn decoding_twice_with_fresh_counters_is_identical() {
    let data = common::fixtures::command_end_with(0x0019);
    let first = PacketHandler::new(3, QuotaPolicy::AtLeast)
        .process(&data)
        .unwrap();
    let second = PacketHandler::new(3, QuotaPolicy::AtLeast)
        .process(&data)
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(first.sequence, 1);
}

#[test]
fn host_stops_delivering_after_quota() -> anyhow::Result<()> {
    common::init_logger();
    let mut host = test_support::mock_host_with_packets(common::fixtures::inventory_round(20));
    let handler = PacketHandler::new(5, QuotaPolicy::AtLeast);

    let handle = host.open_radio()?;
    host.execute(handle, &Operation::inventory(), &handler, 0)?;

    assert_eq!(host.delivered, 5);
    assert_eq!(host.remaining(), 17);
    assert_eq!(handler.packets_handled(), 5);
    Ok(())
}

#[test]
fn malformed_packets_do_not_end_the_operation() -> anyhow::Result<()> {
    let mut host = MockHost::new();
    host.push_packet(vec![0x01, 0x00, 0x05]);
    host.push_packets(common::fixtures::inventory_round(2));

    let config = SessionConfig::builder().packet_count(100).build()?;
    let mut session = indyhost::Session::open(Box::new(host), config)?;
    let report = session.run(&Operation::inventory())?;

    // begin + 2 tags + end; the three-byte fragment is dropped
    assert_eq!(report.packets_handled, 4);
    assert!(!report.stopped_by_quota);
    Ok(())
}
