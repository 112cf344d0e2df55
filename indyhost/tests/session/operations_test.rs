#[path = "../common/mod.rs"]
mod common;

use indyhost::host::{MockHost, Operation};
use indyhost::types::MemoryBank;
use indyhost::{Error, Session, SessionConfig, test_support};

fn console_operations() -> Vec<Operation> {
    vec![
        Operation::inventory(),
        Operation::read_epc(),
        Operation::Qt {
            bank: MemoryBank::Epc,
            offset: 2,
            count: 6,
            access_password: 0,
        },
        Operation::BlockErase {
            bank: MemoryBank::Reserved,
            offset: 0,
            count: 4,
            access_password: 0,
        },
        Operation::random_carrier_wave(),
    ]
}

#[test]
fn console_sequence_runs_every_operation() -> anyhow::Result<()> {
    common::init_logger();
    let mut packets = Vec::new();
    for _ in 0..5 {
        packets.extend(common::fixtures::inventory_round(1));
    }
    let config = SessionConfig::builder().packet_count(3).build()?;
    let mut session = test_support::mock_session(packets, config)?;

    let reports = session.run_all(&console_operations())?;
    assert_eq!(reports.len(), 5);
    for report in &reports {
        assert_eq!(report.packets_handled, 3);
        assert!(report.stopped_by_quota);
    }
    assert_eq!(reports[4].operation, "RadioTurnCarrierWaveOnRandom");
    Ok(())
}

#[test]
fn kill_runs_when_enabled() -> anyhow::Result<()> {
    let config = SessionConfig::builder()
        .enable_tag_kill(true)
        .enable_tag_lock(true)
        .build()?;
    let mut session = test_support::mock_session(common::fixtures::inventory_round(0), config)?;

    let kill = Operation::Kill {
        access_password: 0,
        kill_password: 0,
    };
    let report = session.run(&kill)?;
    assert_eq!(report.packets_handled, 2);

    let lock = session.run(&Operation::Lock { access_password: 0 })?;
    assert_eq!(lock.packets_handled, 0);
    Ok(())
}

#[test]
fn run_all_stops_at_first_error() {
    let mut session =
        test_support::mock_session(common::fixtures::inventory_round(1), SessionConfig::default())
            .unwrap();
    let ops = [
        Operation::inventory(),
        Operation::Lock { access_password: 0 },
        Operation::read_epc(),
    ];
    assert!(matches!(
        session.run_all(&ops),
        Err(Error::OperationDisabled("Tag18K6CLock"))
    ));
}

#[test]
fn close_returns_host_and_records_handle() -> anyhow::Result<()> {
    let session = Session::open(Box::new(MockHost::new()), SessionConfig::default())?;
    let handle = session.handle();
    let _host = session.close()?;
    assert_eq!(handle.as_i32(), 1);
    Ok(())
}

#[test]
fn session_settings_reach_the_host() -> anyhow::Result<()> {
    use std::sync::{Arc, Mutex};

    let host = Arc::new(Mutex::new(MockHost::new()));
    let config = SessionConfig::builder()
        .dwell_time_ms(1000)
        .power_level(330)
        .tag_focus(true)
        .fast_id(true)
        .build()?;
    let session = Session::open(Box::new(host.clone()), config.clone())?;
    session.close()?;

    let host = host.lock().unwrap();
    assert_eq!(host.antenna_configs.len(), 1);
    assert_eq!(host.antenna_configs[0].1, config.antenna_port());
    assert_eq!(host.extensions[0].1, config.impinj_extensions());
    assert_eq!(host.closed.len(), 1);
    Ok(())
}
