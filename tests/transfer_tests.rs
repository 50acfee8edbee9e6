//! End-to-end transfer scenarios
//!
//! These tests drive the engine through the full public surface: a
//! directory seeded with accounts, the production trait seams, and the
//! transfer call. They cover:
//! - Happy path balance movement and notification delivery
//! - Overdraft and validation rejections leaving balances untouched
//! - Concurrent two-way transfer storms over a shared account pair,
//!   checking the conservation invariant and that no balance ever goes
//!   negative
//! - Fully parallel transfers over disjoint account pairs

use rstest::rstest;
use rust_decimal::Decimal;
use rust_transfer_engine::{
    Account, AccountDirectory, InMemoryDirectory, Notifier, NotificationError, TransferEngine,
    TransferError, TransferRequest, TransferSide,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// Notifier that records every delivered message for assertions
#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<(String, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, account: &Account, message: &str) -> Result<(), NotificationError> {
        self.messages
            .lock()
            .unwrap()
            .push((account.account_id.clone(), message.to_string()));
        Ok(())
    }
}

fn engine_with_accounts(
    balances: &[(&str, Decimal)],
) -> (TransferEngine<InMemoryDirectory, RecordingNotifier>, RecordingNotifier) {
    let directory = InMemoryDirectory::new();
    for (id, balance) in balances {
        directory
            .create(Account::with_balance(*id, *balance))
            .unwrap();
    }
    let notifier = RecordingNotifier::default();
    (TransferEngine::new(directory, notifier.clone()), notifier)
}

fn balance_of<D: AccountDirectory>(directory: &D, id: &str) -> Decimal {
    directory.lookup(id).unwrap().lock().unwrap().balance
}

#[test]
fn test_happy_path_moves_funds_and_notifies_both_holders() {
    // A=123.45, B=123.45; transfer 50 from A to B
    let (engine, notifier) = engine_with_accounts(&[
        ("Id-100", Decimal::new(12345, 2)),
        ("Id-101", Decimal::new(12345, 2)),
    ]);

    engine
        .transfer("Id-100", "Id-101", Decimal::new(50, 0))
        .unwrap();

    assert_eq!(
        balance_of(engine.directory(), "Id-100"),
        Decimal::new(7345, 2)
    );
    assert_eq!(
        balance_of(engine.directory(), "Id-101"),
        Decimal::new(17345, 2)
    );

    let messages = notifier.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].0, "Id-100");
    assert_eq!(messages[1].0, "Id-101");
}

#[test]
fn test_overdraft_rejected_with_balances_unchanged() {
    // A=1000, B=1000; transfer 1005 fails, balances stay 1000/1000
    let (engine, notifier) = engine_with_accounts(&[
        ("Id-100", Decimal::new(1000, 0)),
        ("Id-101", Decimal::new(1000, 0)),
    ]);

    let result = engine.transfer("Id-100", "Id-101", Decimal::new(1005, 0));

    assert!(matches!(
        result,
        Err(TransferError::InsufficientBalance { .. })
    ));
    assert_eq!(
        balance_of(engine.directory(), "Id-100"),
        Decimal::new(1000, 0)
    );
    assert_eq!(
        balance_of(engine.directory(), "Id-101"),
        Decimal::new(1000, 0)
    );
    assert!(notifier.messages().is_empty());
}

#[rstest]
#[case::would_zero_the_source(Decimal::new(1000, 0), false)]
#[case::leaves_positive_remainder(Decimal::new(99999, 2), true)]
fn test_sufficiency_boundary(#[case] amount: Decimal, #[case] should_succeed: bool) {
    let (engine, _) = engine_with_accounts(&[
        ("Id-100", Decimal::new(1000, 0)),
        ("Id-101", Decimal::new(1000, 0)),
    ]);

    let result = engine.transfer("Id-100", "Id-101", amount);

    assert_eq!(result.is_ok(), should_succeed);
}

#[rstest]
#[case::missing_from("Id-999", "Id-101", TransferSide::From)]
#[case::missing_to("Id-100", "Id-999", TransferSide::To)]
fn test_missing_account_reports_the_right_side(
    #[case] from: &str,
    #[case] to: &str,
    #[case] side: TransferSide,
) {
    let (engine, _) = engine_with_accounts(&[
        ("Id-100", Decimal::new(1000, 0)),
        ("Id-101", Decimal::new(1000, 0)),
    ]);

    let result = engine.transfer(from, to, Decimal::new(100, 0));

    assert_eq!(
        result,
        Err(TransferError::account_not_found(side, "Id-999"))
    );
}

#[test]
fn test_execute_request_round_trip() {
    let (engine, _) = engine_with_accounts(&[
        ("Id-100", Decimal::new(1000, 0)),
        ("Id-101", Decimal::new(1000, 0)),
    ]);

    let request = TransferRequest::new("Id-100", "Id-101", Decimal::new(250, 0));
    engine.execute(&request).unwrap();

    assert_eq!(
        balance_of(engine.directory(), "Id-100"),
        Decimal::new(750, 0)
    );
    assert_eq!(
        balance_of(engine.directory(), "Id-101"),
        Decimal::new(1250, 0)
    );
}

// Concurrency properties
//
// The storms below interleave transfers in both directions over a shared
// account pair. Every transfer must succeed (balances never drop low enough
// for the sufficiency check to fire), the combined balance must be
// conserved exactly, and an observer thread must never see a negative
// balance.

#[test]
fn test_concurrent_two_way_transfers_conserve_combined_balance() {
    const THREADS_PER_DIRECTION: usize = 10;

    let (engine, notifier) = engine_with_accounts(&[
        ("Id-100", Decimal::new(1000, 0)),
        ("Id-101", Decimal::new(1000, 0)),
    ]);
    let engine = Arc::new(engine);
    let mut handles = vec![];

    // N transfers of 5 from A to B and N of 5 from B to A, interleaved
    for i in 0..THREADS_PER_DIRECTION * 2 {
        let engine_clone = Arc::clone(&engine);
        let handle = thread::spawn(move || {
            let (from, to) = if i % 2 == 0 {
                ("Id-100", "Id-101")
            } else {
                ("Id-101", "Id-100")
            };
            engine_clone.transfer(from, to, Decimal::new(5, 0))
        });
        handles.push(handle);
    }

    for handle in handles {
        // Every transfer must have succeeded
        handle.join().unwrap().unwrap();
    }

    // Equal traffic in both directions nets out to the starting balances
    assert_eq!(
        balance_of(engine.directory(), "Id-100"),
        Decimal::new(1000, 0)
    );
    assert_eq!(
        balance_of(engine.directory(), "Id-101"),
        Decimal::new(1000, 0)
    );
    let combined =
        balance_of(engine.directory(), "Id-100") + balance_of(engine.directory(), "Id-101");
    assert_eq!(combined, Decimal::new(2000, 0));

    // Two notifications per completed transfer
    assert_eq!(notifier.messages().len(), THREADS_PER_DIRECTION * 2 * 2);
}

#[test]
fn test_concurrent_transfers_never_expose_a_negative_balance() {
    const TRANSFERS_PER_THREAD: usize = 50;

    let (engine, _) = engine_with_accounts(&[
        ("Id-100", Decimal::new(1000, 0)),
        ("Id-101", Decimal::new(1000, 0)),
    ]);
    let engine = Arc::new(engine);
    let stop = Arc::new(AtomicBool::new(false));

    // Observer repeatedly inspects both balances while transfers run;
    // outside a critical section a balance must never be negative.
    let observer = {
        let engine_clone = Arc::clone(&engine);
        let stop_clone = Arc::clone(&stop);
        thread::spawn(move || {
            while !stop_clone.load(Ordering::Relaxed) {
                for id in ["Id-100", "Id-101"] {
                    let balance = balance_of(engine_clone.directory(), id);
                    assert!(balance >= Decimal::ZERO, "observed negative balance on {}", id);
                }
            }
        })
    };

    let mut handles = vec![];
    for i in 0..8 {
        let engine_clone = Arc::clone(&engine);
        let handle = thread::spawn(move || {
            let (from, to) = if i % 2 == 0 {
                ("Id-100", "Id-101")
            } else {
                ("Id-101", "Id-100")
            };
            // Worst-case one-way outflow is 4 * 50 * 2 = 400, well inside
            // the 1000 starting balance, so every transfer must succeed.
            for _ in 0..TRANSFERS_PER_THREAD {
                engine_clone.transfer(from, to, Decimal::new(2, 0)).unwrap();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
    stop.store(true, Ordering::Relaxed);
    observer.join().unwrap();

    let combined =
        balance_of(engine.directory(), "Id-100") + balance_of(engine.directory(), "Id-101");
    assert_eq!(combined, Decimal::new(2000, 0));
}

#[test]
fn test_transfers_over_disjoint_pairs_proceed_independently() {
    let (engine, _) = engine_with_accounts(&[
        ("Id-100", Decimal::new(1000, 0)),
        ("Id-101", Decimal::new(1000, 0)),
        ("Id-200", Decimal::new(1000, 0)),
        ("Id-201", Decimal::new(1000, 0)),
    ]);
    let engine = Arc::new(engine);
    let mut handles = vec![];

    for (from, to) in [("Id-100", "Id-101"), ("Id-200", "Id-201")] {
        let engine_clone = Arc::clone(&engine);
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                engine_clone.transfer(from, to, Decimal::new(1, 0)).unwrap();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        balance_of(engine.directory(), "Id-100"),
        Decimal::new(900, 0)
    );
    assert_eq!(
        balance_of(engine.directory(), "Id-101"),
        Decimal::new(1100, 0)
    );
    assert_eq!(
        balance_of(engine.directory(), "Id-200"),
        Decimal::new(900, 0)
    );
    assert_eq!(
        balance_of(engine.directory(), "Id-201"),
        Decimal::new(1100, 0)
    );
}

#[test]
fn test_overlapping_pairs_with_shared_account_do_not_deadlock() {
    // Three accounts, transfers around the ring in both directions: every
    // pair overlaps with its neighbors, which is exactly the shape that
    // deadlocks without a global lock order.
    let (engine, _) = engine_with_accounts(&[
        ("Id-100", Decimal::new(1000, 0)),
        ("Id-101", Decimal::new(1000, 0)),
        ("Id-102", Decimal::new(1000, 0)),
    ]);
    let engine = Arc::new(engine);
    let mut handles = vec![];

    let routes = [
        ("Id-100", "Id-101"),
        ("Id-101", "Id-102"),
        ("Id-102", "Id-100"),
        ("Id-101", "Id-100"),
        ("Id-102", "Id-101"),
        ("Id-100", "Id-102"),
    ];
    for (from, to) in routes {
        let engine_clone = Arc::clone(&engine);
        let handle = thread::spawn(move || {
            for _ in 0..50 {
                engine_clone.transfer(from, to, Decimal::new(2, 0)).unwrap();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Symmetric traffic nets out; total funds conserved either way
    let combined = balance_of(engine.directory(), "Id-100")
        + balance_of(engine.directory(), "Id-101")
        + balance_of(engine.directory(), "Id-102");
    assert_eq!(combined, Decimal::new(3000, 0));
}
