//! Expiry sweeps over a shared store
use chrono::{Duration, Utc};
use mediagate_backend::auth::{Janitor, SessionStore};
use std::time::Duration as StdDuration;

#[tokio::test]
async fn test_sweep_removes_exactly_the_expired_entries() {
    let store = SessionStore::default();

    let mut early = Vec::new();
    for _ in 0..4 {
        early.push(store.create().await);
    }
    tokio::time::sleep(StdDuration::from_millis(5)).await;
    let cutoff = Utc::now() + store.ttl();
    tokio::time::sleep(StdDuration::from_millis(5)).await;

    let mut late = Vec::new();
    for _ in 0..3 {
        late.push(store.create().await);
    }

    // Every early session expires strictly before the cutoff, every late one after
    let removed = store.purge_expired(cutoff).await;
    assert_eq!(removed, early.len());
    for session in &early {
        assert!(!store.lookup(&session.id).await);
    }
    for session in &late {
        assert!(store.lookup(&session.id).await);
    }
    assert_eq!(store.len().await, late.len());
}

#[tokio::test]
async fn test_sweep_on_empty_store() {
    let store = SessionStore::default();
    assert_eq!(store.purge_expired(Utc::now()).await, 0);
}

#[tokio::test(start_paused = true)]
async fn test_spawned_janitor_sweeps_on_interval() {
    let store = SessionStore::new(Duration::seconds(-1));
    let handle = Janitor::spawn(store.clone(), StdDuration::from_secs(600));

    let first = store.create().await;
    tokio::time::sleep(StdDuration::from_secs(601)).await;
    assert!(!store.lookup(&first.id).await);

    // Later entries wait for the following tick
    let second = store.create().await;
    tokio::time::sleep(StdDuration::from_secs(300)).await;
    assert!(store.lookup(&second.id).await);
    tokio::time::sleep(StdDuration::from_secs(301)).await;
    assert!(!store.lookup(&second.id).await);

    handle.shutdown().await;
}
