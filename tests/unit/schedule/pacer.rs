use super::*;

#[test]
fn cancel_token_is_shared_between_clones() {
    let a = CancelToken::new();
    let b = a.clone();
    assert!(!b.is_cancelled());
    a.cancel();
    assert!(b.is_cancelled());
}

#[test]
fn sleep_pacer_waits_about_one_interval() {
    let mut p = SleepPacer::new();
    let cancel = CancelToken::new();
    let t0 = Instant::now();
    p.pace(Duration::from_millis(20), &cancel);
    p.pace(Duration::from_millis(20), &cancel);
    assert!(t0.elapsed() >= Duration::from_millis(40));
}

#[test]
fn sleep_pacer_returns_early_when_cancelled() {
    let mut p = SleepPacer::new();
    let cancel = CancelToken::new();
    cancel.cancel();
    let t0 = Instant::now();
    p.pace(Duration::from_secs(10), &cancel);
    assert!(t0.elapsed() < Duration::from_secs(1));
}
