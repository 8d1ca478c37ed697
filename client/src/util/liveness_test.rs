use super::*;

#[test]
fn new_flag_is_alive() {
    assert!(Liveness::default().is_alive());
}

#[test]
fn kill_is_visible_through_clones() {
    let alive = Liveness::default();
    let task_side = alive.clone();
    alive.kill();
    assert!(!task_side.is_alive());
}

#[test]
fn owner_cleanup_clears_flag() {
    let owner = leptos::prelude::Owner::new();
    let alive = owner.with(Liveness::until_cleanup);
    assert!(alive.is_alive());
    owner.cleanup();
    assert!(!alive.is_alive());
}
