#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemeState { dark_mode: false });
    apply(ThemeState::default());
}
