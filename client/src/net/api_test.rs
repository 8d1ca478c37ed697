use super::*;

#[test]
fn contact_failed_message_formats_status() {
    assert_eq!(contact_failed_message(502), "contact request failed: 502");
}

#[test]
fn contact_failed_message_names_known_statuses() {
    assert_eq!(contact_failed_message(429), "contact request rate limited: 429");
    assert_eq!(contact_failed_message(503), "contact relay not configured: 503");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_contact_is_unavailable_without_browser() {
    let result = block_on_ready(submit_contact(&ContactMessage::default()));
    assert_eq!(result, Err("not available on server".to_owned()));
}

/// Minimal executor for an immediately-ready future.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should resolve immediately"),
    }
}
