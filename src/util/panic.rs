/// Asserts that the block panics, catching the unwind so the test can continue. With a trailing
/// `contains` clause the panic message must also include the given text.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block didn't panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
    };
    ($run:block, $msg:literal, contains $needle:expr) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!($msg),
            Err(payload) => {
                let text = $crate::util::panic::payload_text(payload.as_ref());
                assert!(text.contains($needle), "unexpected panic message: {text}");
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// Extracts the message from a panic payload, which is a `&str` or a `String` for every
/// `panic!` with a message.
#[cfg(test)]
pub(crate) fn payload_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        return (*text).to_owned();
    }
    payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default()
}
