// tests/support/mocks/util.rs
use article_api::application::ports::util::TokenGenerator;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out `token-1`, `token-2`, ...
#[derive(Default)]
pub struct SequentialTokens {
    next: AtomicUsize,
}

impl TokenGenerator for SequentialTokens {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("token-{n}")
    }
}
