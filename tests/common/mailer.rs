use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bulletin::types::error::AppError;
use bulletin::types::mail::SendEmail;
use bulletin::utils::mail::Mailer;

/// Records outbound mail instead of sending it; can be told to refuse the
/// recipient like a real transport would.
pub struct MockMailer {
    pub sent: Mutex<Vec<SendEmail>>,
    rejecting: AtomicBool,
}

impl MockMailer {
    pub fn new() -> Self {
        MockMailer {
            sent: Mutex::new(Vec::new()),
            rejecting: AtomicBool::new(false),
        }
    }

    #[allow(dead_code)]
    pub fn set_rejecting(&self, reject: bool) {
        self.rejecting.store(reject, Ordering::SeqCst);
    }

    /// Digits of the most recently mailed code (the html body is `<h1>code</h1>`).
    #[allow(dead_code)]
    pub fn last_code(&self) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .last()
            .and_then(|m| m.html.as_ref())
            .map(|h| {
                h.trim_start_matches("<h1>")
                    .trim_end_matches("</h1>")
                    .chars()
                    .filter(|c| c.is_ascii_digit())
                    .collect()
            })
    }

    #[allow(dead_code)]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: SendEmail) -> Result<(), AppError> {
        if self.rejecting.load(Ordering::SeqCst) {
            return Err(AppError::Internal("recipient not accepted".to_string()));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}
