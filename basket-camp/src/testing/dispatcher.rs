//! Recording dispatcher for handler tests

use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use crate::dispatch::{DispatchError, RegistrationDispatcher};
use crate::registration::Registration;

/// Dispatcher that stores every registration it receives
#[derive(Debug, Default)]
pub struct StubDispatcher {
    fail: AtomicBool,
    sent: Mutex<Vec<Registration>>,
}

impl StubDispatcher {
    /// A dispatcher whose calls succeed
    #[must_use]
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// A dispatcher whose calls fail with a provider rejection
    #[must_use]
    pub fn failing() -> Self {
        let stub = Self::default();
        stub.fail.store(true, Ordering::SeqCst);
        stub
    }

    /// Registrations received so far
    pub fn sent(&self) -> Vec<Registration> {
        self.sent.lock().expect("stub lock poisoned").clone()
    }
}

#[async_trait]
impl RegistrationDispatcher for StubDispatcher {
    async fn dispatch(&self, registration: &Registration) -> Result<(), DispatchError> {
        self.sent
            .lock()
            .expect("stub lock poisoned")
            .push(registration.clone());

        if self.fail.load(Ordering::SeqCst) {
            return Err(DispatchError::Rejected {
                status: 500,
                body: "stub failure".into(),
            });
        }
        Ok(())
    }
}
