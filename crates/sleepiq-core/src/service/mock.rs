//! Scripted in-memory bed service for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{BedService, Session};
use crate::error::ServiceError;
use crate::types::{BedDescriptor, BedStatus, Position, Side};

/// Replays canned responses and counts every call.
#[derive(Default)]
pub struct ScriptedService {
    pub beds: Vec<BedDescriptor>,
    pub reject_login: bool,
    pub fail_listing: bool,
    /// `None` makes `set_position` fail
    pub command_response: Option<BedStatus>,
    /// Consumed front to back; an exhausted script keeps reporting movement
    pub status_script: Mutex<VecDeque<Result<BedStatus, String>>>,
    pub commands: Mutex<Vec<(String, Side, Position)>>,
    pub status_calls: AtomicUsize,
}

impl ScriptedService {
    pub fn new(beds: Vec<BedDescriptor>) -> Self {
        Self {
            beds,
            command_response: Some(BedStatus { is_moving: false }),
            ..Self::default()
        }
    }

    pub fn with_command_response(mut self, response: Option<BedStatus>) -> Self {
        self.command_response = response;
        self
    }

    pub fn with_moving_sequence(self, sequence: &[bool]) -> Self {
        {
            let mut script = self.status_script.lock().unwrap();
            script.extend(sequence.iter().map(|m| Ok(BedStatus { is_moving: *m })));
        }
        self
    }

    pub fn with_status_error(self, message: &str) -> Self {
        self.status_script
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn command_count(&self) -> usize {
        self.commands.lock().unwrap().len()
    }

    pub fn status_count(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

fn rejected(message: &str) -> ServiceError {
    ServiceError::Status {
        status: 500,
        message: message.to_string(),
    }
}

#[async_trait]
impl BedService for ScriptedService {
    async fn authenticate(&self, username: &str, _password: &str) -> Result<Session, ServiceError> {
        if self.reject_login {
            return Err(ServiceError::Status {
                status: 401,
                message: "login rejected".to_string(),
            });
        }

        Ok(Session {
            user_id: username.to_string(),
            key: "test-key".to_string(),
        })
    }

    async fn list_beds(&self, _session: &Session) -> Result<Vec<BedDescriptor>, ServiceError> {
        if self.fail_listing {
            return Err(rejected("bed list unavailable"));
        }
        Ok(self.beds.clone())
    }

    async fn set_position(
        &self,
        _session: &Session,
        bed_id: &str,
        side: Side,
        position: Position,
    ) -> Result<BedStatus, ServiceError> {
        self.commands
            .lock()
            .unwrap()
            .push((bed_id.to_string(), side, position));
        self.command_response
            .ok_or_else(|| rejected("foundation rejected preset"))
    }

    async fn foundation_status(&self, _session: &Session, _bed_id: &str) -> Result<BedStatus, ServiceError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        match self.status_script.lock().unwrap().pop_front() {
            Some(Ok(status)) => Ok(status),
            Some(Err(message)) => Err(rejected(&message)),
            None => Ok(BedStatus { is_moving: true }),
        }
    }
}
