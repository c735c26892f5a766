//! Recording transport for unit tests
//!
//! Scripted replies are served in FIFO order and every request is recorded,
//! which lets tests assert call counts and request sequencing without any
//! network I/O.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::result::{Error, Result};
use crate::domain::ApiResponse;
use crate::ports::{ApiRequest, Transport};

enum Reply {
    Response(ApiResponse),
    TransportError(String),
}

/// In-process transport double
#[derive(Default)]
pub struct RecordingTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a parsed response for the next unanswered request.
    pub fn push_response(&self, response: ApiResponse) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Response(response));
    }

    /// Queue a transport-level failure for the next unanswered request.
    pub fn push_transport_error(&self, message: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::TransportError(message.into()));
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::TransportError(message)) => Err(Error::transport(message)),
            None => Ok(ApiResponse::ok()),
        }
    }
}
