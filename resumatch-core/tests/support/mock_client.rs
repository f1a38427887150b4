use async_trait::async_trait;
use resumatch_core::{HttpReply, MemoryFile, ScoringClient, ScreeningError, ScreeningRequest};
use std::cell::RefCell;
use std::collections::VecDeque;
use tokio::sync::oneshot;

type Reply = Result<HttpReply, ScreeningError>;

/// Answers each request with the next scripted reply and keeps every request
#[derive(Default)]
pub struct RecordingClient {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<ScreeningRequest<MemoryFile>>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_with(self, reply: Reply) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    pub fn reply_json(self, status: u16, body: &str) -> Self {
        self.reply_with(Ok(HttpReply::new(status, body)))
    }

    pub fn requests(&self) -> Vec<ScreeningRequest<MemoryFile>> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl ScoringClient<MemoryFile> for RecordingClient {
    async fn send(&self, request: ScreeningRequest<MemoryFile>) -> Reply {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ScreeningError::transport("no scripted reply")))
    }
}

/// Holds every request open until the test releases it
#[derive(Default)]
pub struct GatedClient {
    gates: RefCell<VecDeque<oneshot::Receiver<Reply>>>,
    requests: RefCell<Vec<ScreeningRequest<MemoryFile>>>,
}

impl GatedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a gate for the next request; send on the returned half to answer
    pub fn gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl ScoringClient<MemoryFile> for GatedClient {
    async fn send(&self, request: ScreeningRequest<MemoryFile>) -> Reply {
        self.requests.borrow_mut().push(request);
        let gate = self.gates.borrow_mut().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ScreeningError::transport("connection closed"))),
            None => Err(ScreeningError::transport("no gate queued")),
        }
    }
}
