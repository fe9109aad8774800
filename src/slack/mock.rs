//! A [Transport] that never leaves the process, for tests.

use super::{
    channel::ChannelName,
    message::Message,
    transport::{Ack, Transport},
    SlackError,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// What the acknowledgement reads when nothing was queued.
pub const DEFAULT_ACK: &str = "Message sent successfully";

/// A canned outcome for one call to [MockTransport::send].
#[derive(Clone)]
pub enum MockResponse {
    Success(String),
    Failure(String),
}

/// Replays queued responses in order, repeating the last one once the queue
/// is down to it. With nothing queued every call succeeds. Records every call.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    calls: AtomicUsize,
    last_message: Mutex<Option<Message>>,
}

impl MockTransport {
    pub fn new(responses: Vec<MockResponse>) -> Self {
        MockTransport {
            responses: Mutex::new(responses.into()),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_message(&self) -> Option<Message> {
        self.last_message.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, _channel: &ChannelName, msg: &Message) -> Result<Ack, SlackError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_message.lock().unwrap() = Some(msg.clone());

        let next = {
            let mut responses = self.responses.lock().unwrap();
            if responses.len() > 1 {
                responses.pop_front()
            } else {
                responses.front().cloned()
            }
        };

        match next {
            Some(MockResponse::Success(x)) => Ok(Ack(x)),
            Some(MockResponse::Failure(e)) => Err(SlackError::APIResponseError(e)),
            None => Ok(Ack(DEFAULT_ACK.to_owned())),
        }
    }
}

mod tests {
    use super::*;
    use crate::slack::message::build;

    #[tokio::test]
    async fn test_default_response() {
        let mock = MockTransport::default();
        let msg = build("t", "x", "c");

        assert_eq!(
            mock.send(&msg.channel, &msg).await.unwrap(),
            Ack(DEFAULT_ACK.to_owned())
        );
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.last_message(), Some(msg));
    }

    #[tokio::test]
    async fn test_queued_responses_in_order() {
        let mock = MockTransport::new(vec![
            MockResponse::Failure("rate_limited".to_owned()),
            MockResponse::Success("first".to_owned()),
        ]);
        let a = build("a", "a", "c");
        let b = build("b", "b", "c");

        let res = mock.send(&a.channel, &a).await;
        assert!(matches!(res, Err(SlackError::APIResponseError(e)) if e == "rate_limited"));
        assert_eq!(mock.last_message(), Some(a.clone()));

        assert_eq!(mock.send(&b.channel, &b).await.unwrap(), Ack("first".to_owned()));
        assert_eq!(mock.last_message(), Some(b));

        assert_eq!(mock.send(&a.channel, &a).await.unwrap(), Ack("first".to_owned()));
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn test_single_failure_repeats() {
        let mock = MockTransport::new(vec![MockResponse::Failure("network error".to_owned())]);
        let msg = build("t", "x", "c");

        for _ in 0..2 {
            let res = mock.send(&msg.channel, &msg).await;
            assert!(matches!(res, Err(SlackError::APIResponseError(e)) if e == "network error"));
        }
        assert_eq!(mock.call_count(), 2);
    }

    #[test]
    fn test_untouched() {
        let mock = MockTransport::default();

        assert_eq!(mock.call_count(), 0);
        assert_eq!(mock.last_message(), None);
    }
}
