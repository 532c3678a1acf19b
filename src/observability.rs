use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("docchat.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("docchat.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("docchat.client.request_duration_seconds");
pub(crate) static CLIENT_UPLOAD_BYTES: Counter = Counter::new("docchat.client.upload_bytes");

pub(crate) static CHAT_MESSAGES_SENT: Counter = Counter::new("docchat.chat.messages_sent");
pub(crate) static CHAT_MESSAGE_FAILURES: Counter = Counter::new("docchat.chat.message_failures");
pub(crate) static CHAT_EMPTY_SUBMISSIONS: Counter =
    Counter::new("docchat.chat.empty_submissions");
pub(crate) static CHAT_UPLOADS: Counter = Counter::new("docchat.chat.uploads");
pub(crate) static CHAT_UPLOAD_FAILURES: Counter = Counter::new("docchat.chat.upload_failures");
pub(crate) static CHAT_UPLOADS_REJECTED: Counter = Counter::new("docchat.chat.uploads_rejected");
pub(crate) static CHAT_SESSION_REFRESHES: Counter =
    Counter::new("docchat.chat.session_refreshes");
pub(crate) static CHAT_SESSION_REFRESH_FAILURES: Counter =
    Counter::new("docchat.chat.session_refresh_failures");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);
    collector.register_counter(&CLIENT_UPLOAD_BYTES);

    collector.register_counter(&CHAT_MESSAGES_SENT);
    collector.register_counter(&CHAT_MESSAGE_FAILURES);
    collector.register_counter(&CHAT_EMPTY_SUBMISSIONS);
    collector.register_counter(&CHAT_UPLOADS);
    collector.register_counter(&CHAT_UPLOAD_FAILURES);
    collector.register_counter(&CHAT_UPLOADS_REJECTED);
    collector.register_counter(&CHAT_SESSION_REFRESHES);
    collector.register_counter(&CHAT_SESSION_REFRESH_FAILURES);
}

