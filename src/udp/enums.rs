/// Request messages sent to a tracker.
pub mod request;

/// Response messages received from a tracker.
pub mod response;
