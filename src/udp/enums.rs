/// Protocol action codes.
pub mod action;

/// Requests sent by the client.
pub mod request;

/// Responses sent by a tracker.
pub mod response;

/// Errors surfaced by the tracker client.
pub mod tracker_client_error;
