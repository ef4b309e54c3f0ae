//! Controller process state and the view projection.

/// Where the controller is in its workflow.
///
/// Exactly one value holds at any time; transitions are driven by the
/// controller operations and applied in invocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    /// Nothing in flight; a message may or may not be held
    Idle,

    /// Awaiting the message source
    FetchingMessage,

    /// Awaiting the extraction service
    Extracting,

    /// A valid record is held
    Success,

    /// The last operation failed; the error string is held
    Failed,
}

impl Default for ProcessState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Pure projection from controller state to what should be displayed.
///
/// The presentation layer matches on this instead of reading state and
/// held data separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Idle with nothing loaded; prompt the operator to fetch
    Empty,

    /// Reading the active message
    Fetching,

    /// A message is loaded and ready to transform
    MessageLoaded,

    /// Extraction in flight
    Extracting,

    /// A record is ready
    Ready { work_order_number: String },

    /// The last operation failed
    Error { message: String },
}
