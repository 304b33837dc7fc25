pub mod entry;
pub mod feedback;
pub mod format;
pub mod lookup;
pub mod query;
pub mod types;
pub mod workflow;

pub use entry::{Headword, LookupEntry, Sense, WordReading};
pub use feedback::{Feedback, FeedbackError, FeedbackSink, MemorySink, WriterSink};
pub use lookup::{LookupClient, LookupError};
pub use types::{DisplayItem, Icon};
pub use workflow::{Workflow, build_results, search};
