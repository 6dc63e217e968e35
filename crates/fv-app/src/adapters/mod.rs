//! Port implementations that live in the application layer.

mod progress_channel;

pub use progress_channel::ChannelUploadProgress;
