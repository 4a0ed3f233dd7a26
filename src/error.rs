use thiserror::Error;

/// Everything fatal bubbles out of [`Poller::start`](crate::poller::Poller::start);
/// the core never retries, logs, or swallows.
#[derive(Debug, Error)]
pub enum Error {
    /// The device could not be acquired at setup. No retry.
    #[error("HID device {vid:04x}:{pid:04x} not found")]
    DeviceNotFound { vid: u16, pid: u16 },

    /// A single frame read failed mid-poll. Fatal to the loop; restart policy
    /// belongs to whatever supervises the process.
    #[cfg(feature = "hid")]
    #[error("frame read failed: {0}")]
    Read(#[from] hidapi::HidError),

    /// The frame has no byte at the configured state index.
    #[error("frame of {len} byte(s) has no state byte at index {index}")]
    FrameTooShort { len: usize, index: usize },

    /// A scripted source ran out of steps.
    #[error("scripted frame source exhausted")]
    SourceExhausted,

    /// A scripted source hit an injected read failure.
    #[error("scripted read failure")]
    ScriptedRead,

    #[error("invalid TOML profile: {0}")]
    ProfileToml(#[from] toml::de::Error),

    #[error("invalid JSON profile: {0}")]
    ProfileJson(#[from] serde_json::Error),
}
