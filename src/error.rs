#[derive(Debug, thiserror::Error)]
pub enum SnakeError {
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Terminal too small: need {need_width}x{need_height}, have {width}x{height}")]
    TerminalTooSmall {
        need_width: u16,
        need_height: u16,
        width: u16,
        height: u16,
    },

    #[cfg_attr(not(feature = "audio"), allow(dead_code))]
    #[error("Audio output unavailable: {0}")]
    Audio(String),
}

pub type Result<T> = std::result::Result<T, SnakeError>;
