use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RevealError {
    #[error("Sequencer is not mounted yet")]
    NotMounted,
    #[error("Sequencer is already mounted")]
    AlreadyMounted,
    #[error("Sequencer was unmounted, no further transitions are accepted")]
    Unmounted,
    #[error("Reveal fired before the envelope was opened")]
    RevealBeforeOpen,
}

pub type Result<T> = core::result::Result<T, RevealError>;
