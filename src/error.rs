use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FramebufferError {
    /// The buffer could not be sized. Nothing sensible can continue after this.
    #[error("unable to allocate a {width}x{height} framebuffer")]
    AllocationFailure { width: usize, height: usize },
    #[error("pixel ({x}, {y}) is outside the {width}x{height} framebuffer")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("framebuffer dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Framebuffer(#[from] FramebufferError),
    #[error("unable to open window")]
    Window(#[source] minifb::Error),
    #[error("unable to present frame")]
    Present(#[source] minifb::Error),
    #[error("window already closed")]
    WindowClosed,
    #[error("unable to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// One line for a fatal error: the error itself followed by its source chain.
pub fn report(err: &Error) -> String {
    let mut line = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        line.push_str(": ");
        line.push_str(&cause.to_string());
        source = cause.source();
    }
    line
}
