pub mod stdin;

pub use stdin::StdinInputSource;

/// Interactive text input supplied by the caller. Report generators read one
/// line per solicited parameter; the trailing newline is stripped.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait InputSource: Send + Sync {
    fn read_line(&self) -> Result<String, std::io::Error>;
}
