use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathGraphError {
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error on line {line}: {message}: {content:?}")]
    Parse {
        line: usize,
        content: String,
        message: String,
    },
    #[error("cyclic graph: only {ordered} of {reachable} nodes reaching {end:?} could be ordered")]
    CyclicGraph {
        end: String,
        reachable: usize,
        ordered: usize,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PathGraphError {
    pub fn io<T: Into<String>>(msg: T) -> Self {
        PathGraphError::Io(msg.into())
    }

    pub fn parse<C: Into<String>, M: Into<String>>(line: usize, content: C, message: M) -> Self {
        PathGraphError::Parse {
            line,
            content: content.into(),
            message: message.into(),
        }
    }

    pub fn cyclic<T: Into<String>>(end: T, reachable: usize, ordered: usize) -> Self {
        PathGraphError::CyclicGraph {
            end: end.into(),
            reachable,
            ordered,
        }
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        PathGraphError::InvalidInput(msg.into())
    }
}
