use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtimError {
    #[error("Travel-time table file not found at: {0}")]
    TableFileNotFound(String),

    #[error("Invalid Earth model name: {0}")]
    InvalidModelName(String),

    #[error("No travel-time backend compiled in (enable the `libtau` feature) for model: {0}")]
    BackendUnavailable(String),

    #[error("Travel-time library failed to load model {name} (status {status})")]
    ModelLoad { name: String, status: i32 },

    #[error("A travel-time model is already loaded in this process")]
    ModelAlreadyLoaded,

    #[error("Unable to perform terminal operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for TtimError {
    fn eq(&self, other: &Self) -> bool {
        use TtimError::*;
        match (self, other) {
            (TableFileNotFound(a), TableFileNotFound(b)) => a == b,
            (InvalidModelName(a), InvalidModelName(b)) => a == b,
            (BackendUnavailable(a), BackendUnavailable(b)) => a == b,
            (
                ModelLoad {
                    name: n1,
                    status: s1,
                },
                ModelLoad {
                    name: n2,
                    status: s2,
                },
            ) => n1 == n2 && s1 == s2,

            // io errors carry no comparable payload: same variant is enough
            (IoError(_), IoError(_)) => true,

            (ModelAlreadyLoaded, ModelAlreadyLoaded) => true,

            _ => false,
        }
    }
}

impl TtimError {
    /// Process exit status associated with a fatal error.
    ///
    /// Every model-loading failure maps to `1`; terminal I/O failures map to `2`.
    pub fn exit_code(&self) -> i32 {
        match self {
            TtimError::IoError(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod ttim_errors_test {
    use super::*;

    #[test]
    fn test_error_equality() {
        assert_eq!(
            TtimError::TableFileNotFound("iasp91.hed".into()),
            TtimError::TableFileNotFound("iasp91.hed".into())
        );
        assert_ne!(
            TtimError::TableFileNotFound("iasp91.hed".into()),
            TtimError::TableFileNotFound("iasp91.tbl".into())
        );
        assert_eq!(
            TtimError::IoError(std::io::Error::other("a")),
            TtimError::IoError(std::io::Error::other("b"))
        );
        assert_ne!(TtimError::ModelAlreadyLoaded, TtimError::InvalidModelName("".into()));
    }

    #[test]
    fn test_exit_code() {
        assert_eq!(TtimError::ModelAlreadyLoaded.exit_code(), 1);
        assert_eq!(
            TtimError::ModelLoad {
                name: "iasp91".into(),
                status: 1
            }
            .exit_code(),
            1
        );
        assert_eq!(TtimError::IoError(std::io::Error::other("tty")).exit_code(), 2);
    }
}
