use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("`{}` is not installed, please install it before using this tool.", .0)]
    PackageManagerMissing(String),

    #[error("Listing workspaces failed: {}. Are you running from the root of the monorepo?", .0)]
    WorkspaceList(String),

    #[error("The sub process exited with a non-success code.")]
    SubProcessExit(Option<i32>),

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("A replay flag was specified together with an explicit command.")]
    ReplayWithArguments,

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn workspace_list(detail: String) -> Self {
        Self::WorkspaceList(detail)
    }

    pub fn json_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
