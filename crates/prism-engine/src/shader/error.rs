use std::fmt;
use std::io;
use std::path::PathBuf;

use super::source::ShaderStage;

/// A failure while building a shader program.
///
/// Every variant is fatal to startup: the shader sources are static inputs,
/// so retrying cannot succeed without a content change. Compiler and linker
/// diagnostics are carried verbatim in `log` — they are the primary
/// debugging aid and must reach the user unedited.
#[derive(Debug)]
pub enum ShaderError {
    /// A source file was missing or unreadable.
    SourceRead { path: PathBuf, source: io::Error },

    /// A stage failed front-end compilation (parse or validation).
    Compile { stage: ShaderStage, log: String },

    /// The two stages could not be combined into one program.
    Link { log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::SourceRead { path, source } => {
                write!(f, "failed to read shader source {}: {}", path.display(), source)
            }
            ShaderError::Compile { stage, log } => {
                write!(f, "{stage} shader failed to compile:\n{log}")
            }
            ShaderError::Link { log } => {
                write!(f, "shader program failed to link:\n{log}")
            }
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::SourceRead { source, .. } => Some(source),
            _ => None,
        }
    }
}
