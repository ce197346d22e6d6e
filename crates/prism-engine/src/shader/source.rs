use std::fmt;
use std::fs;
use std::path::PathBuf;

use super::error::ShaderError;

/// The two pipeline stages this builder knows about.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn as_str(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }

    pub(crate) fn naga_stage(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WGSL source text tagged with the stage it is meant for.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    stage: ShaderStage,
    text: String,
    path: Option<PathBuf>,
}

impl ShaderSource {
    /// Reads a source file in full.
    ///
    /// An unreadable file surfaces here, before any compilation is
    /// attempted.
    pub fn from_file(stage: ShaderStage, path: impl Into<PathBuf>) -> Result<Self, ShaderError> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| ShaderError::SourceRead {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            stage,
            text,
            path: Some(path),
        })
    }

    /// Wraps in-memory source text (tests, embedded shaders).
    pub fn from_text(stage: ShaderStage, text: impl Into<String>) -> Self {
        Self {
            stage,
            text: text.into(),
            path: None,
        }
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Originating file, if this source came from one.
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }
}
