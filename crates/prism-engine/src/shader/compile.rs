use super::error::ShaderError;
use super::source::{ShaderSource, ShaderStage};

/// A stage that passed front-end compilation.
///
/// Holds the naga IR so the link step can reflect over entry points and
/// stage interfaces without touching the GPU.
#[derive(Debug)]
pub(crate) struct CompiledStage {
    pub(crate) stage: ShaderStage,
    pub(crate) module: naga::Module,
}

/// Parses and validates one stage's WGSL.
///
/// Failures carry the diagnostic rendered against the source text, the same
/// text the wgpu device would reject later.
pub(crate) fn compile_stage(source: &ShaderSource) -> Result<CompiledStage, ShaderError> {
    let module = naga::front::wgsl::parse_str(source.text()).map_err(|err| ShaderError::Compile {
        stage: source.stage(),
        log: err.emit_to_string(source.text()),
    })?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    );
    validator
        .validate(&module)
        .map_err(|err| ShaderError::Compile {
            stage: source.stage(),
            log: err.emit_to_string(source.text()),
        })?;

    Ok(CompiledStage {
        stage: source.stage(),
        module,
    })
}
