//! CPU-side link check.
//!
//! wgpu validates inter-stage compatibility at pipeline creation, but its
//! report arrives through the device error path. Checking the naga IR first
//! yields a readable diagnostic and keeps the check testable without a GPU.

use super::compile::CompiledStage;
use super::error::ShaderError;
use super::source::ShaderStage;

/// Entry-point names resolved during the link check, later handed to the
/// pipeline descriptor.
pub(crate) struct StageEntryPoints {
    pub(crate) vertex: String,
    pub(crate) fragment: String,
}

/// Verifies that the two stages form a usable program.
///
/// Rules:
/// - the vertex module must contain a `@vertex` entry point, the fragment
///   module a `@fragment` one (the first matching entry point is used)
/// - every user-level fragment input `@location(n)` must be produced by a
///   vertex output at the same location with the same type
///
/// All violations are collected into one `Link` log rather than failing on
/// the first.
pub(crate) fn check_interface(
    vs: &CompiledStage,
    fs: &CompiledStage,
) -> Result<StageEntryPoints, ShaderError> {
    let vs_entry = entry_point(&vs.module, vs.stage);
    let fs_entry = entry_point(&fs.module, fs.stage);

    let mut problems = Vec::new();
    if vs_entry.is_none() {
        problems.push(format!("{} module has no @{} entry point", vs.stage, vs.stage));
    }
    if fs_entry.is_none() {
        problems.push(format!("{} module has no @{} entry point", fs.stage, fs.stage));
    }

    let (Some(vs_entry), Some(fs_entry)) = (vs_entry, fs_entry) else {
        return Err(ShaderError::Link {
            log: problems.join("\n"),
        });
    };

    let outputs = result_vars(&vs.module, vs_entry);
    for input in argument_vars(&fs.module, fs_entry) {
        match outputs.iter().find(|o| o.location == input.location) {
            None => problems.push(format!(
                "fragment input @location({}) `{}` has no matching vertex output",
                input.location, input.name
            )),
            Some(output) if output.ty != input.ty => problems.push(format!(
                "fragment input @location({}) `{}` is {} but the vertex stage outputs {}",
                input.location, input.name, input.ty, output.ty
            )),
            Some(_) => {}
        }
    }

    if !problems.is_empty() {
        return Err(ShaderError::Link {
            log: problems.join("\n"),
        });
    }

    Ok(StageEntryPoints {
        vertex: vs_entry.name.clone(),
        fragment: fs_entry.name.clone(),
    })
}

fn entry_point(module: &naga::Module, stage: ShaderStage) -> Option<&naga::EntryPoint> {
    let stage = stage.naga_stage();
    module.entry_points.iter().find(|ep| ep.stage == stage)
}

/// One user-level varying: location, best-effort name, rendered type.
struct IoVar {
    location: u32,
    name: String,
    ty: String,
}

fn result_vars(module: &naga::Module, ep: &naga::EntryPoint) -> Vec<IoVar> {
    let mut vars = Vec::new();
    if let Some(result) = &ep.function.result {
        push_io(module, result.ty, result.binding.as_ref(), None, &mut vars);
    }
    vars
}

fn argument_vars(module: &naga::Module, ep: &naga::EntryPoint) -> Vec<IoVar> {
    let mut vars = Vec::new();
    for arg in &ep.function.arguments {
        push_io(module, arg.ty, arg.binding.as_ref(), arg.name.as_deref(), &mut vars);
    }
    vars
}

fn push_io(
    module: &naga::Module,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
    name: Option<&str>,
    out: &mut Vec<IoVar>,
) {
    match binding {
        Some(naga::Binding::Location { location, .. }) => out.push(IoVar {
            location: *location,
            name: name.unwrap_or("<unnamed>").to_string(),
            ty: type_desc(module, ty),
        }),
        // Built-ins (position, etc.) are not user varyings.
        Some(_) => {}
        // An unbound argument/result is a struct whose members carry the
        // bindings.
        None => {
            if let naga::TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    push_io(module, member.ty, member.binding.as_ref(), member.name.as_deref(), out);
                }
            }
        }
    }
}

/// Renders a type the way it is spelled in WGSL, for diagnostics and for
/// exact interface comparison.
fn type_desc(module: &naga::Module, ty: naga::Handle<naga::Type>) -> String {
    match &module.types[ty].inner {
        naga::TypeInner::Scalar(scalar) => scalar_desc(*scalar),
        naga::TypeInner::Vector { size, scalar } => {
            format!("vec{}<{}>", vec_size(*size), scalar_desc(*scalar))
        }
        naga::TypeInner::Matrix {
            columns,
            rows,
            scalar,
        } => format!(
            "mat{}x{}<{}>",
            vec_size(*columns),
            vec_size(*rows),
            scalar_desc(*scalar)
        ),
        other => format!("{other:?}"),
    }
}

fn scalar_desc(scalar: naga::Scalar) -> String {
    let name = match (scalar.kind, scalar.width) {
        (naga::ScalarKind::Float, 4) => "f32",
        (naga::ScalarKind::Float, 8) => "f64",
        (naga::ScalarKind::Float, 2) => "f16",
        (naga::ScalarKind::Sint, 4) => "i32",
        (naga::ScalarKind::Uint, 4) => "u32",
        (naga::ScalarKind::Bool, _) => "bool",
        _ => return format!("{:?}{}", scalar.kind, scalar.width),
    };
    name.to_string()
}

fn vec_size(size: naga::VectorSize) -> u32 {
    match size {
        naga::VectorSize::Bi => 2,
        naga::VectorSize::Tri => 3,
        naga::VectorSize::Quad => 4,
    }
}
