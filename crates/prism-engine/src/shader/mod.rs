//! Shader program building.
//!
//! Pipeline from text to drawable program:
//! 1. [`ShaderSource::from_file`] reads a stage's WGSL in full
//! 2. each stage is parsed and validated with the naga front end
//! 3. the stage interfaces are cross-checked (the "link" step)
//! 4. the wgpu shader modules and render pipeline are created
//!
//! Steps 1-3 run on the CPU and are testable without a GPU device; every
//! failure mode is a typed [`ShaderError`] carrying the diagnostic verbatim.

mod compile;
mod error;
mod link;
mod program;
mod source;

pub use error::ShaderError;
pub use program::ShaderProgram;
pub use source::{ShaderSource, ShaderStage};

#[cfg(test)]
mod build_tests {
    use super::compile::compile_stage;
    use super::link::check_interface;
    use super::*;

    const VS_OK: &str = r#"
        struct VsOut {
            @builtin(position) position: vec4<f32>,
            @location(0) color: vec3<f32>,
        }

        @vertex
        fn vs_main(@location(0) position: vec3<f32>, @location(1) color: vec3<f32>) -> VsOut {
            var result: VsOut;
            result.position = vec4<f32>(position, 1.0);
            result.color = color;
            return result;
        }
    "#;

    const FS_OK: &str = r#"
        @fragment
        fn fs_main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
            return vec4<f32>(color, 1.0);
        }
    "#;

    // Individually valid, but consumes a varying VS_OK never produces.
    const FS_EXTRA_INPUT: &str = r#"
        @fragment
        fn fs_main(@location(1) glow: vec3<f32>) -> @location(0) vec4<f32> {
            return vec4<f32>(glow, 1.0);
        }
    "#;

    // Individually valid, but disagrees with VS_OK on the type at location 0.
    const FS_WRONG_TYPE: &str = r#"
        @fragment
        fn fs_main(@location(0) color: vec4<f32>) -> @location(0) vec4<f32> {
            return color;
        }
    "#;

    const VS_SYNTAX_ERROR: &str = "@vertex fn vs_main( -> {";
    const FS_SYNTAX_ERROR: &str = "@fragment fn fs_main|";

    fn vs(text: &str) -> ShaderSource {
        ShaderSource::from_text(ShaderStage::Vertex, text)
    }

    fn fs(text: &str) -> ShaderSource {
        ShaderSource::from_text(ShaderStage::Fragment, text)
    }

    fn link(vertex: &str, fragment: &str) -> Result<(), ShaderError> {
        let vertex = compile_stage(&vs(vertex))?;
        let fragment = compile_stage(&fs(fragment))?;
        check_interface(&vertex, &fragment).map(|_| ())
    }

    // ── compile ───────────────────────────────────────────────────────────

    #[test]
    fn valid_stages_compile() {
        compile_stage(&vs(VS_OK)).unwrap();
        compile_stage(&fs(FS_OK)).unwrap();
    }

    #[test]
    fn vertex_syntax_error_names_the_vertex_stage() {
        match compile_stage(&vs(VS_SYNTAX_ERROR)).unwrap_err() {
            ShaderError::Compile { stage, log } => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert!(!log.is_empty());
            }
            other => panic!("expected Compile, got {other:?}"),
        }
    }

    #[test]
    fn fragment_syntax_error_names_the_fragment_stage() {
        match compile_stage(&fs(FS_SYNTAX_ERROR)).unwrap_err() {
            ShaderError::Compile { stage, .. } => assert_eq!(stage, ShaderStage::Fragment),
            other => panic!("expected Compile, got {other:?}"),
        }
    }

    #[test]
    fn compile_diagnostic_is_carried_verbatim() {
        let err = compile_stage(&vs(VS_SYNTAX_ERROR)).unwrap_err();
        let ShaderError::Compile { log, .. } = &err else {
            panic!("expected Compile, got {err:?}");
        };
        assert!(format!("{err}").contains(log.as_str()));
    }

    // ── link ──────────────────────────────────────────────────────────────

    #[test]
    fn matching_interfaces_link() {
        link(VS_OK, FS_OK).unwrap();
    }

    #[test]
    fn unmatched_fragment_input_fails_to_link() {
        match link(VS_OK, FS_EXTRA_INPUT).unwrap_err() {
            ShaderError::Link { log } => assert!(log.contains("@location(1)")),
            other => panic!("expected Link, got {other:?}"),
        }
    }

    #[test]
    fn interface_type_mismatch_fails_to_link() {
        match link(VS_OK, FS_WRONG_TYPE).unwrap_err() {
            ShaderError::Link { log } => {
                assert!(log.contains("vec4<f32>"));
                assert!(log.contains("vec3<f32>"));
            }
            other => panic!("expected Link, got {other:?}"),
        }
    }

    #[test]
    fn missing_fragment_entry_point_fails_to_link() {
        // Valid WGSL handed to the fragment slot, but it only defines a
        // vertex entry point.
        match link(VS_OK, VS_OK).unwrap_err() {
            ShaderError::Link { log } => assert!(log.contains("@fragment")),
            other => panic!("expected Link, got {other:?}"),
        }
    }

    // ── source loading ────────────────────────────────────────────────────

    #[test]
    fn missing_file_is_a_source_read_error() {
        let err =
            ShaderSource::from_file(ShaderStage::Vertex, "no/such/dir/vertex.wgsl").unwrap_err();
        assert!(matches!(err, ShaderError::SourceRead { .. }));
        assert!(format!("{err}").contains("vertex.wgsl"));
    }

    #[test]
    fn reads_source_from_disk() {
        let path = std::env::temp_dir().join("prism_shader_source_test.wgsl");
        std::fs::write(&path, FS_OK).unwrap();

        let source = ShaderSource::from_file(ShaderStage::Fragment, &path).unwrap();
        assert_eq!(source.text(), FS_OK);
        assert_eq!(source.path(), Some(path.as_path()));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn stages_display_lowercase() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
