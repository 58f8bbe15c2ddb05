//! Parses and validates the WGSL shader without touching a GPU.

use pulsecage::rendering::SceneUniforms;
use std::fs;

fn shader_source() -> String {
    fs::read_to_string("src/shader.wgsl").expect("shader source readable")
}

fn parsed_module(source: &str) -> naga::Module {
    match naga::front::wgsl::parse_str(source) {
        Ok(module) => module,
        Err(e) => panic!("WGSL parse error:\n{}", e.emit_to_string(source)),
    }
}

#[test]
fn shader_parses_and_validates() {
    let source = shader_source();
    let module = parsed_module(&source);

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    if let Err(e) = validator.validate(&module) {
        panic!("WGSL validation error:\n{}", e.emit_to_string(&source));
    }
}

#[test]
fn shader_exports_both_entry_points() {
    let source = shader_source();
    let module = parsed_module(&source);
    let mut names: Vec<&str> = module
        .entry_points
        .iter()
        .map(|ep| ep.name.as_str())
        .collect();
    names.sort_unstable();
    assert_eq!(names, ["fs_main", "vs_main"]);
}

#[test]
fn wgsl_uniform_struct_stays_in_lockstep_with_the_rust_side() {
    let source = shader_source();
    let module = parsed_module(&source);
    let members = module
        .types
        .iter()
        .find_map(|(_, ty)| match &ty.inner {
            naga::TypeInner::Struct { members, .. }
                if ty.name.as_deref() == Some("SceneUniforms") =>
            {
                Some(members.len())
            }
            _ => None,
        })
        .expect("shader declares a SceneUniforms struct");

    // One vec4 slot per member on both sides.
    assert_eq!(members * 16, std::mem::size_of::<SceneUniforms>());
}
