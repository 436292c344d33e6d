//! Integration tests for the geometry pipeline.
//!
//! Tests end-to-end: ParameterSet -> build -> build_assembly_meshes -> validate mesh output.

use shared::{PartId, PartKind};
use splice_viewer_lib::build::{build, build_assembly_meshes};
use splice_viewer_lib::fixtures::*;
use splice_viewer_lib::state::interaction::{base_color, highlight_color};
use splice_viewer_lib::state::InteractionState;
use splice_viewer_lib::validation::MeshValidator;

#[test]
fn test_reference_assembly_end_to_end() {
    let parts = build(&reference_params()).unwrap();
    let meshes = build_assembly_meshes(&parts, &InteractionState::default());
    assert_eq!(meshes.len(), 6);

    for part in &parts {
        let mesh = meshes.get(&part.id).unwrap();
        let v = MeshValidator::new(mesh);
        let errors = v.validate_all();
        assert!(errors.is_empty(), "{}: {:?}", part.id, errors);

        assert!(v.matches_part(part, 0.01), "{}", part.id);
        assert!(v.has_color(base_color(part.kind), 1e-6));
    }
}

#[test]
fn test_parts_stack_without_gaps() {
    let parts = build(&params(180.0, 420.0, 16.0, 9.0, 20.0)).unwrap();
    let flange = parts.iter().find(|p| p.id == PartId::Flange).unwrap();
    let web = parts.iter().find(|p| p.id == PartId::Web).unwrap();
    let plate = parts.iter().find(|p| p.id == PartId::CoverPlate).unwrap();

    assert_eq!(flange.min()[1], 0.0);
    assert_eq!(web.min()[1], flange.max()[1]);
    // Plate center sits 5 mm above the web top
    assert_eq!(plate.position[1], web.max()[1] + 5.0);
    assert_eq!(plate.dimensions[0], flange.dimensions[0]);
}

#[test]
fn test_bolts_follow_diameter_and_flange() {
    let parts = build(&params(300.0, 300.0, 20.0, 10.0, 24.0)).unwrap();
    let bolts: Vec<_> = parts.iter().filter(|p| p.kind == PartKind::Bolt).collect();
    assert_eq!(bolts.len(), 3);
    assert_eq!(bolts[0].position[0], -100.0);
    assert_eq!(bolts[1].position[0], 0.0);
    assert_eq!(bolts[2].position[0], 100.0);
    for b in bolts {
        assert_eq!(b.dimensions, [24.0; 3]);
        assert_eq!(b.position[1], 70.0);
    }
}

#[test]
fn test_narrow_flange_bolts_cross_over() {
    let parts = build(&narrow_flange_params()).unwrap();
    let x = |i| parts.iter().find(|p| p.id == PartId::Bolt(i)).unwrap().position[0];
    assert_eq!(x(0), 20.0);
    assert_eq!(x(2), -20.0);
}

#[test]
fn test_invalid_params_produce_no_parts() {
    let err = build(&invalid_params()).unwrap_err();
    assert_eq!(err.field, "webHeight");
    assert_eq!(err.value, 0.0);

    let err = build(&params(200.0, 300.0, 20.0, 10.0, f64::NAN)).unwrap_err();
    assert_eq!(err.field, "boltDiameter");
}

#[test]
fn test_bolt_spec_does_not_change_geometry() {
    use shared::{BoltType, PropertyClass};
    let reference = build(&reference_params()).unwrap();
    let other = build(&bolt_spec_params(BoltType::BearingBolt, PropertyClass::C12_9)).unwrap();
    assert_eq!(reference, other);
}

#[test]
fn test_hover_recolors_only_hovered_part() {
    let parts = build(&reference_params()).unwrap();
    let mut interaction = InteractionState::default();
    interaction.set_hover(Some(PartId::Bolt(1)));
    let meshes = build_assembly_meshes(&parts, &interaction);

    for part in &parts {
        let v = MeshValidator::new(&meshes[&part.id]);
        let expected = if part.id == PartId::Bolt(1) {
            highlight_color(part.kind)
        } else {
            base_color(part.kind)
        };
        assert!(v.has_color(expected, 1e-6), "{}", part.id);
    }
}
