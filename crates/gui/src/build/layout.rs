//! Fixed-topology layout of the cover-plate splice.
//!
//! Origin sits at the bottom of the lower flange on the member centerline.
//! X runs across the flange, Y is vertical, Z runs along the member.

use shared::{InvalidParameterError, ParameterSet, PartDescriptor, PartId};

/// Depth of flange and web along the member (mm)
pub const MEMBER_DEPTH: f64 = 20.0;
pub const BOLT_COUNT: u8 = 3;
/// Distance from a flange edge to the outer bolts (mm)
pub const BOLT_EDGE_DISTANCE: f64 = 50.0;
/// Height of the bolt row above the top of the flange (mm)
pub const BOLT_ROW_HEIGHT: f64 = 50.0;
pub const COVER_PLATE_THICKNESS: f64 = 5.0;
pub const COVER_PLATE_DEPTH: f64 = 25.0;
/// Offset of the cover plate center above the top of the web (mm)
pub const COVER_PLATE_OFFSET: f64 = 5.0;

/// Horizontal offsets of the bolt row. The outer bolts overlap for
/// flange widths below 100 mm; no clamping is applied.
pub fn bolt_offsets(flange_width: f64) -> [f64; BOLT_COUNT as usize] {
    let half = flange_width / 2.0;
    [-half + BOLT_EDGE_DISTANCE, 0.0, half - BOLT_EDGE_DISTANCE]
}

/// Build the positioned parts: flange, web, three bolts, cover plate.
pub fn build(params: &ParameterSet) -> Result<Vec<PartDescriptor>, InvalidParameterError> {
    params.validate()?;

    let ParameterSet {
        flange_width,
        web_height,
        flange_thickness,
        web_thickness,
        bolt_diameter,
        ..
    } = *params;

    let mut parts = Vec::with_capacity(3 + BOLT_COUNT as usize);

    parts.push(PartDescriptor::new(
        PartId::Flange,
        [flange_width, flange_thickness, MEMBER_DEPTH],
        [0.0, flange_thickness / 2.0, 0.0],
    ));

    parts.push(PartDescriptor::new(
        PartId::Web,
        [web_thickness, web_height, MEMBER_DEPTH],
        [0.0, flange_thickness + web_height / 2.0, 0.0],
    ));

    let bolt_y = flange_thickness + BOLT_ROW_HEIGHT;
    for (i, x) in bolt_offsets(flange_width).into_iter().enumerate() {
        parts.push(PartDescriptor::new(
            PartId::Bolt(i as u8),
            [bolt_diameter; 3],
            [x, bolt_y, 0.0],
        ));
    }

    parts.push(PartDescriptor::new(
        PartId::CoverPlate,
        [flange_width, COVER_PLATE_THICKNESS, COVER_PLATE_DEPTH],
        [0.0, flange_thickness + web_height + COVER_PLATE_OFFSET, 0.0],
    ));

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PartKind;
    use std::collections::HashSet;

    fn find(parts: &[PartDescriptor], id: PartId) -> &PartDescriptor {
        parts.iter().find(|p| p.id == id).unwrap()
    }

    #[test]
    fn test_six_parts_in_fixed_order() {
        let parts = build(&ParameterSet::default()).unwrap();
        let ids: Vec<PartId> = parts.iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                PartId::Flange,
                PartId::Web,
                PartId::Bolt(0),
                PartId::Bolt(1),
                PartId::Bolt(2),
                PartId::CoverPlate
            ]
        );
        let unique: HashSet<PartId> = ids.into_iter().collect();
        assert_eq!(unique.len(), 6);
        assert_eq!(parts.iter().filter(|p| p.kind == PartKind::Bolt).count(), 3);
    }

    #[test]
    fn test_reference_positions() {
        let parts = build(&ParameterSet::default()).unwrap();
        assert_eq!(find(&parts, PartId::Flange).position, [0.0, 10.0, 0.0]);
        assert_eq!(find(&parts, PartId::Flange).dimensions, [200.0, 20.0, 20.0]);
        assert_eq!(find(&parts, PartId::Web).position[1], 170.0);
        assert_eq!(find(&parts, PartId::Web).dimensions, [10.0, 300.0, 20.0]);
        assert_eq!(find(&parts, PartId::CoverPlate).position[1], 325.0);
        assert_eq!(find(&parts, PartId::CoverPlate).dimensions, [200.0, 5.0, 25.0]);
    }

    #[test]
    fn test_bolt_row() {
        let parts = build(&ParameterSet::default()).unwrap();
        let xs: Vec<f64> = (0..3).map(|i| find(&parts, PartId::Bolt(i)).position[0]).collect();
        assert_eq!(xs, vec![-50.0, 0.0, 50.0]);
        for i in 0..3 {
            let b = find(&parts, PartId::Bolt(i));
            assert_eq!(b.position[1], 70.0);
            assert_eq!(b.dimensions, [10.0, 10.0, 10.0]);
        }
    }

    #[test]
    fn test_web_sits_on_flange() {
        let p = ParameterSet {
            flange_thickness: 12.0,
            web_height: 250.0,
            ..Default::default()
        };
        let parts = build(&p).unwrap();
        let flange = find(&parts, PartId::Flange);
        let web = find(&parts, PartId::Web);
        assert_eq!(flange.max()[1], web.min()[1]);
        assert_eq!(web.position[1], 12.0 + 125.0);
    }

    #[test]
    fn test_narrow_flange_not_clamped() {
        let offsets = bolt_offsets(60.0);
        assert_eq!(offsets, [20.0, 0.0, -20.0]);
    }

    #[test]
    fn test_deterministic() {
        let p = ParameterSet {
            flange_width: 180.0,
            ..Default::default()
        };
        assert_eq!(build(&p).unwrap(), build(&p).unwrap());
    }

    #[test]
    fn test_rejects_non_positive_lengths() {
        let zero_web = ParameterSet {
            web_height: 0.0,
            ..Default::default()
        };
        assert_eq!(build(&zero_web).unwrap_err().field, "webHeight");

        let negative_flange = ParameterSet {
            flange_thickness: -5.0,
            ..Default::default()
        };
        let err = build(&negative_flange).unwrap_err();
        assert_eq!(err.field, "flangeThickness");
        assert_eq!(err.value, -5.0);
    }
}
