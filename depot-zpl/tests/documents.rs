//! Whole-document properties across every layout kind.

use depot_zpl::{
    AddressEntry, BlockEntry, CargoFlags, ConsolidatorSummary, LabelDefaults, LabelRequest, render,
};

fn all_kinds() -> Vec<LabelRequest> {
    vec![
        LabelRequest::Simple {
            code: "00000042".into(),
            cargo_flags: Some(CargoFlags {
                is_priority: true,
                requires_special_handling: true,
                expiration_date: Some("2026-03-01T00:00:00Z".into()),
                handling_instructions: Some("Fragile - keep upright".into()),
            }),
        },
        LabelRequest::BatchRange { start_code: 10, quantity: 2 },
        LabelRequest::Consolidator {
            code: "C0000077".into(),
            summary: ConsolidatorSummary {
                cargo_count: Some(4),
                total_weight: Some(120.0),
                total_volume: Some(1.2),
                warehouse_name: Some("Cotia 1".into()),
                additional_text: None,
            },
        },
        LabelRequest::FloorGrid {
            warehouse_code: "COT001".into(),
            warehouse_name: "Cotia 1".into(),
            building_name: "Building A".into(),
            floor_name: "Ground".into(),
            addresses: vec![AddressEntry {
                full_address: "COT001-A-01-01-01".into(),
                name: "Pallet 01".into(),
            }],
        },
        LabelRequest::SingleVertical {
            full_address: "COT001-A-01-01-01".into(),
            pallet_name: "Pallet 01".into(),
            building_name: "Building A".into(),
            floor_name: "Ground".into(),
        },
        LabelRequest::BlockGrid {
            warehouse_code: "COT001".into(),
            warehouse_name: "Cotia 1".into(),
            building_name: "Building A".into(),
            addresses: vec![BlockEntry {
                full_address: "COT001-A-03-01".into(),
                floor_name: "Floor 3".into(),
            }],
        },
    ]
}

#[test]
fn test_every_kind_renders_well_formed_documents() {
    let defaults = LabelDefaults::default();
    for request in all_kinds() {
        let zpl = render(&request, &defaults);
        assert!(zpl.starts_with("^XA\n"), "{:?}", request);
        assert!(zpl.ends_with("^XZ\n"), "{:?}", request);
        assert!(zpl.contains("^CI28\n"), "{:?}", request);

        // field blocks are balanced: every ^FD closes with ^FS
        assert_eq!(zpl.matches("^FD").count(), zpl.matches("^FS").count(), "{:?}", request);
        // one ^FO per field block
        assert_eq!(zpl.matches("^FO").count(), zpl.matches("^FD").count(), "{:?}", request);
    }
}

#[test]
fn test_requests_survive_serde_round_trip_before_render() {
    let defaults = LabelDefaults::default();
    for request in all_kinds() {
        let json = serde_json::to_string(&request).expect("serialize");
        let back: LabelRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(render(&back, &defaults), render(&request, &defaults));
    }
}

#[test]
fn test_batch_blocks_are_self_contained() {
    let defaults = LabelDefaults::default();
    let zpl = render(&LabelRequest::BatchRange { start_code: 1, quantity: 3 }, &defaults);

    // each block is a complete document that could print alone
    let blocks: Vec<&str> = zpl.split_inclusive("^XZ\n").collect();
    assert_eq!(blocks.len(), 3);
    for (i, block) in blocks.iter().enumerate() {
        assert!(block.starts_with("^XA\n"));
        assert!(block.contains(&format!("^FD0000000{}^FS", i + 1)));
    }
}

#[test]
fn test_simple_with_full_flags_adds_four_indicators() {
    let defaults = LabelDefaults::default();
    let bare = render(
        &LabelRequest::Simple { code: "00000042".into(), cargo_flags: None },
        &defaults,
    );
    let flagged = render(&all_kinds()[0], &defaults);

    assert_eq!(bare.matches("^FO").count() + 4, flagged.matches("^FO").count());
    assert!(flagged.contains("^FDVal:01/03/2026^FS"));
    assert!(flagged.contains("^FDFragile - keep upright^FS"));
}
