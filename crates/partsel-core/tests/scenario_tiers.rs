//! # Scenario Tiers
//!
//! End-to-end selection scenarios run through the public `Store` API.
//!
//! - T0: scoring of a single well-specified component
//! - T1: ranking across a family
//! - T2: history and carts around a selection
//! - T3: persistence across reopen

use partsel_core::{
    Cart, CartItem, ComponentFilter, ComponentId, ComponentSpec, Family, NewComponent,
    PartselError, RequirementSet, SelectionRecord, Store, evaluate,
};

fn skf_6008() -> NewComponent {
    let mut bearing = NewComponent::new(Family::Bearing, "Deep Groove Ball Bearing 6008", "SKF", "6008-2RS1");
    bearing.price = "$25-35".to_string();
    bearing.rating = 4.8;
    bearing.specification = Some(ComponentSpec {
        bore_diameter: Some(40.0),
        outer_diameter: Some(68.0),
        width: Some(15.0),
        dynamic_load_rating: Some(17.8),
        static_load_rating: Some(11.6),
        speed_rating: Some(13000.0),
        l10_life: Some(50000.0),
        ..ComponentSpec::default()
    });
    bearing
}

fn siemens_ie3() -> NewComponent {
    let mut motor = NewComponent::new(Family::Motor, "AC Induction Motor IE3 1.5kW", "Siemens", "1LE1001-1AB42");
    motor.price = "$150-200".to_string();
    motor.rating = 4.9;
    motor.specification = Some(ComponentSpec {
        power: Some(1.5),
        speed: Some(1450.0),
        efficiency: Some(86.5),
        voltage: Some("400V".to_string()),
        insulation_class: Some("F".to_string()),
        ..ComponentSpec::default()
    });
    motor
}

fn seal(name: &str, part: &str, diameter: f64) -> NewComponent {
    let mut seal = NewComponent::new(Family::Seal, name, "Freudenberg", part);
    seal.specification = Some(ComponentSpec {
        seal_diameter: Some(diameter),
        pressure_rating: Some(50.0),
        elastomer_type: Some("NBR".to_string()),
        ..ComponentSpec::default()
    });
    seal
}

fn bearing_requirements() -> RequirementSet {
    RequirementSet::new()
        .with("dynamicLoad", 15.0)
        .with("speed", 3000.0)
        .with("targetL10Life", 20000.0)
        .with("boreSize", 40.0)
        .with("bearingEnvironment", "Dusty")
        .with("lubrication", "Grease")
        .with("bearingMaterial", "Steel")
}

// =============================================================================
// T0: SINGLE COMPONENT SCORING
// =============================================================================

mod t0_scoring {
    use super::*;

    /// T0.1: A bearing that clears every threshold scores 100 on seven criteria.
    #[test]
    fn bearing_scores_perfect() {
        let spec = skf_6008().specification.expect("spec");
        let outcome = evaluate("bearing", &bearing_requirements(), &spec).expect("evaluate");

        assert_eq!(outcome.criteria.len(), 7);
        assert_eq!(outcome.matched_count, 7);
        assert_eq!(outcome.match_score, 100);
        assert_eq!(outcome.criteria[0].observed, "17.8 kN");
        assert_eq!(outcome.criteria[0].requirement, "≥ 15.0 kN");
    }

    /// T0.2: An undersized motor at the exact speed matches five of six.
    #[test]
    fn undersized_motor() {
        let mut spec = siemens_ie3().specification.expect("spec");
        spec.power = Some(7.0);
        let reqs = RequirementSet::new().with("power", 10.0).with("speed", 1450.0);
        let outcome = evaluate("MOTOR", &reqs, &spec).expect("evaluate");

        assert_eq!(outcome.matched_count, 5);
        assert_eq!(outcome.match_score, 83);
        assert!(!outcome.criteria[0].satisfied);
        assert_eq!(outcome.criteria[0].requirement, "≈ 10.0 kW (±20%)");
    }

    /// T0.3: An explosive atmosphere costs the motor one of six criteria.
    #[test]
    fn motor_in_explosive_atmosphere() {
        let spec = siemens_ie3().specification.expect("spec");
        let reqs = RequirementSet::new()
            .with("power", 1.5)
            .with("speed", 1450.0)
            .with("motorEnvironment", "Explosive Atmosphere");
        let outcome = evaluate("motor", &reqs, &spec).expect("evaluate");

        assert_eq!(outcome.criteria.len(), 6);
        assert_eq!(outcome.matched_count, 5);
        assert_eq!(outcome.match_score, 83);
        let failed: Vec<_> = outcome
            .criteria
            .iter()
            .filter(|c| !c.satisfied)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(failed, vec!["Environmental Tolerance"]);
    }

    /// T0.4: Text where a number is expected is a request error, not a failed criterion.
    #[test]
    fn non_numeric_requirement_rejected() {
        let spec = skf_6008().specification.expect("spec");
        let reqs = RequirementSet::new().with("dynamicLoad", "heavy");
        assert!(matches!(
            evaluate("bearing", &reqs, &spec),
            Err(PartselError::InvalidRequirement { ref field, .. }) if field == "dynamicLoad"
        ));
    }

    /// T0.5: Numeric strings are accepted after trimming.
    #[test]
    fn numeric_strings_accepted() {
        let spec = skf_6008().specification.expect("spec");
        let reqs = RequirementSet::new().with("dynamicLoad", " 15 ").with("boreSize", "40");
        let outcome = evaluate("bearing", &reqs, &spec).expect("evaluate");
        assert_eq!(outcome.match_score, 100);
    }
}

// =============================================================================
// T1: RANKING
// =============================================================================

mod t1_ranking {
    use super::*;

    /// T1.1: Equal scores keep catalog order; higher scores move ahead.
    #[test]
    fn ranking_is_stable() {
        let mut store = Store::new();
        // 36 mm and 24 mm miss the ±2 mm band: 4 of 5
        store.insert_component(seal("C1", "S-1", 36.0)).expect("insert");
        store.insert_component(seal("C2", "S-2", 24.0)).expect("insert");
        store.insert_component(seal("C3", "S-3", 30.0)).expect("insert");

        let reqs = RequirementSet::new().with("sealDiameter", 30.0);
        let ranking = store.rank("seal", &reqs).expect("rank");

        let order: Vec<_> = ranking
            .recommendations
            .iter()
            .map(|r| (r.name.as_str(), r.match_score))
            .collect();
        assert_eq!(order, vec![("C3", 100), ("C1", 80), ("C2", 80)]);
        assert_eq!(ranking.total_matches, 3);
    }

    /// T1.2: Unknown family and an empty family are both NotFound.
    #[test]
    fn missing_family_not_found() {
        let mut store = Store::new();
        store.insert_component(skf_6008()).expect("insert");

        assert!(matches!(
            store.rank("gear", &RequirementSet::new()),
            Err(PartselError::NotFound(_))
        ));
        assert!(matches!(
            store.rank("sprocket", &RequirementSet::new()),
            Err(PartselError::NotFound(_))
        ));
    }

    /// T1.3: Components without specification records are invisible to ranking.
    #[test]
    fn unspecified_family_ranks_empty() {
        let mut store = Store::new();
        store
            .insert_component(NewComponent::new(Family::Gear, "Spur Gear", "KHK", "SS2-20"))
            .expect("insert");

        let ranking = store.rank("gear", &RequirementSet::new()).expect("rank");
        assert!(ranking.recommendations.is_empty());
        assert_eq!(ranking.total_matches, 0);
    }

    /// T1.4: Recommendations carry catalog fields and metrics.
    #[test]
    fn recommendation_carries_catalog_fields() {
        let mut store = Store::new();
        store.insert_component(siemens_ie3()).expect("insert");

        let reqs = RequirementSet::new().with("power", 1.5).with("speed", 1450.0);
        let ranking = store.rank("Motor", &reqs).expect("rank");
        let top = ranking.top().expect("top");

        assert_eq!(top.part_number, "1LE1001-1AB42");
        assert_eq!(top.price, "$150-200");
        assert_eq!(top.match_score, 100);
        assert_eq!(top.performance_metrics.len(), 3);
        assert_eq!(top.performance_metrics[1].observed, "1450.0 RPM");
        assert!(top.performance_metrics[1].met);
    }

    /// T1.5: Catalog listing filters by family and orders by rating.
    #[test]
    fn catalog_listing_by_rating() {
        let mut store = Store::new();
        store.insert_component(skf_6008()).expect("insert");
        store.insert_component(siemens_ie3()).expect("insert");
        let mut timken = NewComponent::new(Family::Bearing, "Tapered Roller Bearing 30208", "Timken", "30208");
        timken.rating = 4.6;
        store.insert_component(timken).expect("insert");

        let all = store.list_components(&ComponentFilter::default()).expect("list");
        let names: Vec<_> = all.iter().map(|c| c.manufacturer.as_str()).collect();
        assert_eq!(names, vec!["Siemens", "SKF", "Timken"]);

        let filter = ComponentFilter {
            family: Some(Family::Bearing),
            ..ComponentFilter::default()
        };
        assert_eq!(store.list_components(&filter).expect("list").len(), 2);
    }
}

// =============================================================================
// T2: HISTORY AND CARTS
// =============================================================================

mod t2_collaborators {
    use super::*;

    /// T2.1: The top recommendation is recorded and listed newest first.
    #[test]
    fn selection_recorded() {
        let mut store = Store::new();
        store.insert_component(skf_6008()).expect("insert");

        for load in [10.0, 30.0] {
            let reqs = bearing_requirements().with("dynamicLoad", load);
            let ranking = store.rank("bearing", &reqs).expect("rank");
            let record = SelectionRecord::from_ranking(
                Family::Bearing,
                &reqs,
                &ranking,
                "2026-03-01T10:00:00+00:00",
            )
            .expect("record");
            store.record_selection(record).expect("record");
        }

        let history = store.history(10).expect("history");
        assert_eq!(history.len(), 2);
        // 30 kN exceeds the 17.8 kN rating
        assert_eq!(history[0].match_score, 86);
        assert_eq!(history[1].match_score, 100);
        assert_eq!(store.history(1).expect("history").len(), 1);
    }

    /// T2.2: Carts merge repeated adds and reject removal from a missing cart.
    #[test]
    fn cart_lifecycle() {
        let mut store = Store::new();
        let item = CartItem {
            component_id: ComponentId(1),
            name: "Deep Groove Ball Bearing 6008".to_string(),
            quantity: 2,
            price: Some("$25-35".to_string()),
            manufacturer: Some("SKF".to_string()),
        };

        store.add_to_cart("line-4", item.clone()).expect("add");
        let cart: Cart = store.add_to_cart("line-4", item).expect("add");
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.item_count(), 4);
        assert!((cart.total_price() - 100.0).abs() < 1e-9);

        assert!(matches!(
            store.remove_from_cart("nobody", ComponentId(1)),
            Err(PartselError::NotFound(_))
        ));
        let emptied = store.remove_from_cart("line-4", ComponentId(1)).expect("remove");
        assert!(emptied.items.is_empty());
    }
}

// =============================================================================
// T3: PERSISTENCE
// =============================================================================

mod t3_persistence {
    use super::*;

    /// T3.1: A redb-backed store ranks identically after reopening.
    #[test]
    fn redb_reopen_preserves_ranking() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.redb");

        let before = {
            let mut store = Store::with_redb(&path).expect("open");
            store.insert_component(skf_6008()).expect("insert");
            store.rank("bearing", &bearing_requirements()).expect("rank")
        };

        let store = Store::with_redb(&path).expect("reopen");
        assert!(store.is_persistent());
        let after = store.rank("bearing", &bearing_requirements()).expect("rank");
        assert_eq!(before, after);
    }

    /// T3.2: Part numbers stay unique across reopen.
    #[test]
    fn redb_duplicate_part_number_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.redb");

        {
            let mut store = Store::with_redb(&path).expect("open");
            store.insert_component(siemens_ie3()).expect("insert");
        }
        let mut store = Store::with_redb(&path).expect("reopen");
        assert!(matches!(
            store.insert_component(siemens_ie3()),
            Err(PartselError::DuplicatePartNumber(_))
        ));
        assert_eq!(store.component_count().expect("count"), 1);
    }
}
