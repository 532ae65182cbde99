use proptest::prelude::*;
use skillforge::consts::{MAX_CONTRAST, MAX_SKILLS, MIN_CONTRAST, MIN_SKILLS};
use skillforge::core_types::{Skill, SkillField, SkillId};
use skillforge::editor::{
    clamp_score, parse_score, InsertOutcome, RemoveOutcome, SkillCollection, UpdateOutcome,
};
use skillforge::geometry::{compute_label_anchor, compute_vertex, normalize_angle, polygon};
use skillforge::tone::{contrast_to_slider, slider_to_contrast};
use std::collections::HashSet;
use std::f64::consts::PI;

// --- STRATEGIES ---

#[derive(Debug, Clone)]
enum Op {
    Insert,
    Remove(usize),
    Reorder(usize, usize),
    SetValue(usize, String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Insert),
        (0usize..16).prop_map(Op::Remove),
        (0usize..16, 0usize..16).prop_map(|(a, b)| Op::Reorder(a, b)),
        (0usize..16, "(-?[0-9]{1,3}(\\.[0-9])?|-|\\.|[a-z]{1,3})?")
            .prop_map(|(i, raw)| Op::SetValue(i, raw)),
    ]
}

prop_compose! {
    fn arb_skills()(
        values in proptest::collection::vec(0u8..=10, 1..=MAX_SKILLS)
    ) -> Vec<Skill> {
        values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Skill {
                id: SkillId(i as u64 + 1),
                label: format!("s{}", i),
                value,
            })
            .collect()
    }
}

fn pick(c: &SkillCollection, i: usize) -> SkillId {
    let ids = c.ids();
    ids[i % ids.len()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_collection_stays_within_bounds(ops in proptest::collection::vec(arb_op(), 0..80)) {
        let mut c = SkillCollection::new();
        let mut seen: HashSet<SkillId> = c.ids().into_iter().collect();

        for op in ops {
            let before = c.len();
            match op {
                Op::Insert => match c.insert() {
                    InsertOutcome::Inserted(id) => {
                        prop_assert_eq!(c.len(), before + 1);
                        // Fresh id every time, even after removals.
                        prop_assert!(seen.insert(id));
                    }
                    InsertOutcome::Rejected(_) => prop_assert_eq!(before, MAX_SKILLS),
                },
                Op::Remove(i) => match c.remove(pick(&c, i)) {
                    RemoveOutcome::Removed(_) => prop_assert_eq!(c.len(), before - 1),
                    RemoveOutcome::AtMinimum => prop_assert_eq!(before, MIN_SKILLS),
                    RemoveOutcome::NotFound => prop_assert!(false, "picked id must exist"),
                },
                Op::Reorder(a, b) => {
                    let ids: HashSet<SkillId> = c.ids().into_iter().collect();
                    c.reorder(a, b);
                    let after: HashSet<SkillId> = c.ids().into_iter().collect();
                    prop_assert_eq!(ids, after);
                }
                Op::SetValue(i, raw) => {
                    let id = pick(&c, i);
                    let stored = c.get(id).map(|s| s.value);
                    let outcome = c.update(id, SkillField::Value, &raw);
                    if parse_score(&raw).is_none() {
                        // Not a number yet: nothing is stored until blur.
                        prop_assert_eq!(outcome, UpdateOutcome::Drafting);
                        prop_assert_eq!(c.get(id).map(|s| s.value), stored);
                        prop_assert_eq!(c.value_text(id), Some(raw.clone()));
                        prop_assert_eq!(c.blur(id), UpdateOutcome::Rescored(0));
                    }
                }
            }

            prop_assert!(c.len() >= MIN_SKILLS && c.len() <= MAX_SKILLS);
            prop_assert!(c.skills().iter().all(|s| s.value <= 10));
        }
    }

    #[test]
    fn prop_reorder_moves_exactly_one(len in MIN_SKILLS..=MAX_SKILLS, from in 0usize..MAX_SKILLS, to in 0usize..MAX_SKILLS) {
        prop_assume!(from < len && to < len);
        let mut c = SkillCollection::new();
        while c.len() < len {
            c.insert();
        }
        let mut expected = c.ids();
        let moved = expected.remove(from);
        expected.insert(to, moved);

        c.reorder(from, to);
        prop_assert_eq!(c.ids(), expected);
    }

    #[test]
    fn prop_clamp_lands_in_range(v in proptest::num::f64::ANY) {
        prop_assert!(clamp_score(v) <= 10);
    }

    #[test]
    fn prop_vertex_radius_is_linear(index in 0usize..12, count in 1usize..=12, value in 0.0..=10.0f64, r in 1.0..500.0f64) {
        prop_assume!(index < count);
        let v = compute_vertex(index, value, count, r).unwrap();
        let expected = value / 10.0 * r;
        prop_assert!((v.distance_from_origin() - expected).abs() < 1e-9 * r);
    }

    #[test]
    fn prop_labels_sit_on_label_circle(index in 0usize..12, count in 1usize..=12, r in 1.0..500.0f64) {
        prop_assume!(index < count);
        let a = compute_label_anchor(index, count, r).unwrap();
        let b = compute_label_anchor(index, count, r).unwrap();
        prop_assert_eq!(a, b);
        prop_assert!((a.point.distance_from_origin() - r).abs() < 1e-9 * r);
    }

    #[test]
    fn prop_polygon_matches_collection(skills in arb_skills()) {
        let vertices = polygon(&skills, 200.0);
        prop_assert_eq!(vertices.len(), skills.len());
        for (v, s) in vertices.iter().zip(&skills) {
            prop_assert!((v.distance_from_origin() - s.value as f64 * 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_normalized_angle_range(theta in -100.0..100.0f64) {
        let n = normalize_angle(theta);
        prop_assert!(n > -PI - 1e-12 && n <= PI);
        prop_assert!((n.sin() - theta.sin()).abs() < 1e-9);
        prop_assert!((n.cos() - theta.cos()).abs() < 1e-9);
    }

    #[test]
    fn prop_contrast_slider_round_trip(c in MIN_CONTRAST..=MAX_CONTRAST) {
        let back = slider_to_contrast(contrast_to_slider(c));
        prop_assert!((back - c).abs() < 1e-9);
    }

    #[test]
    fn prop_slider_stays_in_range(s in proptest::num::f64::ANY) {
        let c = slider_to_contrast(s);
        prop_assert!((MIN_CONTRAST..=MAX_CONTRAST).contains(&c));
    }
}
