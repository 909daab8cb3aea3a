// Integration tests (native) for the organ catalog and intake content.
// These guard the invariants the UI leans on when it lays out hotspots
// and narrates reports.

use std::collections::HashSet;

use love_autopsy_lab::catalog::{
    CLOSING_LINE, GREETING_LINE, INTAKE_QUESTIONS, ORGANS, SECRET_LINE, SECRET_ORGAN, organ_by_id,
};
use love_autopsy_lab::secret::SECRET_WORD;

#[test]
fn base_catalog_has_eight_organs() {
    assert_eq!(ORGANS.len(), 8);
}

#[test]
fn organ_ids_are_unique_across_the_full_catalog() {
    let mut ids: HashSet<u32> = ORGANS.iter().map(|o| o.id).collect();
    assert_eq!(ids.len(), ORGANS.len(), "duplicate id in base catalog");
    assert!(
        ids.insert(SECRET_ORGAN.id),
        "secret organ must not shadow a base id"
    );
}

#[test]
fn organ_names_and_labels_are_unique() {
    let names: HashSet<&str> = ORGANS.iter().map(|o| o.name).collect();
    assert_eq!(names.len(), ORGANS.len());
    let labels: HashSet<&str> = ORGANS.iter().map(|o| o.label).collect();
    assert_eq!(labels.len(), ORGANS.len());
}

#[test]
fn base_organs_carry_full_forensic_data() {
    for organ in ORGANS {
        assert!(!organ.name.is_empty(), "organ {} has no name", organ.id);
        assert!(!organ.report.is_empty(), "organ {} has no report", organ.id);
        assert!(
            organ.voice.is_some_and(|v| !v.is_empty()),
            "organ {} has no narration line",
            organ.id
        );
        assert!(
            organ
                .label
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == ' '),
            "label {:?} is not shout-case",
            organ.label
        );
    }
}

#[test]
fn base_organs_sit_inside_the_body_outline() {
    for organ in ORGANS {
        let (x, y) = match organ.pos {
            Some(pos) => pos,
            None => panic!("base organ {} has no hotspot position", organ.id),
        };
        assert!((0.0..=100.0).contains(&x), "organ {} x off board", organ.id);
        assert!((0.0..=100.0).contains(&y), "organ {} y off board", organ.id);
    }
}

#[test]
fn secret_organ_floats_free_of_the_diagram() {
    assert!(SECRET_ORGAN.pos.is_none(), "secret organ is placed ad hoc");
    assert!(SECRET_ORGAN.voice.is_some());
    assert!(!SECRET_ORGAN.report.is_empty());
}

#[test]
fn organ_by_id_resolves_base_and_secret_ids() {
    for organ in ORGANS {
        let found = match organ_by_id(organ.id) {
            Some(o) => o,
            None => panic!("id {} did not resolve", organ.id),
        };
        assert_eq!(found.name, organ.name);
    }
    assert_eq!(
        organ_by_id(SECRET_ORGAN.id).map(|o| o.name),
        Some(SECRET_ORGAN.name)
    );
    assert!(organ_by_id(0).is_none());
    assert!(organ_by_id(42).is_none());
}

#[test]
fn intake_asks_exactly_three_questions() {
    assert_eq!(INTAKE_QUESTIONS.len(), 3);
    for q in INTAKE_QUESTIONS {
        assert!(q.contains('?'), "question {q:?} is not a question");
    }
}

#[test]
fn narration_lines_are_present() {
    for line in [GREETING_LINE, CLOSING_LINE, SECRET_LINE] {
        assert!(!line.is_empty());
    }
}

#[test]
fn secret_word_is_short_lowercase_ascii() {
    assert!((5..=8).contains(&SECRET_WORD.len()));
    assert!(SECRET_WORD.chars().all(|c| c.is_ascii_lowercase()));
}
