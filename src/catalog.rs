//! Static case content: the organ catalog, intake questions, and the
//! narrator's stock lines. Everything here is immutable data; session
//! logic lives in [`crate::flow`].

/// One collectible "organ" on the autopsy board.
///
/// `voice` is the short line the narrator reads before the full report.
/// `pos` is the hotspot position on the heart diagram in percent of the
/// board area; the secret organ has no fixed position and is rendered in
/// a dedicated slot once unlocked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Organ {
    pub id: u32,
    pub name: &'static str,
    pub label: &'static str,
    pub report: &'static str,
    pub voice: Option<&'static str>,
    pub pos: Option<(f32, f32)>,
}

/// The eight organs every case starts with. Order matters only for
/// display; identity is by `id`.
pub const ORGANS: &[Organ] = &[
    Organ {
        id: 1,
        name: "Delulu Left Ventricle",
        label: "DELULU",
        report: "Severely enlarged from 47 instances of 'he's just busy'. Cause: chronic hope.",
        voice: Some("Detective... the Delulu Ventricle is critically enlarged."),
        pos: Some((38.0, 32.0)),
    },
    Organ {
        id: 2,
        name: "Ghosting Aorta",
        label: "GHOST",
        report: "Completely blocked. Last blood flow: February 2025. Classic Habesha ghosting.",
        voice: Some("The Ghosting Aorta shows total occlusion."),
        pos: Some((62.0, 28.0)),
    },
    Organ {
        id: 3,
        name: "Injera Intestines",
        label: "INJERA",
        report: "Tied in knots after the 3-hour 'who eats the last piece' fight.",
        voice: Some("Injera Intestines are in complete disarray."),
        pos: Some((45.0, 55.0)),
    },
    Organ {
        id: 4,
        name: "Overthinker Sinus Node",
        label: "OVERTHINK",
        report: "Replayed one 'k' message 92 times at 3 AM.",
        voice: Some("The Overthinker node is in arrhythmia."),
        pos: Some((55.0, 42.0)),
    },
    Organ {
        id: 5,
        name: "Red-Flag Coronary",
        label: "RED FLAG",
        report: "Toxic levels of 'he has potential' detected.",
        voice: Some("Coronary artery flooded with red flags."),
        pos: Some((30.0, 48.0)),
    },
    Organ {
        id: 6,
        name: "Cringe Pericardium",
        label: "CRINGE",
        report: "You said 'you too' when he said 'I love you'.",
        voice: Some("Pericardium shows extreme cringe inflammation."),
        pos: Some((68.0, 52.0)),
    },
    Organ {
        id: 7,
        name: "Habesha Hope Pulmonary Vein",
        label: "HABESHA HOPE",
        report: "Still believing 'next time he'll change'.",
        voice: Some("Pulmonary vein full of false Habesha hope."),
        pos: Some((48.0, 65.0)),
    },
    Organ {
        id: 8,
        name: "Butterfly Moths Atrium",
        label: "MOTHS",
        report: "Butterflies died. Only anxiety moths remain.",
        voice: Some("Atrium now inhabited by moths of anxiety."),
        pos: Some((52.0, 38.0)),
    },
];

/// The hidden ninth organ. Not part of [`ORGANS`]; it joins the active
/// catalog only after the secret key sequence unlocks it.
pub const SECRET_ORGAN: Organ = Organ {
    id: 9,
    name: "Situationship Spleen",
    label: "SITUATIONSHIP",
    report: "Ruptured after 11 months of 'what are we?'. Never defined, never survived.",
    voice: Some("Impossible... a hidden organ. The Situationship Spleen has ruptured."),
    pos: None,
};

/// Victim statement prompts, asked in order on the intake screen.
pub const INTAKE_QUESTIONS: &[&str] = &[
    "How did the victim die? (ghosted / fought / said k / etc.)",
    "Last words from the suspect? (paste text or describe)",
    "One red flag you completely ignored?",
];

// Narrator stock lines.
pub const GREETING_LINE: &str = "Welcome to the lab, Detective. Romance has been murdered.";
pub const CLOSING_LINE: &str = "Case closed. Romance is officially dead.";
pub const SECRET_LINE: &str = "A ninth organ has been detected, Detective. The plot thickens.";

/// Look up an organ across the full catalog, secret entry included.
/// Callers that must respect the unlock state go through
/// [`crate::flow::CaseFlow::organ`] instead.
pub fn organ_by_id(id: u32) -> Option<&'static Organ> {
    if SECRET_ORGAN.id == id {
        return Some(&SECRET_ORGAN);
    }
    ORGANS.iter().find(|o| o.id == id)
}
