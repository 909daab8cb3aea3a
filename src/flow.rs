//! The interaction flow: one small state machine owning all session
//! state. Screens advance strictly forward (Intro → Intake → Lab →
//! Complete) with a single reset edge back to Intro. Every mutation of
//! session state goes through a method here; the DOM layer only reads
//! and schedules.

use crate::catalog::{self, ORGANS, Organ, SECRET_ORGAN};

/// Number of victim statement prompts; answers are a fixed-size list.
pub const ANSWER_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Intake,
    Lab,
    Complete,
}

/// Tunable constants of the flow, kept as configuration rather than
/// hard-wired so variants can shift the completion threshold or the
/// minimum answer length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowConfig {
    /// Minimum trimmed character count for one intake answer.
    pub min_answer_chars: usize,
    /// Collected organs required to close the case. The secret organ
    /// raises the effective threshold by one once unlocked.
    pub base_threshold: usize,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            min_answer_chars: 3,
            base_threshold: 6,
        }
    }
}

/// Session state for one case, scoped to one browser tab.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseFlow {
    cfg: FlowConfig,
    screen: Screen,
    answers: [String; ANSWER_COUNT],
    /// Collected organ ids in collection order, no duplicates.
    collected: Vec<u32>,
    inspected: Option<u32>,
    report_open: bool,
    /// Characters of the inspected report currently revealed.
    reveal_cursor: usize,
    flash_active: bool,
    secret_unlocked: bool,
}

impl Default for CaseFlow {
    fn default() -> Self {
        Self::new(FlowConfig::default())
    }
}

impl CaseFlow {
    pub fn new(cfg: FlowConfig) -> Self {
        Self {
            cfg,
            screen: Screen::Intro,
            answers: Default::default(),
            collected: Vec::new(),
            inspected: None,
            report_open: false,
            reveal_cursor: 0,
            flash_active: false,
            secret_unlocked: false,
        }
    }

    /// Rebuild a session from a decoded share token. Lands directly on
    /// the lab screen: a shared case always carries a finished victim
    /// statement, so a payload whose answers would not pass intake is
    /// rejected. Ids that name no cataloged organ and duplicate ids are
    /// dropped; the secret organ's id in the payload implies the unlock.
    pub fn rehydrate(cfg: FlowConfig, answers: &[String], collected: &[u32]) -> Option<Self> {
        if answers.len() != ANSWER_COUNT {
            return None;
        }
        let mut flow = Self::new(cfg);
        for (slot, text) in flow.answers.iter_mut().zip(answers) {
            *slot = text.clone();
        }
        if !flow.statement_complete() {
            return None;
        }
        flow.screen = Screen::Lab;
        if collected.contains(&SECRET_ORGAN.id) {
            flow.secret_unlocked = true;
        }
        for &id in collected {
            if !flow.collected.contains(&id) && flow.organ(id).is_some() {
                flow.collected.push(id);
            }
        }
        Some(flow)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn config(&self) -> FlowConfig {
        self.cfg
    }

    // --- Intro / Intake ------------------------------------------------------

    /// Intro → Intake.
    pub fn begin_intake(&mut self) -> bool {
        if self.screen != Screen::Intro {
            return false;
        }
        self.screen = Screen::Intake;
        true
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Record one statement answer. Only meaningful while on the intake
    /// screen; out-of-range slots are ignored.
    pub fn set_answer(&mut self, idx: usize, text: &str) {
        if self.screen == Screen::Intake {
            if let Some(slot) = self.answers.get_mut(idx) {
                *slot = text.to_string();
            }
        }
    }

    fn answer_ok(&self, text: &str) -> bool {
        text.trim().chars().count() >= self.cfg.min_answer_chars
    }

    /// True once every answer passes the minimum-length check.
    pub fn statement_complete(&self) -> bool {
        self.answers.iter().all(|a| self.answer_ok(a))
    }

    /// Intake → Lab, refused (not an error) until the statement is
    /// complete.
    pub fn submit_statement(&mut self) -> bool {
        if self.screen != Screen::Intake || !self.statement_complete() {
            return false;
        }
        self.screen = Screen::Lab;
        true
    }

    // --- Catalog views -------------------------------------------------------

    /// The organs currently in play: the fixed eight, plus the secret
    /// one once unlocked. Base list stays untouched; the extra entry is
    /// merged at read time.
    pub fn active_organs(&self) -> impl Iterator<Item = &'static Organ> + '_ {
        let extra = self.secret_unlocked.then_some(&SECRET_ORGAN);
        ORGANS.iter().chain(extra)
    }

    /// Look up an organ among the organs currently in play.
    pub fn organ(&self, id: u32) -> Option<&'static Organ> {
        self.active_organs().find(|o| o.id == id)
    }

    // --- Lab -----------------------------------------------------------------

    /// Click an organ on the board. First inspection collects it, opens
    /// its report, and resets the reveal cursor; the returned organ cues
    /// narration. Re-clicking a collected organ is a no-op (`None`), as
    /// is any id outside the active catalog or any screen but the lab.
    pub fn inspect_organ(&mut self, id: u32) -> Option<&'static Organ> {
        if self.screen != Screen::Lab || self.is_collected(id) {
            return None;
        }
        let organ = self.organ(id)?;
        self.inspected = Some(id);
        self.report_open = true;
        self.reveal_cursor = 0;
        self.collected.push(id);
        Some(organ)
    }

    pub fn close_report(&mut self) {
        self.report_open = false;
        self.inspected = None;
        self.reveal_cursor = 0;
    }

    pub fn report_open(&self) -> bool {
        self.report_open
    }

    pub fn inspected_organ(&self) -> Option<&'static Organ> {
        self.inspected.and_then(|id| catalog::organ_by_id(id))
    }

    /// Advance the typewriter by one character. Returns false once the
    /// report is fully revealed (or no report is open), which is the
    /// cue to cancel the reveal interval.
    pub fn tick_reveal(&mut self) -> bool {
        if !self.report_open {
            return false;
        }
        let len = match self.inspected_organ() {
            Some(o) => o.report.chars().count(),
            None => return false,
        };
        if self.reveal_cursor >= len {
            return false;
        }
        self.reveal_cursor += 1;
        true
    }

    pub fn reveal_complete(&self) -> bool {
        match self.inspected_organ() {
            Some(o) => self.reveal_cursor >= o.report.chars().count(),
            None => true,
        }
    }

    /// The visible prefix of the inspected report, sliced on character
    /// boundaries.
    pub fn revealed_report(&self) -> String {
        match self.inspected_organ() {
            Some(o) => o.report.chars().take(self.reveal_cursor).collect(),
            None => String::new(),
        }
    }

    // --- Collection / completion ---------------------------------------------

    pub fn collected(&self) -> &[u32] {
        &self.collected
    }

    pub fn is_collected(&self, id: u32) -> bool {
        self.collected.contains(&id)
    }

    /// Collected organs in collection order.
    pub fn collected_organs(&self) -> impl Iterator<Item = &'static Organ> + '_ {
        self.collected
            .iter()
            .filter_map(|id| catalog::organ_by_id(*id))
    }

    /// Organs required to close the case right now.
    pub fn threshold(&self) -> usize {
        self.cfg.base_threshold + usize::from(self.secret_unlocked)
    }

    pub fn can_complete(&self) -> bool {
        self.screen == Screen::Lab && self.collected.len() >= self.threshold()
    }

    /// Lab → Complete once enough evidence is collected. Returns true
    /// only on the transition itself, so celebration and narration fire
    /// exactly once however often the action is invoked.
    pub fn complete_autopsy(&mut self) -> bool {
        if !self.can_complete() {
            return false;
        }
        self.screen = Screen::Complete;
        self.report_open = false;
        self.inspected = None;
        true
    }

    /// Complete → Intro with a blank session, as if freshly loaded.
    pub fn new_case(&mut self) -> bool {
        if self.screen != Screen::Complete {
            return false;
        }
        *self = Self::new(self.cfg);
        true
    }

    // --- Secret --------------------------------------------------------------

    /// Side-channel unlock from the key-sequence detector. Valid on any
    /// screen; idempotent. Returns true only the first time.
    pub fn unlock_secret(&mut self) -> bool {
        if self.secret_unlocked {
            return false;
        }
        self.secret_unlocked = true;
        true
    }

    pub fn secret_unlocked(&self) -> bool {
        self.secret_unlocked
    }

    // --- Transient effects ---------------------------------------------------

    pub fn flash_active(&self) -> bool {
        self.flash_active
    }

    pub fn set_flash(&mut self, on: bool) {
        self.flash_active = on;
    }
}
