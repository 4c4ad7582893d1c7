use crate::wire::ParameterRecord;

pub const TITLE_STYLES: &[&str] = &[
    "Clickbait",
    "How-To",
    "Listicle",
    "Pertanyaan",
    "Storytelling",
    "Benefit Langsung",
];

pub const TONES: &[&str] = &[
    "Persuasif",
    "Santai",
    "Profesional",
    "Emosional",
    "Humoris",
    "Mendesak",
];

/// Angles offered as checkboxes. Any non-blank label is accepted.
pub const BENEFIT_ANGLES: &[&str] = &[
    "FOMO",
    "Curiosity",
    "Urgency",
    "Social Proof",
    "Hemat Waktu",
    "Hemat Uang",
    "Transformasi",
];

/// Required fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProductType,
    TargetAudience,
    PainPoints,
    TitleStyle,
    Tone,
    TitleCount,
    BenefitAngles,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::ProductType => "productType",
            Field::TargetAudience => "targetAudience",
            Field::PainPoints => "painPoints",
            Field::TitleStyle => "titleStyle",
            Field::Tone => "tone",
            Field::TitleCount => "titleCount",
            Field::BenefitAngles => "benefitAngles",
        }
    }
}

/// One edit, selection or checkbox toggle coming from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    ProductType(String),
    TargetAudience(String),
    PainPoints(String),
    TitleStyle(String),
    Tone(String),
    TitleCount(String),
    CharLimit(String),
    ForbiddenWords(String),
    Angle { label: String, checked: bool },
}

impl FieldChange {
    /// Replay a whole snapshot as the edits a user would have made.
    pub fn from_record(rec: ParameterRecord) -> Vec<FieldChange> {
        let mut changes = vec![
            FieldChange::ProductType(rec.product_type),
            FieldChange::TargetAudience(rec.target_audience),
            FieldChange::PainPoints(rec.pain_points),
            FieldChange::TitleStyle(rec.title_style),
            FieldChange::Tone(rec.tone),
            FieldChange::TitleCount(rec.title_count),
            FieldChange::CharLimit(rec.char_limit),
            FieldChange::ForbiddenWords(rec.forbidden_words),
        ];
        changes.extend(
            rec.benefit_angles
                .into_iter()
                .map(|label| FieldChange::Angle { label, checked: true }),
        );
        changes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    NotReady,
}

/// What the form front-end should show for a readiness state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiSignal {
    pub trigger_enabled: bool,
    pub notice_visible: bool,
}

impl Readiness {
    pub fn signal(self) -> UiSignal {
        match self {
            Readiness::Ready => UiSignal { trigger_enabled: true, notice_visible: false },
            Readiness::NotReady => UiSignal { trigger_enabled: false, notice_visible: true },
        }
    }
}

/// Current form contents. Readiness is always derived from these values,
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    product_type: String,
    target_audience: String,
    pain_points: String,
    title_style: String,
    tone: String,
    title_count: String,
    char_limit: String,
    forbidden_words: String,
    angles: Vec<String>,
}

fn select(catalog: &[&str], value: &str) -> String {
    catalog
        .iter()
        .find(|c| c.eq_ignore_ascii_case(value.trim()))
        .map(|c| c.to_string())
        .unwrap_or_default()
}

impl FormState {
    pub fn apply(mut self, change: FieldChange) -> Self {
        match change {
            FieldChange::ProductType(v) => self.product_type = v,
            FieldChange::TargetAudience(v) => self.target_audience = v,
            FieldChange::PainPoints(v) => self.pain_points = v,
            FieldChange::TitleStyle(v) => self.title_style = select(TITLE_STYLES, &v),
            FieldChange::Tone(v) => self.tone = select(TONES, &v),
            FieldChange::TitleCount(v) => self.title_count = v,
            FieldChange::CharLimit(v) => self.char_limit = v,
            FieldChange::ForbiddenWords(v) => self.forbidden_words = v,
            FieldChange::Angle { label, checked } => {
                let label = label.trim();
                if label.is_empty() {
                    return self;
                }
                let present = self.angles.iter().any(|a| a == label);
                if checked && !present {
                    self.angles.push(label.to_string());
                } else if !checked {
                    self.angles.retain(|a| a != label);
                }
            }
        }
        self
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        let checks = [
            (Field::ProductType, self.product_type.is_empty()),
            (Field::TargetAudience, self.target_audience.trim().is_empty()),
            (Field::PainPoints, self.pain_points.trim().is_empty()),
            (Field::TitleStyle, self.title_style.is_empty()),
            (Field::Tone, self.tone.is_empty()),
            (Field::TitleCount, self.title_count.is_empty()),
            (Field::BenefitAngles, self.angles.is_empty()),
        ];
        checks
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(f, _)| f)
            .collect()
    }

    pub fn readiness(&self) -> Readiness {
        if self.missing_fields().is_empty() {
            Readiness::Ready
        } else {
            Readiness::NotReady
        }
    }

    pub fn is_ready(&self) -> bool {
        self.readiness() == Readiness::Ready
    }

    /// Snapshot for one trigger; `None` while the form is incomplete.
    pub fn capture(&self) -> Option<ParameterRecord> {
        if !self.is_ready() {
            return None;
        }
        Some(ParameterRecord {
            product_type: self.product_type.clone(),
            target_audience: self.target_audience.clone(),
            pain_points: self.pain_points.clone(),
            title_style: self.title_style.clone(),
            tone: self.tone.clone(),
            title_count: self.title_count.clone(),
            char_limit: self.char_limit.clone(),
            forbidden_words: self.forbidden_words.clone(),
            benefit_angles: self.angles.clone(),
        })
    }
}

/// `(state, change) -> (state, ready)`.
pub fn reduce(state: FormState, change: FieldChange) -> (FormState, bool) {
    let next = state.apply(change);
    let ready = next.is_ready();
    (next, ready)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn complete() -> FormState {
        FieldChange::from_record(ParameterRecord {
            product_type: "Ebook".into(),
            target_audience: "Pemula bisnis online".into(),
            pain_points: "Takut gagal".into(),
            title_style: "Clickbait".into(),
            tone: "Persuasif".into(),
            title_count: "5".into(),
            benefit_angles: vec!["FOMO".into()],
            ..Default::default()
        })
        .into_iter()
        .fold(FormState::default(), FormState::apply)
    }

    #[test]
    fn empty_form_is_not_ready() {
        let state = FormState::default();
        assert_eq!(state.readiness(), Readiness::NotReady);
        assert_eq!(state.missing_fields().len(), 7);
        assert!(state.capture().is_none());
        assert_eq!(
            Readiness::NotReady.signal(),
            UiSignal { trigger_enabled: false, notice_visible: true }
        );
    }

    #[test]
    fn complete_form_is_ready() {
        let state = complete();
        assert!(state.is_ready());
        assert_eq!(
            state.readiness().signal(),
            UiSignal { trigger_enabled: true, notice_visible: false }
        );
        let rec = state.capture().unwrap();
        assert_eq!(rec.benefit_angles, vec!["FOMO"]);
        assert!(rec.char_limit.is_empty());
    }

    #[test]
    fn clearing_any_required_field_flips_readiness() {
        let clears = [
            (FieldChange::ProductType(String::new()), Field::ProductType),
            (FieldChange::TargetAudience("   ".into()), Field::TargetAudience),
            (FieldChange::PainPoints("\n \n".into()), Field::PainPoints),
            (FieldChange::TitleStyle(String::new()), Field::TitleStyle),
            (FieldChange::Tone(String::new()), Field::Tone),
            (FieldChange::TitleCount(String::new()), Field::TitleCount),
            (FieldChange::Angle { label: "FOMO".into(), checked: false }, Field::BenefitAngles),
        ];
        for (change, field) in clears {
            let (state, ready) = reduce(complete(), change);
            assert!(!ready, "{} should block readiness", field.name());
            assert_eq!(state.missing_fields(), vec![field]);
        }
    }

    #[test]
    fn optional_fields_do_not_affect_readiness() {
        let (state, ready) = reduce(complete(), FieldChange::CharLimit(String::new()));
        assert!(ready);
        let (_, ready) = reduce(state, FieldChange::ForbiddenWords("gratis".into()));
        assert!(ready);
    }

    #[test]
    fn selections_only_hold_catalog_labels() {
        let state = complete().apply(FieldChange::TitleStyle("listicle".into()));
        assert_eq!(state.capture().unwrap().title_style, "Listicle");

        let (state, ready) = reduce(state, FieldChange::Tone("Sarkastik".into()));
        assert!(!ready);
        assert_eq!(state.missing_fields(), vec![Field::Tone]);
    }

    #[test]
    fn angles_keep_check_order_and_ignore_duplicates() {
        let state = complete()
            .apply(FieldChange::Angle { label: "Urgency".into(), checked: true })
            .apply(FieldChange::Angle { label: "FOMO".into(), checked: true })
            .apply(FieldChange::Angle { label: "  ".into(), checked: true })
            .apply(FieldChange::Angle { label: "Curiosity".into(), checked: true });
        assert_eq!(state.angles, ["FOMO", "Urgency", "Curiosity"]);

        let state = state.apply(FieldChange::Angle { label: "Urgency".into(), checked: false });
        assert_eq!(state.angles, ["FOMO", "Curiosity"]);
    }

    #[test]
    fn readiness_is_rederived_not_remembered() {
        let (state, ready) = reduce(complete(), FieldChange::TitleCount(String::new()));
        assert!(!ready);
        let (_, ready) = reduce(state, FieldChange::TitleCount("10".into()));
        assert!(ready);
    }

    fn arb_change() -> impl Strategy<Value = FieldChange> {
        let text = prop_oneof![Just(String::new()), Just("  ".to_string()), "[a-z]{1,6}"];
        prop_oneof![
            text.clone().prop_map(FieldChange::ProductType),
            text.clone().prop_map(FieldChange::TargetAudience),
            text.clone().prop_map(FieldChange::PainPoints),
            prop_oneof![Just("Clickbait".to_string()), Just(String::new())]
                .prop_map(FieldChange::TitleStyle),
            prop_oneof![Just("Santai".to_string()), Just("x".to_string())]
                .prop_map(FieldChange::Tone),
            text.clone().prop_map(FieldChange::TitleCount),
            text.prop_map(FieldChange::CharLimit),
            (prop_oneof![Just("FOMO"), Just("Urgency")], any::<bool>())
                .prop_map(|(l, checked)| FieldChange::Angle { label: l.to_string(), checked }),
        ]
    }

    proptest! {
        #[test]
        fn ready_iff_every_required_field_is_present(
            changes in proptest::collection::vec(arb_change(), 0..30)
        ) {
            let state = changes.into_iter().fold(FormState::default(), FormState::apply);
            let expected = !state.product_type.is_empty()
                && !state.target_audience.trim().is_empty()
                && !state.pain_points.trim().is_empty()
                && !state.title_style.is_empty()
                && !state.tone.is_empty()
                && !state.title_count.is_empty()
                && !state.angles.is_empty();
            prop_assert_eq!(state.is_ready(), expected);
            prop_assert_eq!(state.capture().is_some(), expected);
        }
    }
}
