use headline_prompt::cli::Locale;
use headline_prompt::form::FieldChange;
use headline_prompt::{assemble, ParameterRecord, Session, Template};

fn ebook() -> ParameterRecord {
    ParameterRecord {
        product_type: "Ebook".into(),
        target_audience: "Pemula bisnis online".into(),
        pain_points: "Tidak tahu mulai dari mana\nTakut gagal".into(),
        title_style: "Clickbait".into(),
        tone: "Persuasif".into(),
        title_count: "5".into(),
        char_limit: String::new(),
        forbidden_words: String::new(),
        benefit_angles: vec!["FOMO".into()],
    }
}

#[test]
fn ebook_form_end_to_end() {
    let mut session = Session::new(Template::for_locale(Locale::Id));
    let signal = session.apply_all(FieldChange::from_record(ebook()));
    assert!(signal.trigger_enabled);

    let text = session.trigger_assemble().expect("ready form assembles");
    assert!(text.contains("- Masalah Utama (Pain Points) yang diselesaikan:\n1. Tidak tahu mulai dari mana\n2. Takut gagal\n"));
    assert!(text.contains("Buatlah 5 variasi judul"));
    assert!(text.contains("Clickbait"));
    assert!(text.contains("Persuasif"));
    assert!(text.contains("Fokuskan pada FOMO."));
    assert!(!text.contains("Batas Karakter"));
    assert!(!text.contains("Larangan Kata"));
    assert!(text.contains("bullet points"));
    assert!(text.contains("Di sebelah setiap judul, berikan penjelasan singkat dalam kurung"));
}

#[test]
fn session_and_engine_agree() {
    let tpl = Template::for_locale(Locale::En);
    let mut session = Session::new(tpl);
    session.apply_all(FieldChange::from_record(ebook()));
    assert_eq!(session.trigger_assemble().unwrap(), assemble(&ebook(), tpl));
}

#[test]
fn engine_tolerates_records_the_form_would_reject() {
    let mut rec = ebook();
    rec.benefit_angles.clear();
    rec.pain_points = "\n\n".into();
    let text = assemble(&rec, Template::for_locale(Locale::Id));
    assert!(text.contains("Manfaat Utama Produk"));
}

#[test]
fn params_file_shape_feeds_the_form() {
    let json = r#"{
        "productType": "Kelas Online",
        "targetAudience": "Ibu rumah tangga",
        "problemList": "Tidak punya waktu\n\nBingung mulai",
        "titleStyle": "listicle",
        "tone": "santai",
        "titleCount": "10",
        "charLimit": "60",
        "benefitAngles": ["Curiosity", "Urgency"]
    }"#;
    let rec: ParameterRecord = serde_json::from_str(json).unwrap();
    let mut session = Session::new(Template::for_locale(Locale::Id));
    session.apply_all(FieldChange::from_record(rec));

    let text = session.trigger_assemble().unwrap();
    assert!(text.contains("Gaya Judul (Style): Listicle"));
    assert!(text.contains("Nada Suara (Tone): Santai"));
    assert!(text.contains("1. Tidak punya waktu\n2. Bingung mulai"));
    assert!(text.contains("Curiosity, Urgency"));
    assert!(text.contains("60"));
}
