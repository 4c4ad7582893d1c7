use crate::cli::Locale;
use crate::wire::{Instruction, ParameterRecord};

/// Wording for one output language. Every variant of the prompt goes through
/// the same assembly code; only these strings differ.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    role: &'static str,
    product_heading: &'static str,
    product_type_label: &'static str,
    audience_label: &'static str,
    pain_points_label: &'static str,
    task_heading: &'static str,
    task_line: fn(&str) -> String,
    style_label: &'static str,
    tone_label: &'static str,
    count_label: &'static str,
    angles_heading: &'static str,
    angles_line: fn(&str) -> String,
    default_angles: &'static str,
    rules_heading: &'static str,
    fixed_rules: &'static [&'static str],
    char_limit_rule: fn(&str) -> String,
    forbidden_rule: fn(&str) -> String,
    format_heading: &'static str,
    format_lines: &'static [&'static str],
    closing: &'static str,
    generation_system: &'static str,
    generation_intro: &'static str,
    pub failure_notice: &'static str,
    pub incomplete_notice: &'static str,
}

impl Template {
    pub fn for_locale(locale: Locale) -> &'static Template {
        match locale {
            Locale::Id => &INDONESIAN,
            Locale::En => &ENGLISH,
        }
    }
}

fn id_task_line(count: &str) -> String {
    format!("Buatlah {count} variasi judul yang sangat menarik (scroll-stopping) berdasarkan spesifikasi berikut.")
}

fn id_angles_line(clause: &str) -> String {
    format!("Fokuskan pada {clause}. Utamakan sudut yang disebut lebih dulu.")
}

fn id_char_limit_rule(limit: &str) -> String {
    format!("Batas Karakter: Usahakan panjang judul maksimal sekitar {limit} (atau ringkas agar tidak terpotong).")
}

fn id_forbidden_rule(words: &str) -> String {
    format!("Larangan Kata: JANGAN gunakan kata-kata berikut: {words}.")
}

fn en_task_line(count: &str) -> String {
    format!("Write {count} highly engaging (scroll-stopping) headline variations that follow these specifications.")
}

fn en_angles_line(clause: &str) -> String {
    format!("Focus on {clause}. Give priority to the angles listed first.")
}

fn en_char_limit_rule(limit: &str) -> String {
    format!("Character Limit: Keep each headline to roughly {limit} at most (or short enough not to be cut off).")
}

fn en_forbidden_rule(words: &str) -> String {
    format!("Forbidden Words: Do NOT use any of these words: {words}.")
}

static INDONESIAN: Template = Template {
    role: r#"Bertindaklah sebagai Copywriter Kelas Dunia dengan spesialisasi dalam "High-Converting Headlines" dan Psikologi Persuasi.

Saya ingin Anda menulis kumpulan judul yang powerful, viral, dan menjual untuk produk digital saya."#,
    product_heading: "INFORMASI PRODUK:",
    product_type_label: "Jenis Produk",
    audience_label: "Target Audiens",
    pain_points_label: "Masalah Utama (Pain Points) yang diselesaikan",
    task_heading: "TUGAS ANDA:",
    task_line: id_task_line,
    style_label: "Gaya Judul (Style)",
    tone_label: "Nada Suara (Tone)",
    count_label: "Jumlah Judul",
    angles_heading: "SUDUT PANDANG MANFAAT (ANGLES):",
    angles_line: id_angles_line,
    default_angles: "Manfaat Utama Produk",
    rules_heading: "ATURAN & BATASAN:",
    fixed_rules: &[
        "Judul harus memicu rasa ingin tahu atau menawarkan solusi instan.",
        r#"Gunakan "Power Words" yang menggugah emosi."#,
        "Hindari bahasa yang kaku, robotik, atau terlalu formal. Gunakan bahasa yang mengalir alami.",
    ],
    char_limit_rule: id_char_limit_rule,
    forbidden_rule: id_forbidden_rule,
    format_heading: "FORMAT OUTPUT:",
    format_lines: &[
        "Mohon sajikan hasilnya dalam bentuk daftar (bullet points).",
        "Di sebelah setiap judul, berikan penjelasan singkat dalam kurung tentang prinsip psikologis yang digunakan (contoh: FOMO, Curiosity Gap, Promise of Value).",
    ],
    closing: "Silakan mulai.",
    generation_system: "Anda adalah Prompt Engineer senior untuk copywriting pemasaran. Tugas Anda menulis satu prompt yang lengkap dan terstruktur untuk ChatGPT agar menghasilkan judul produk yang menjual. Tulis hanya teks prompt tersebut dalam Bahasa Indonesia, tanpa pembuka, tanpa penjelasan tambahan, dan tanpa blok kode.",
    generation_intro: "Susun prompt ChatGPT untuk membuat judul berdasarkan data berikut:",
    failure_notice: "Gagal membuat prompt. Silakan coba lagi.",
    incomplete_notice: "Lengkapi semua kolom wajib untuk membuat prompt.",
};

static ENGLISH: Template = Template {
    role: r#"Act as a world-class copywriter who specializes in "High-Converting Headlines" and the psychology of persuasion.

I want you to write a set of powerful, viral, selling headlines for my digital product."#,
    product_heading: "PRODUCT INFORMATION:",
    product_type_label: "Product Type",
    audience_label: "Target Audience",
    pain_points_label: "Main Problems (Pain Points) it solves",
    task_heading: "YOUR TASK:",
    task_line: en_task_line,
    style_label: "Headline Style",
    tone_label: "Tone of Voice",
    count_label: "Number of Headlines",
    angles_heading: "BENEFIT ANGLES:",
    angles_line: en_angles_line,
    default_angles: "the product's main benefit",
    rules_heading: "RULES & CONSTRAINTS:",
    fixed_rules: &[
        "Every headline must spark curiosity or promise an immediate solution.",
        r#"Use emotionally charged "Power Words"."#,
        "Avoid stiff, robotic or overly formal language. Keep it flowing and natural.",
    ],
    char_limit_rule: en_char_limit_rule,
    forbidden_rule: en_forbidden_rule,
    format_heading: "OUTPUT FORMAT:",
    format_lines: &[
        "Present the results as a list (bullet points).",
        "Next to each headline, add a short explanation in parentheses naming the psychological principle used (e.g. FOMO, Curiosity Gap, Promise of Value).",
    ],
    closing: "Please begin.",
    generation_system: "You are a senior prompt engineer for marketing copywriting. Your job is to write one complete, well-structured prompt for ChatGPT that makes it produce selling product headlines. Write only the prompt text in English, with no preamble, no extra explanation and no code fences.",
    generation_intro: "Compose a ChatGPT headline-writing prompt from the following data:",
    failure_notice: "Failed to generate the prompt. Please try again.",
    incomplete_notice: "Fill in every required field to build the prompt.",
};

/// Blank lines are dropped and the survivors renumbered from 1, so the list
/// never has gaps.
pub fn number_pain_points(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(i, l)| format!("{}. {}", i + 1, l))
        .collect()
}

pub fn angle_clause(angles: &[String], tpl: &Template) -> String {
    if angles.is_empty() {
        return tpl.default_angles.to_string();
    }
    angles.join(", ")
}

/// Optional constraint lines, in fixed order. Whitespace-only values count as
/// empty; non-empty values are echoed as given.
pub fn constraint_lines(rec: &ParameterRecord, tpl: &Template) -> Vec<String> {
    let mut lines = Vec::new();
    if !rec.char_limit.trim().is_empty() {
        lines.push((tpl.char_limit_rule)(&rec.char_limit));
    }
    if !rec.forbidden_words.trim().is_empty() {
        lines.push((tpl.forbidden_rule)(&rec.forbidden_words));
    }
    lines
}

fn bullets<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut s = String::new();
    for item in items {
        s.push_str("- ");
        s.push_str(item.as_ref());
        s.push('\n');
    }
    s
}

/// Build the ChatGPT instruction text for one snapshot.
///
/// Total over every record: required fields are assumed non-empty and are not
/// re-checked here.
pub fn assemble(rec: &ParameterRecord, tpl: &Template) -> String {
    let pain_points = number_pain_points(&rec.pain_points).join("\n");
    let rules = bullets(
        tpl.fixed_rules
            .iter()
            .map(|r| r.to_string())
            .chain(constraint_lines(rec, tpl)),
    );

    format!(
"{role}

{product_heading}
- {product_type_label}: {product_type}
- {audience_label}: {audience}
- {pain_points_label}:
{pain_points}

{task_heading}
{task_line}
1. {style_label}: {style}
2. {tone_label}: {tone}

{angles_heading}
{angles_line}

{rules_heading}
{rules}
{format_heading}
{format_lines}

{closing}",
        role = tpl.role,
        product_heading = tpl.product_heading,
        product_type_label = tpl.product_type_label,
        product_type = rec.product_type,
        audience_label = tpl.audience_label,
        audience = rec.target_audience,
        pain_points_label = tpl.pain_points_label,
        pain_points = pain_points,
        task_heading = tpl.task_heading,
        task_line = (tpl.task_line)(&rec.title_count),
        style_label = tpl.style_label,
        style = rec.title_style,
        tone_label = tpl.tone_label,
        tone = rec.tone,
        angles_heading = tpl.angles_heading,
        angles_line = (tpl.angles_line)(&angle_clause(&rec.benefit_angles, tpl)),
        rules_heading = tpl.rules_heading,
        rules = rules,
        format_heading = tpl.format_heading,
        format_lines = tpl.format_lines.join("\n"),
        closing = tpl.closing,
    )
}

/// Payload for the remote-generation variant: the model writes the prompt
/// itself from the same normalized fields the local engine uses.
pub fn generation_instruction(rec: &ParameterRecord, tpl: &Template) -> Instruction {
    let pain_points = number_pain_points(&rec.pain_points).join("\n");
    let mut user = format!(
"{intro}
- {product_type_label}: {product_type}
- {audience_label}: {audience}
- {pain_points_label}:
{pain_points}
- {style_label}: {style}
- {tone_label}: {tone}
- {count_label}: {count}
- {angles_heading} {angles}
",
        intro = tpl.generation_intro,
        product_type_label = tpl.product_type_label,
        product_type = rec.product_type,
        audience_label = tpl.audience_label,
        audience = rec.target_audience,
        pain_points_label = tpl.pain_points_label,
        pain_points = pain_points,
        style_label = tpl.style_label,
        style = rec.title_style,
        tone_label = tpl.tone_label,
        tone = rec.tone,
        count_label = tpl.count_label,
        count = rec.title_count,
        angles_heading = tpl.angles_heading,
        angles = angle_clause(&rec.benefit_angles, tpl),
    );
    user.push_str(&bullets(constraint_lines(rec, tpl)));

    Instruction {
        system: tpl.generation_system.to_string(),
        user,
    }
}
