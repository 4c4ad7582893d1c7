use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use headline_prompt::cli::Args;
use headline_prompt::config::{self, Config};
use headline_prompt::errors::GenerationError;
use headline_prompt::form::FieldChange;
use headline_prompt::generate::Generator;
use headline_prompt::prompt::Template;
use headline_prompt::session::Session;
use headline_prompt::wire::ParameterRecord;
use headline_prompt::{log, provider, ux};

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut cfg = match &args.config {
        Some(p) => Config::load(Path::new(p))?,
        None => Config::default(),
    };
    if let Some(p) = args.provider {
        cfg.provider = p;
    }
    if let Some(m) = &args.model {
        cfg.model = m.clone();
    }
    if let Some(t) = args.timeout_secs {
        cfg.timeout_secs = t;
    }
    if let Some(l) = args.locale {
        cfg.locale = l;
    }
    Ok(cfg)
}

/// The form as the user filled it: params file first, flags on top.
fn load_params(args: &Args) -> anyhow::Result<ParameterRecord> {
    let mut rec = match &args.params {
        Some(p) => config::load_params(Path::new(p))?,
        None => ParameterRecord::default(),
    };

    let set = |slot: &mut String, flag: &Option<String>| {
        if let Some(v) = flag {
            *slot = v.clone();
        }
    };
    set(&mut rec.product_type, &args.product_type);
    set(&mut rec.target_audience, &args.audience);
    set(&mut rec.title_style, &args.title_style);
    set(&mut rec.tone, &args.tone);
    set(&mut rec.title_count, &args.title_count);
    set(&mut rec.char_limit, &args.char_limit);
    set(&mut rec.forbidden_words, &args.forbidden_words);
    if !args.pain_points.is_empty() {
        rec.pain_points = args.pain_points.join("\n");
    }
    if !args.angles.is_empty() {
        rec.benefit_angles = args.angles.clone();
    }
    Ok(rec)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    log::init(args.debug);

    if args.catalog {
        ux::print_catalog();
        return Ok(ExitCode::SUCCESS);
    }

    let cfg = load_config(&args)?;
    let template = Template::for_locale(cfg.locale);

    let mut session = Session::new(template);
    let signal = session.apply_all(FieldChange::from_record(load_params(&args)?));
    if !signal.trigger_enabled {
        ux::print_incomplete(template, &session.form().missing_fields());
        return Ok(ExitCode::from(2));
    }

    if !args.generate {
        if let Some(text) = session.trigger_assemble() {
            ux::print_result(&text)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let generator = Generator::new(provider::make_provider(&cfg)?, template, cfg.temperature);
    if args.debug {
        if let Some(rec) = session.form().capture() {
            log::print_json_debug("generate", &generator.request_for(&rec))?;
        }
    }

    let Some(task) = session.trigger_generation(&generator) else {
        return Ok(ExitCode::FAILURE);
    };

    // Ctrl-C cancels the in-flight call instead of killing the process
    let cancel = task.canceller();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let pb = ux::spinner("generating prompt…");
    let res = session.settle(task).await;
    pb.finish_and_clear();
    watcher.abort();

    match res {
        Ok(text) => {
            ux::print_result(&text)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(GenerationError::Cancelled) => {
            eprintln!("cancelled");
            Ok(ExitCode::from(130))
        }
        Err(GenerationError::Failed) => {
            ux::print_failure(template);
            Ok(ExitCode::FAILURE)
        }
    }
}
