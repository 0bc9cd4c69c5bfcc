// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seqkit::{
    AnySequence, AnyValue, BackingKind, ElementKind, GrowthPolicy, Mutability, Sequence,
    SequenceError,
};

mod cli;
use cli::display::{self, alias_label, error_line, field, items, kind_badge};
use cli::script::{self, parse_size, split_values, Op, Report};
use cli::{BackingArg, Cli, Commands, ElementArg};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Run {
            backing,
            immutable,
            element,
            values,
            ops,
            initial_capacity,
            growth_factor,
            json,
        } => run(RunArgs {
            backing,
            immutable,
            element,
            values,
            ops,
            initial_capacity,
            growth_factor,
            json,
        }),
        Commands::Demo => {
            demo();
            Ok(())
        }
    };

    if let Err(err) = outcome {
        eprintln!("{}", error_line(&format!("{} (code {})", err, err.code().code())));
        std::process::exit(1);
    }
}

/// Subscriber on stderr, filtered by `SEQKIT_LOG` (default `warn`).
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("SEQKIT_LOG")
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

struct RunArgs {
    backing: BackingArg,
    immutable: bool,
    element: ElementArg,
    values: String,
    ops: Vec<String>,
    initial_capacity: Option<i64>,
    growth_factor: Option<i64>,
    json: bool,
}

impl RunArgs {
    fn mutability(&self) -> Mutability {
        if self.immutable {
            Mutability::Immutable
        } else {
            Mutability::Mutable
        }
    }

    /// Growth policy from the flags, or `None` when neither was given.
    fn policy(&self) -> seqkit::Result<Option<GrowthPolicy>> {
        if self.initial_capacity.is_none() && self.growth_factor.is_none() {
            return Ok(None);
        }
        let initial = match self.initial_capacity {
            Some(raw) => parse_size(raw)?,
            None => GrowthPolicy::DEFAULT_INITIAL_CAPACITY,
        };
        let factor = match self.growth_factor {
            Some(raw) => usize::try_from(raw).map_err(|_| {
                SequenceError::InvalidArgument(format!("growth factor {} is negative", raw))
            })?,
            None => GrowthPolicy::DEFAULT_FACTOR,
        };
        GrowthPolicy::new(initial, factor).map(Some)
    }
}

fn run(args: RunArgs) -> seqkit::Result<()> {
    let backing = BackingKind::from(args.backing);
    let element = ElementKind::from(args.element);
    let mutability = args.mutability();

    let values = split_values(&args.values)
        .iter()
        .map(|raw| AnyValue::parse(element, raw))
        .collect::<seqkit::Result<Vec<_>>>()?;

    let seq = match (args.policy()?, backing) {
        (Some(policy), BackingKind::Array) => {
            AnySequence::array_with_policy(element, policy, mutability, &values)?
        }
        (Some(_), BackingKind::List) => {
            warn!("growth policy flags have no effect on list backings");
            AnySequence::from_values(element, backing, mutability, &values)?
        }
        (None, _) => AnySequence::from_values(element, backing, mutability, &values)?,
    };

    let ops = args
        .ops
        .iter()
        .map(|text| text.parse::<Op>().map(|op| (text.clone(), op)))
        .collect::<seqkit::Result<Vec<_>>>()?;

    let report = script::execute(seq, &ops)?;

    if args.json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| SequenceError::InvalidArgument(format!("cannot encode report: {}", e)))?;
        println!("{}", out);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn render(values: &[AnyValue]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn print_report(report: &Report) {
    display::double_header();
    display::title(&format!("seqkit run  {}", kind_badge(report.kind)));
    display::double_footer();

    display::section_top("INPUT");
    field("element", &report.element.to_string());
    field("items", &items(&render(&report.initial)));

    for (i, step) in report.steps.iter().enumerate() {
        display::section_mid(&format!("STEP {}: {}", i + 1, step.op));
        field("receiver", &items(&render(&step.receiver)));
        if let Some(returned) = &step.returned {
            field("returned", &items(&render(returned)));
            field("handle", &alias_label(step.aliased));
        }
        if let Some(value) = &step.value {
            field("value", &value.to_string());
        }
    }

    display::section_mid("RESULT");
    field("items", &items(&render(&report.final_items)));
    field("size", &report.final_items.len().to_string());
    if let Some(capacity) = report.capacity {
        field("capacity", &capacity.to_string());
    }
    display::section_bot();
}

/// Aliasing, copying and copy-on-write side by side.
fn demo() {
    display::double_header();
    display::title("seqkit demo");
    display::double_footer();

    let a = Sequence::from_slice(BackingKind::Array, Mutability::Mutable, &[1, 2, 3]);
    let b = a.reference();
    let c = a.copy();
    display::section_top("MUTABLE: reference vs copy");
    field("a", &items(&a.to_string()));
    display::row("   b = a.reference()   c = a.copy()   a.add_to_end(4)");
    if let Err(err) = a.add_to_end(4) {
        field("error", &err.to_string());
    }
    field("a", &items(&a.to_string()));
    field("b", &format!("{}  {}", items(&b.to_string()), alias_label(b.is_alias_of(&a))));
    field("c", &format!("{}  {}", items(&c.to_string()), alias_label(c.is_alias_of(&a))));

    let x = Sequence::from_slice(BackingKind::List, Mutability::Immutable, &[1, 2, 3]);
    display::section_mid("IMMUTABLE: copy-on-write");
    display::row("   y = x.add_to_end(4)   z = y.delete(0)");
    match x.add_to_end(4).and_then(|y| y.delete(0).map(|z| (y, z))) {
        Ok((y, z)) => {
            field("x", &items(&x.to_string()));
            field("y", &items(&y.to_string()));
            field("z", &items(&z.to_string()));
        }
        Err(err) => field("error", &err.to_string()),
    }

    let list = Sequence::from_slice(BackingKind::List, Mutability::Mutable, &[4, 5]);
    display::section_mid("COMBINE across backings");
    display::row("   a.combine(list)");
    match a.combine(&list) {
        Ok(joined) => field("joined", &items(&joined.to_string())),
        Err(err) => field("error", &err.to_string()),
    }
    display::section_bot();
}
