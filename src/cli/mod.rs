// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the seqkit command-line interface.
//!
//! Two subcommands: `run` builds a sequence and replays a script of
//! operations against it, printing what each step did to the receiver and
//! what it returned. `demo` walks through aliasing, copying and
//! copy-on-write on fixed inputs.

pub mod display;
pub mod script;

use clap::{Parser, Subcommand, ValueEnum};
use seqkit::{BackingKind, ElementKind};

#[derive(Parser)]
#[command(
    name = "seqkit",
    about = "Array- and list-backed sequences, mutable or copy-on-write",
    version
)]
pub struct Cli {
    /// Print verbose diagnostics (same as SEQKIT_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a sequence and apply a script of operations to it
    Run {
        /// Storage strategy
        #[arg(short, long, value_enum, default_value = "array")]
        backing: BackingArg,

        /// Copy-on-write: structural operations return new sequences
        #[arg(long)]
        immutable: bool,

        /// Element type
        #[arg(short, long, value_enum, default_value = "int")]
        element: ElementArg,

        /// Initial elements, comma separated
        #[arg(long, default_value = "")]
        values: String,

        /// Operation to apply, in order. Repeatable.
        ///
        /// One of: push-back V, push-front V, insert V I, delete I, slice A B,
        /// combine <array|list> A,B,C, at I, front, back, reference, copy.
        #[arg(long = "op")]
        ops: Vec<String>,

        /// Slots allocated up front by array backings
        #[arg(long, allow_negative_numbers = true)]
        initial_capacity: Option<i64>,

        /// Capacity multiplier (2 to 16) when an array backing runs out of room
        #[arg(long, allow_negative_numbers = true)]
        growth_factor: Option<i64>,

        /// Emit the report as JSON instead of boxes
        #[arg(long)]
        json: bool,
    },

    /// Show how reference, copy and copy-on-write differ
    Demo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackingArg {
    Array,
    List,
}

impl From<BackingArg> for BackingKind {
    fn from(arg: BackingArg) -> Self {
        match arg {
            BackingArg::Array => BackingKind::Array,
            BackingArg::List => BackingKind::List,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ElementArg {
    Int,
    Float,
    Text,
}

impl From<ElementArg> for ElementKind {
    fn from(arg: ElementArg) -> Self {
        match arg {
            ElementArg::Int => ElementKind::Int,
            ElementArg::Float => ElementKind::Float,
            ElementArg::Text => ElementKind::Text,
        }
    }
}
