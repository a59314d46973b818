//! CLI argument definitions for kirizma.

use clap::{Parser, Subcommand};
use kirizma_core::{ChartSlot, KirizmaMode};

#[derive(Parser)]
#[command(name = "kirizma")]
#[command(about = "Rewrite DOS chart timings into lyric-driven lanes", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a chart slot into key lanes following a lyric
    Convert(ConvertArgs),
    /// List the output lanes of a mode
    Lanes {
        /// Lane layout (romaji or kana)
        #[arg(long, short, value_name = "MODE", default_value = "romaji")]
        mode: KirizmaMode,
    },
}

#[derive(clap::Args)]
pub struct ConvertArgs {
    /// DOS chart file (defaults to stdin)
    #[arg(long, short, value_name = "FILE")]
    pub chart: Option<String>,

    /// Lyric in hiragana or Latin letters; `ー` marks a freeze
    #[arg(long, short, required_unless_present = "kana_file")]
    pub kana: Option<String>,

    /// Read the lyric from a file
    #[arg(long, value_name = "FILE", conflicts_with = "kana")]
    pub kana_file: Option<String>,

    /// TOML config file; flags below override it
    #[arg(long, value_name = "FILE", env = "KIRIZMA_CONFIG")]
    pub config: Option<String>,

    /// Lane layout (romaji or kana)
    #[arg(long, short, value_name = "MODE")]
    pub mode: Option<KirizmaMode>,

    /// Input chart slot (0 = no suffix)
    #[arg(long, value_name = "N")]
    pub in_slot: Option<ChartSlot>,

    /// Output chart slot (0 = no suffix)
    #[arg(long, value_name = "N")]
    pub out_slot: Option<ChartSlot>,

    /// Keep space/frzSpace unchanged
    #[arg(long)]
    pub keep_onigiri: bool,

    /// Keep left/down/up/right and their freezes unchanged
    #[arg(long)]
    pub keep_4key: bool,

    /// Take the kept 4-key lanes from sleft/sdown/sup/sright
    #[arg(long)]
    pub use_sleft: bool,

    /// じ → J
    #[arg(long)]
    pub j_for_zi: bool,

    /// ち → C
    #[arg(long)]
    pub c_for_chi: bool,

    /// ふ → F
    #[arg(long)]
    pub f_for_fu: bool,

    /// ら..ろ → L
    #[arg(long)]
    pub l_for_ra: bool,

    /// ん → X
    #[arg(long)]
    pub x_for_n: bool,

    /// Extra non-timing field name to ignore (repeatable)
    #[arg(long, value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "dos")]
    pub format: OutputFormat,

    /// Output file path (defaults to stdout)
    #[arg(long, short)]
    pub output: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Chart text
    Dos,
    /// Chart text plus timeline and lane assignment
    Json,
}
