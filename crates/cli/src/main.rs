mod config;
mod pretty;

use config::Config;

use std::io::{self, IsTerminal, Read};

use chrono::Local;
use clap::Parser;
use colored::{control::set_override, Colorize};
use dstamp_core::{Dstamp, SuggestConfig, TimestampStyle};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

const LONG_ABOUT: &str = r##"
dstamp turns natural-language time expressions into Discord timestamps.

Type when you mean, get the <t:epoch:code> markup for every style Discord
renders, with a preview of what each one will look like in chat.

SUPPORTED EXPRESSIONS:
  Times:        5:45am, 15:00, 15:00:30, 9pm, noon, midnight
  Words:        now, today, tomorrow, yesterday
  Offsets:      in 5 minutes, 3 weeks ago, an hour from now
  Weekdays:     friday, next monday, last tuesday
  Periods:      next week, last month, next year
  Dates:        dec 15, 15 dec, march 15th
  Combined:     tomorrow noon, next friday 8pm, dec 24 18:00

STYLES:
  Each result carries one of Discord's seven style codes:
    R  Relative                        in 5 minutes
    t  Short time                      5:45 PM
    T  Long time                       5:45:30 PM
    d  Short date                      8/6/2026
    D  Long date                       August 6, 2026
    f  Long date with short time       August 6, 2026 5:45 PM
    F  Long date with day of the week  Wednesday, August 6, 2026 5:45 PM

EXAMPLES:
  dstamp "in 5 minutes"          All seven styles with previews
  dstamp tomorrow noon           Multi-word queries need no quoting
  dstamp -s R "in 1 hour"        Only the relative style
  dstamp -r -s f "dec 24 6pm"    Just the markup, for scripting
  dstamp --json 5:45am           JSON output

PIPED INPUT:
  echo "next friday 8pm" | dstamp

OUTPUT:
  A header shows what the query resolved to, then one row per style:
  label, chat preview, and the copyable <t:...> markup.
  Use -r to print only the markup strings, one per line.

CONFIGURATION:
  Settings can be configured via CLI flags, environment variables, or config file.
  Precedence: CLI args > Environment vars > Config file > Defaults

  Setting      | CLI flag        | Env var           | Default
  -------------|-----------------|-------------------|---------
  precision    | -p, --precision | DSTAMP_PRECISION  | 0.85
  no_color     | -C, --no-color  | DSTAMP_NO_COLOR   | false

  Config file location: dstamp --config-path
  Generate default config: dstamp --config-init

  Note: NO_COLOR env var is also respected (https://no-color.org/)"##;

#[derive(Parser)]
#[command(name = "dstamp")]
#[command(version)]
#[command(about = "Turn natural-language time expressions into Discord timestamps")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = "For more information, visit: https://github.com/mjukis-ab/dstamp")]
struct Cli {
    /// The time expression to interpret
    ///
    /// e.g. "5:45am", "in 5 minutes", "tomorrow noon", "next friday 8pm".
    /// Multiple words are joined, so quoting is optional.
    #[arg(value_name = "QUERY")]
    query: Vec<String>,

    /// Output suggestions as JSON (for scripting/piping)
    #[arg(long, short = 'j')]
    json: bool,

    /// Output only the markup strings, one per line
    ///
    /// Combine with --style to get a single payload for shell substitution.
    #[arg(long, short = 'r')]
    raw: bool,

    /// Only show one style (code letter or name)
    ///
    /// Codes are case-sensitive: t is short time, T long time.
    /// Examples: -s R  or  -s "short date"
    #[arg(long, short = 's', value_name = "STYLE")]
    style: Option<String>,

    /// List Discord's timestamp styles and their codes
    #[arg(long)]
    styles: bool,

    /// Rounding threshold for the relative preview (0.0-1.0)
    ///
    /// Higher values round up later. The default 0.85 keeps a moment parsed
    /// from "in 5 minutes" reading "in 5 minutes" rather than "in 4 minutes".
    #[arg(long, short = 'p', value_name = "THRESHOLD")]
    precision: Option<f64>,

    /// Disable colored output
    #[arg(long, short = 'C')]
    no_color: bool,

    /// Enable verbose logging (use multiple times for more detail)
    ///
    /// -v shows debug messages, -vv shows trace messages.
    /// Useful for understanding why something was or wasn't matched.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show config file path
    #[arg(long)]
    config_path: bool,

    /// Generate default config file (see --config-path for location)
    #[arg(long)]
    config_init: bool,
}

fn print_styles() {
    println!("{}", "Discord Timestamp Styles".bold().underline());
    println!();

    let examples = [
        "in 5 minutes",
        "5:45 PM",
        "5:45:30 PM",
        "8/6/2026",
        "August 6, 2026",
        "August 6, 2026 5:45 PM",
        "Wednesday, August 6, 2026 5:45 PM",
    ];

    for (style, example) in TimestampStyle::ALL.iter().zip(examples) {
        // Pad before coloring: ANSI escapes would throw off the width.
        println!(
            "  {} {}  {:<31} {}",
            "→".cyan(),
            style.code().to_string().yellow(),
            style.label(),
            format!("e.g. {}", example).dimmed()
        );
    }
    println!();
    println!(
        "Paste the markup into Discord and it renders in each reader's own \
         locale and time zone."
    );
}

fn main() {
    let cli = Cli::parse();

    // Handle --config-path
    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!(
                    "{}: Cannot determine config directory",
                    "error".red().bold()
                );
                std::process::exit(1);
            }
        }
        return;
    }

    // Handle --config-init
    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.styles {
        print_styles();
        return;
    }

    // Initialize tracing based on verbosity level (before config loading for logging)
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    // Load config file and merge with CLI args
    // Precedence: CLI args > Environment vars > Config file > Defaults
    let file_config = Config::load();

    if let Some(path) = Config::path() {
        if path.exists() {
            tracing::debug!("Loaded config from: {}", path.display());
        } else {
            tracing::trace!("No config file at: {}", path.display());
        }
    }

    let precision = if let Some(p) = cli.precision {
        tracing::debug!("precision = {} (from CLI)", p);
        p
    } else {
        let p = file_config.precision();
        let source = if std::env::var("DSTAMP_PRECISION").is_ok() {
            "env DSTAMP_PRECISION"
        } else if file_config.precision.is_some() {
            "config file"
        } else {
            "default"
        };
        tracing::debug!("precision = {} (from {})", p, source);
        p
    };

    if !(precision > 0.0 && precision <= 1.0) {
        eprintln!(
            "{}: precision must be within (0.0, 1.0], got {}",
            "error".red().bold(),
            precision
        );
        std::process::exit(1);
    }

    let no_color = if cli.no_color {
        tracing::debug!("no_color = true (from CLI)");
        true
    } else {
        let nc = file_config.no_color();
        if nc {
            let source = if std::env::var("NO_COLOR").is_ok() {
                "env NO_COLOR"
            } else if std::env::var("DSTAMP_NO_COLOR").is_ok() {
                "env DSTAMP_NO_COLOR"
            } else {
                "config file"
            };
            tracing::debug!("no_color = true (from {})", source);
        }
        nc
    };

    if no_color {
        set_override(false);
    }

    // Validate the style filter early
    let style_filter: Option<TimestampStyle> = match cli.style.as_deref() {
        Some(name) => match name.parse() {
            Ok(style) => Some(style),
            Err(_) => {
                eprintln!(
                    "{}: Unknown style '{}'. Use {} to see available styles.",
                    "error".red().bold(),
                    name.yellow(),
                    "--styles".bold()
                );
                std::process::exit(1);
            }
        },
        None => None,
    };

    // Take the query from arguments, or from piped stdin
    let stdin_is_pipe = !io::stdin().is_terminal();
    let input = if !cli.query.is_empty() {
        cli.query.join(" ")
    } else if stdin_is_pipe {
        let mut buffer = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buffer) {
            eprintln!("{}: Failed to read stdin: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
        buffer.trim().to_string()
    } else {
        eprintln!("{}: No query provided", "error".red().bold());
        eprintln!();
        eprintln!("Usage: {} <QUERY>", "dstamp".bold());
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  dstamp \"in 5 minutes\"      Relative timestamp");
        eprintln!("  dstamp tomorrow noon       Absolute timestamp");
        eprintln!("  dstamp 5:45am              Time on today's date");
        eprintln!("  echo \"next friday\" | dstamp   Pipe a query");
        eprintln!();
        eprintln!("Run {} for more information.", "dstamp --help".bold());
        std::process::exit(1);
    };

    let dstamp = Dstamp::with_config(SuggestConfig {
        humanize_precision: precision,
    });
    let anchor = Local::now();

    let mut suggestions = dstamp.suggest_at(&input, anchor);
    if let Some(style) = style_filter {
        suggestions.retain(|s| s.label == style.label());
    }

    if suggestions.is_empty() {
        if cli.raw {
            // Silent failure for raw mode
            std::process::exit(1);
        }
        eprintln!(
            "{}: Could not interpret '{}' as a time expression",
            "error".red().bold(),
            input.yellow()
        );
        eprintln!(
            "Try something like {}, {} or {}.",
            "\"5:45am\"".green(),
            "\"in 5 minutes\"".green(),
            "\"tomorrow noon\"".green()
        );
        std::process::exit(1);
    }

    if cli.json {
        match serde_json::to_string_pretty(&suggestions) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}: Failed to serialize output: {}", "error".red().bold(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.raw {
        for s in &suggestions {
            println!("{}", s.markup);
        }
        return;
    }

    let description = dstamp
        .resolve_at(&input, anchor)
        .map(|m| m.description)
        .unwrap_or_else(|| input.clone());
    pretty::print_suggestions(&description, &suggestions);
}
