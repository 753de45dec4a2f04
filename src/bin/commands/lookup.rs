use clap::Args;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use whatsip::lens::present::{REQUEST_FAILED, REQUEST_TIMED_OUT};
use whatsip::{
    ExportLens, FieldSelection, IpLens, IpLookupArgs, LookupError, Palette, Presenter, Record,
    Theme, WhatsipConfig,
};

/// Arguments for the lookup
#[derive(Args)]
pub struct LookupArgs {
    /// IP address(es) to look up. Your own by default.
    #[clap(value_name = "IP")]
    pub ips: Vec<String>,

    /// Comma-separated list of fields to display (e.g., "city,isp,lat,lon")
    #[clap(short, long, conflicts_with = "all")]
    pub fields: Option<String>,

    /// Display all available fields from the API
    #[clap(short, long)]
    pub all: bool,

    /// Save output to a file (e.g., output.json, output.md). Format is detected from extension.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Theme to use instead of the configured one
    #[clap(short, long)]
    pub theme: Option<String>,

    /// Disable colored output
    #[clap(long)]
    pub no_color: bool,
}

impl LookupArgs {
    fn selection(&self) -> FieldSelection {
        if self.all {
            return FieldSelection::All;
        }
        self.fields
            .as_deref()
            .map(FieldSelection::parse)
            .unwrap_or_default()
    }

    fn color_enabled(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
    }
}

pub fn run(config: &WhatsipConfig, args: LookupArgs) {
    let selection = args.selection();
    let catalog = config.catalog();
    let theme = args
        .theme
        .as_deref()
        .map(Theme::from_name)
        .unwrap_or_else(|| config.theme());
    let palette = Palette::new(&config.style, args.color_enabled());
    let presenter = Presenter::new(&catalog, theme, palette);
    let lens = IpLens::from_config(config);

    let requested = selection.requested_fields(catalog.default_fields(), catalog.all_known_fields());
    let targets: Vec<Option<String>> = if args.ips.is_empty() {
        vec![None]
    } else {
        args.ips.iter().cloned().map(Some).collect()
    };
    debug!("theme {}, {} lookup(s)", theme, targets.len());

    let mut stdout = io::stdout();
    let mut results: Vec<Record> = Vec::new();

    for (idx, ip) in targets.into_iter().enumerate() {
        let lookup_args = IpLookupArgs {
            ip,
            fields: requested.clone(),
        };

        let mut written = if idx > 0 { writeln!(stdout) } else { Ok(()) };
        if written.is_ok() {
            written = match lens.lookup(&lookup_args) {
                Ok(record) => {
                    let res = presenter.present(&mut stdout, &record, &selection);
                    if record.is_success() {
                        results.push(record);
                    }
                    res
                }
                Err(LookupError::Timeout) => presenter.present_error(
                    &mut stdout,
                    REQUEST_TIMED_OUT,
                    &LookupError::Timeout.to_string(),
                ),
                Err(e) => {
                    presenter.present_error(&mut stdout, REQUEST_FAILED, &format!("Error: {}", e))
                }
            };
        }

        if let Err(e) = written {
            if e.kind() != io::ErrorKind::BrokenPipe {
                eprintln!("{e}");
            }
            std::process::exit(1);
        }
    }

    let Some(output) = args.output else {
        return;
    };
    if results.is_empty() {
        eprintln!("Nothing to save: no lookup succeeded.");
        return;
    }

    match ExportLens::new(&catalog).export(&results, &output, &selection) {
        Ok(()) => {
            let path = output.display().to_string();
            if palette.is_enabled() {
                println!("Output saved to {}", path.green());
            } else {
                println!("Output saved to {}", path);
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
