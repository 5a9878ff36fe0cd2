use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "glidewax",
    version,
    about = "glide-wax catalog to HTML table renderer",
    long_about = "glidewax reads a glide-wax product catalog and writes a single self-contained HTML page with search, brand filter and sortable columns.\n\nExamples:\n  glidewax\n  glidewax -i data/glide_wax.yml -o public/index.html\n  glidewax --config ./glidewax.yml\n\nWith no arguments it reads ./glide_wax.json and writes ./index.html."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase diagnostic verbosity on stderr (-v, -vv, -vvv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'i',
        long = "in",
        visible_alias = "input",
        value_name = "FILE",
        help_heading = "Input",
        help = "Catalog file to read (.json, .yml or .yaml)."
    )]
    pub input: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to a YAML config file."
    )]
    pub config: Option<String>,

    #[arg(
        long = "ic",
        visible_alias = "init-config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Write a commented default config file and exit."
    )]
    pub init_config: Option<String>,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "HTML file to write."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'l',
        long = "cl",
        visible_alias = "comment-locale",
        value_name = "LOCALE",
        help_heading = "Rendering",
        help = "Locale key used for the comment column (e.g. fr_FR)."
    )]
    pub comment_locale: Option<String>,
}
