use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a date filter to `SELECT alias.* FROM table` and print the SQL
    Translate {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, help = "Table the filtered entity lives in")]
        table: String,

        #[arg(long, default_value = "o", help = "Alias of the root entity")]
        alias: String,

        #[arg(long, help = "Column the filter compares against")]
        field: String,

        #[arg(long, default_value = "postgres", help = "SQL dialect: postgres or mysql")]
        dialect: String,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,

        /// Filter data as JSON, `@path` to read it from a file, or `-` for stdin
        input: String,
    },
    /// List the operator codes a filter kind accepts
    Operators {
        #[arg(long, default_value = "date")]
        kind: String,
    },
    /// Print the widget settings of a filter as JSON
    Settings {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Args)]
pub struct FilterArgs {
    #[arg(
        long,
        default_value = "date",
        help = "Filter kind: date, datetime, date_range or datetime_range"
    )]
    pub kind: String,

    #[arg(long, help = "Filter name, used as the parameter prefix; defaults to --field")]
    pub name: Option<String>,

    #[arg(long, help = "JSON file with filter options")]
    pub options: Option<String>,

    #[arg(long, help = "Value representation: datetime or timestamp")]
    pub input_type: Option<String>,

    #[arg(long, help = "IANA timezone used to compute timestamps, e.g. Europe/Paris")]
    pub timezone: Option<String>,

    #[arg(long, help = "How the filter joins other conditions: and or or")]
    pub condition: Option<String>,

    #[arg(long, help = "Label shown next to the widget")]
    pub label: Option<String>,
}
