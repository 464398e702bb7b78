use crate::{
    commands::{Commands, FilterArgs},
    error::CliError,
};
use clap::Parser;
use filters::{
    DateFilter, FilterKind, FilterOptions, InputType,
    options::{parse_condition, parse_timezone},
    settings::WidgetVariant,
};
use planner::{
    query::{dialect::SqlDialect, proxy::ProxyQuery},
    table_ref,
};
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "datefilter",
    version = "0.1.0",
    about = "Translate datagrid date filters into SQL"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            filter,
            table,
            alias,
            field,
            dialect,
            json,
            input,
        } => {
            let dialect = dialect.parse::<SqlDialect>()?;
            let date_filter = build_filter(&filter, &field)?;
            let data: serde_json::Value = serde_json::from_str(&read_input(&input)?)?;

            let mut query = ProxyQuery::new(table_ref!(table), &alias);
            date_filter.apply_json(&mut query, &alias, date_filter.field_name(), &data);
            if query.where_clause().is_none() {
                info!(filter = %date_filter.name(), "Filter not applied");
            }

            let (sql, params) = query.to_sql(dialect.dialect())?;
            if json {
                output::print_json(&sql, &params, &query.where_fragments())?;
            } else {
                output::print_text(&sql, &params);
            }
        }
        Commands::Operators { kind } => {
            let kind = kind.parse::<FilterKind>()?;
            let variant = WidgetVariant::for_modes(kind.is_time(), kind.is_range());
            output::print_operators(&variant.operator_choices());
        }
        Commands::Settings { filter } => {
            let date_filter = build_filter(&filter, "filter")?;
            let json = serde_json::to_string_pretty(&date_filter.render_settings())?;
            println!("{json}");
        }
    }

    Ok(())
}

fn build_filter(args: &FilterArgs, field: &str) -> Result<DateFilter, CliError> {
    let kind = args.kind.parse::<FilterKind>()?;

    let mut options = match &args.options {
        Some(path) => serde_json::from_str::<FilterOptions>(&std::fs::read_to_string(path)?)?,
        None => FilterOptions::default(),
    };
    if options.field_name.is_none() {
        options.field_name = Some(field.to_string());
    }
    if let Some(input_type) = &args.input_type {
        options.input_type = input_type.parse::<InputType>()?;
    }
    if let Some(timezone) = &args.timezone {
        options.timezone = parse_timezone(timezone)?;
    }
    if let Some(condition) = &args.condition {
        options.condition = parse_condition(condition)?;
    }
    if let Some(label) = &args.label {
        options.label = Some(label.clone());
    }

    let name = args.name.clone().unwrap_or_else(|| field.to_string());
    Ok(DateFilter::new(name, kind).with_options(options))
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else if let Some(path) = input.strip_prefix('@') {
        Ok(std::fs::read_to_string(path)?)
    } else {
        Ok(input.to_string())
    }
}
