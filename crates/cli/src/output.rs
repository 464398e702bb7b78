use crate::error::CliError;
use filters::operator::OperatorChoice;
use model::core::value::Value;
use serde::Serialize;

#[derive(Serialize)]
struct Translation<'a> {
    sql: &'a str,
    params: &'a [Value],
    fragments: &'a [String],
}

pub fn print_json(sql: &str, params: &[Value], fragments: &[String]) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(&Translation {
        sql,
        params,
        fragments,
    })?;
    println!("{json}");
    Ok(())
}

pub fn print_text(sql: &str, params: &[Value]) {
    println!("{sql}");
    for (i, param) in params.iter().enumerate() {
        println!("  #{:<3} {}", i + 1, param);
    }
}

pub fn print_operators(choices: &[OperatorChoice]) {
    println!("{:<6} {}", "Code", "Label");
    println!("-----------------------------------");
    for choice in choices {
        println!("{:<6} {}", choice.code, choice.label);
    }
}
