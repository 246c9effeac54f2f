use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    print_status(json, true, data, row)
}

/// Like `print_one`, but lets a report carry `ok: false` in the envelope.
pub fn print_status<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn print_error(json: bool, code: &str, message: &str) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {}", message),
        }
    } else {
        eprintln!("error: {}", message);
    }
}
