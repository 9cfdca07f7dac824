use crate::domain::models::{JsonOut, Warning};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Text-mode warning lines. In JSON mode the warnings travel inside the
/// report instead, so this prints nothing.
pub fn print_warnings(json: bool, warnings: &[Warning]) {
    if json {
        return;
    }
    for w in warnings {
        println!("warning: {}", w.message);
    }
}
