use std::io::{self, BufRead, Write};

use traffic_predict::{ClientConfig, FormState, PredictionClient, ResultPanel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env();
    tracing::info!(endpoint = %config.endpoint, "traffic volume predictor");
    let client = PredictionClient::new(config);
    let mut panel = ResultPanel::default();

    println!("Traffic Volume Predictor");
    println!("(enter the four fields, Ctrl-D to quit)");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    // One submission at a time: the prompt does not return until the
    // in-flight request has resolved one way or the other.
    while let Some(form) = read_form(&mut input)? {
        match client.submit(&form).await {
            Ok(prediction) => {
                panel.apply(prediction);
                if let Some(line) = panel.render() {
                    println!("{line}");
                }
            }
            Err(e) if e.is_validation() => {
                tracing::debug!(error = %e, "rejected input");
                println!("{}", e.alert());
            }
            Err(e) => {
                tracing::error!(error = %e, "prediction request failed");
                println!("{}", e.alert());
            }
        }
        println!();
    }

    Ok(())
}

/// Prompt for the four fields. Returns None on EOF.
fn read_form(input: &mut impl BufRead) -> anyhow::Result<Option<FormState>> {
    let Some(temperature) = prompt(input, "Temperature: ")? else {
        return Ok(None);
    };
    let Some(day_of_week) = prompt(input, "Day of the Week: ")? else {
        return Ok(None);
    };
    let Some(location) = prompt(input, "Location: ")? else {
        return Ok(None);
    };
    let Some(time_of_day) = prompt(input, "Time of Day: ")? else {
        return Ok(None);
    };
    Ok(Some(FormState::new(
        temperature,
        day_of_week,
        location,
        time_of_day,
    )))
}

fn prompt(input: &mut impl BufRead, label: &str) -> anyhow::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
