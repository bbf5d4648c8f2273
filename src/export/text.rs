use crate::errors::{RecorderError, Result};
use crate::types::{EventKind, StepRecord};

const CSV_HEADER: [&str; 9] = [
    "step",
    "event",
    "tag",
    "value",
    "text",
    "playwright",
    "css",
    "xpath",
    "timestamp",
];

pub fn to_csv(steps: &[StepRecord]) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for step in steps {
        wtr.write_record([
            step.index.to_string().as_str(),
            step.event.as_str(),
            step.tag_name.as_str(),
            step.value.as_deref().unwrap_or_default(),
            step.text.as_deref().unwrap_or_default(),
            step.locators.playwright.as_str(),
            step.locators.css.as_str(),
            step.locators.xpath.as_str(),
            step.timestamp.to_string().as_str(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| RecorderError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|e| {
        RecorderError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// One numbered line per step followed by its Playwright locator.
pub fn to_txt(steps: &[StepRecord]) -> String {
    steps
        .iter()
        .map(|step| {
            format!(
                "{}. {}\n   locator: {}\n",
                step.index,
                describe_step(step),
                step.locators.playwright
            )
        })
        .collect()
}

pub fn to_json(steps: &[StepRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(steps)?)
}

/// Plain-language action, e.g. `Type "rust" into input`.
pub fn describe_step(step: &StepRecord) -> String {
    let target = match step.text.as_deref() {
        Some(text) => format!("{} \"{}\"", step.tag_name, text.replace('\n', " ")),
        None => step.tag_name.clone(),
    };
    let value = step.value.as_deref().unwrap_or_default();

    match step.event {
        EventKind::Click => format!("Click {}", target),
        EventKind::Input => format!("Type \"{}\" into {}", value, target),
        EventKind::Change => format!("Set {} to \"{}\"", target, value),
    }
}
