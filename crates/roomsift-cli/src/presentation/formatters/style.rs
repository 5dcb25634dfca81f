use owo_colors::OwoColorize;

/// Reservation status padded to `width`, coloured like the page's badges.
pub fn status(status: &str, width: usize, color: bool) -> String {
    let padded = format!("{:<width$}", status, width = width);
    if !color {
        return padded;
    }
    match status {
        "confirmada" => padded.green().to_string(),
        "pendiente" => padded.yellow().to_string(),
        "activa" => padded.cyan().to_string(),
        "cancelada" => padded.red().to_string(),
        _ => padded,
    }
}

pub fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
