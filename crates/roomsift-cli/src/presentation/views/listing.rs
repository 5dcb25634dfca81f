use std::fmt;

use roomsift_types::ReservationStatus;

use crate::presentation::formatters::{number, style};
use crate::presentation::view_models::{
    BreakdownViewModel, CreateView, ListingViewModel, ReservationEntryViewModel,
    RoomEntryViewModel,
};

/// One line of a listing in text mode.
pub trait EntryLine {
    fn write_line(&self, f: &mut fmt::Formatter<'_>, color: bool) -> fmt::Result;
}

impl EntryLine for RoomEntryViewModel {
    fn write_line(&self, f: &mut fmt::Formatter<'_>, color: bool) -> fmt::Result {
        write!(
            f,
            "  {:<8} {:<12} {:>10}  {:<12}",
            self.id,
            self.room_type,
            number::format_money(self.price),
            number::format_capacity(self.capacity),
        )?;
        if !self.title.is_empty() {
            write!(f, " {}", style::dim(&self.title, color))?;
        }
        writeln!(f)
    }
}

impl EntryLine for ReservationEntryViewModel {
    fn write_line(&self, f: &mut fmt::Formatter<'_>, color: bool) -> fmt::Result {
        writeln!(
            f,
            "  {:<10} {} {:<10} {:>12}",
            self.id,
            style::status(&self.status, 11, color),
            number::format_date(self.check_in),
            number::format_optional_money(self.amount),
        )
    }
}

impl<T: EntryLine> CreateView for ListingViewModel<T> {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn fmt::Display + 'a> {
        Box::new(ListingView { data: self, color })
    }
}

struct ListingView<'a, T> {
    data: &'a ListingViewModel<T>,
    color: bool,
}

impl<T: EntryLine> fmt::Display for ListingView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(placeholder) = &self.data.placeholder {
            writeln!(f, "{}", placeholder.title)?;
            writeln!(f, "{}", style::dim(&placeholder.hint, self.color))?;
        }

        for item in &self.data.items {
            item.write_line(f, self.color)?;
        }

        if let Some(breakdown) = &self.data.breakdown {
            writeln!(f)?;
            write_breakdown(f, breakdown, self.color)?;
        }

        Ok(())
    }
}

fn write_breakdown(
    f: &mut fmt::Formatter<'_>,
    breakdown: &BreakdownViewModel,
    color: bool,
) -> fmt::Result {
    let mut parts: Vec<String> = ReservationStatus::KNOWN
        .iter()
        .map(|status| {
            format!(
                "{} {}",
                style::status(status.as_str(), 0, color),
                breakdown.count(status)
            )
        })
        .collect();
    if breakdown.other > 0 {
        parts.push(format!("otras {}", breakdown.other));
    }
    writeln!(f, "  {}", parts.join("  "))
}
