use super::{control_events, replay};
use crate::args::ReservationsArgs;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use roomsift_engine::{ReservationEngine, Today};
use roomsift_runtime::{load_reservations, Config};
use roomsift_types::{CONTROL_DATE, CONTROL_RESERVATION_SEARCH, CONTROL_SORT, CONTROL_STATUS};

pub fn handle(args: ReservationsArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let reservations = load_reservations(&args.file).with_context(|| {
        format!("failed to load reservations from {}", args.file.display())
    })?;

    let today = args.today.map_or(Today::Local, Today::Fixed);
    let events = control_events(&[
        (CONTROL_STATUS, &args.status),
        (CONTROL_DATE, &args.date),
        (CONTROL_SORT, &args.sort),
        (CONTROL_RESERVATION_SEARCH, &args.search),
    ]);

    let presenter = replay(
        ReservationEngine::new(today),
        reservations,
        config.reservations_presenter(),
        events,
    );
    let result = presenters::present_reservations(&presenter);

    ConsoleRenderer::new(format).render(result)
}
