use super::{control_events, replay};
use crate::args::RoomsArgs;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use roomsift_engine::RoomEngine;
use roomsift_runtime::{load_rooms, Config};
use roomsift_types::{
    CONTROL_CAPACITY, CONTROL_PRICE_MAX, CONTROL_PRICE_MIN, CONTROL_QUICK_SEARCH, CONTROL_TYPE,
};

pub fn handle(args: RoomsArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let rooms = load_rooms(&args.file)
        .with_context(|| format!("failed to load rooms from {}", args.file.display()))?;

    let events = control_events(&[
        (CONTROL_TYPE, &args.tipo),
        (CONTROL_PRICE_MIN, &args.precio_min),
        (CONTROL_PRICE_MAX, &args.precio_max),
        (CONTROL_CAPACITY, &args.capacidad),
        (CONTROL_QUICK_SEARCH, &args.search),
    ]);

    let presenter = replay(RoomEngine::new(), rooms, config.rooms_presenter(), events);
    let result = presenters::present_rooms(&presenter);

    ConsoleRenderer::new(format).render(result)
}
