use roomsift_types::ReservationStatus;
use serde::Serialize;

/// Count of visible reservations per status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub total: usize,
    pub confirmada: usize,
    pub pendiente: usize,
    pub activa: usize,
    pub cancelada: usize,
    /// Statuses without a dedicated slot.
    pub other: usize,
}

impl StatusBreakdown {
    pub fn tally<'a>(statuses: impl IntoIterator<Item = &'a ReservationStatus>) -> Self {
        let mut breakdown = Self::default();
        for status in statuses {
            breakdown.total += 1;
            match status {
                ReservationStatus::Confirmada => breakdown.confirmada += 1,
                ReservationStatus::Pendiente => breakdown.pendiente += 1,
                ReservationStatus::Activa => breakdown.activa += 1,
                ReservationStatus::Cancelada => breakdown.cancelada += 1,
                ReservationStatus::Other(_) => breakdown.other += 1,
            }
        }
        breakdown
    }

    pub fn count(&self, status: &ReservationStatus) -> usize {
        match status {
            ReservationStatus::Confirmada => self.confirmada,
            ReservationStatus::Pendiente => self.pendiente,
            ReservationStatus::Activa => self.activa,
            ReservationStatus::Cancelada => self.cancelada,
            ReservationStatus::Other(_) => self.other,
        }
    }
}
