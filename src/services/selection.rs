use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::config::HallConfig;
use crate::error::SeatMapError;
use crate::models::{hall_is_aligned, Cell, Seat, SeatId, Slot};
use crate::services::adjacency::{would_create_gap, OccupancyState, SeatLookup};
use crate::services::layout::{generate, Layout};

pub const TICKET_BADGE: &str = "Взрослый";
pub const CONTINUE_LABEL: &str = "ПРОДОЛЖИТЬ";

/// Результат клика по месту
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Selected,
    Released,
    /// Клик по занятому месту ничего не делает
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedItem {
    pub row: u32,
    pub seat: u32,
    pub label: String,
    pub class: &'static str,
    pub badge: &'static str,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub items: Vec<SelectedItem>,
    pub count: usize,
    pub total: u64,
    pub can_continue: bool,
    pub continue_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellView {
    Gap,
    Seat {
        #[serde(flatten)]
        seat: Seat,
        selected: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub row: u32,
    pub cells: Vec<CellView>,
}

/// Контроллер выбора мест для одного сеанса.
///
/// Владеет схемой зала и набором выбранных мест; после создания меняется
/// только набор выбранных.
#[derive(Debug, Clone)]
pub struct SeatMap {
    layout: Layout,
    selection: BTreeSet<SeatId>,
}

impl SeatMap {
    pub fn new(layout: Layout) -> Self {
        Self { layout, selection: BTreeSet::new() }
    }

    pub fn from_hall(hall: &HallConfig) -> Result<Self, SeatMapError> {
        if !hall_is_aligned(&hall.rows) {
            warn!("Hall rows have different widths, seats will not line up");
        }
        let layout = generate(&hall.rows, &hall.occupied, &hall.prices)?;
        info!("Seat map generated: {} rows, {} seats", layout.rows().len(), layout.seat_count());
        Ok(Self::new(layout))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn selection(&self) -> &BTreeSet<SeatId> {
        &self.selection
    }

    pub fn is_selected(&self, id: SeatId) -> bool {
        self.selection.contains(&id)
    }

    /// Клик по месту: занятое игнорируется, выбранное освобождается,
    /// свободное выбирается, если не нарушает правило соседства.
    pub fn click(&mut self, id: SeatId) -> Result<Toggle, SeatMapError> {
        let seat = self.seat(id)?;
        if seat.occupied {
            return Ok(Toggle::Ignored);
        }
        if self.is_selected(id) {
            self.release(id)?;
            return Ok(Toggle::Released);
        }
        self.select(id)?;
        Ok(Toggle::Selected)
    }

    pub fn select(&mut self, id: SeatId) -> Result<(), SeatMapError> {
        if self.seat(id)?.occupied {
            return Err(SeatMapError::Occupied(id));
        }
        if self.is_selected(id) {
            return Err(SeatMapError::AlreadySelected(id));
        }
        if would_create_gap(id, &*self) {
            warn!("Rejected seat {:?}: would strand a single empty seat", id);
            return Err(SeatMapError::GapConflict(id));
        }
        self.selection.insert(id);
        debug!("Seat {:?} selected, total {}", id, self.total());
        Ok(())
    }

    /// Снять выбор. Правило соседства тут не проверяется: отпустить своё
    /// место можно всегда.
    pub fn release(&mut self, id: SeatId) -> Result<(), SeatMapError> {
        self.seat(id)?;
        if !self.selection.remove(&id) {
            return Err(SeatMapError::NotSelected(id));
        }
        debug!("Seat {:?} released, total {}", id, self.total());
        Ok(())
    }

    /// Выбрать все оставшиеся свободные места.
    ///
    /// Проверка соседства намеренно пропускается: в итоге заняты все места
    /// и одиночных пустых не остаётся, а промежуточные состояния проверка
    /// отклонила бы зря.
    pub fn select_all(&mut self) -> usize {
        let free: Vec<SeatId> = self
            .layout
            .seats()
            .filter(|seat| !seat.occupied && !self.selection.contains(&seat.id))
            .map(|seat| seat.id)
            .collect();
        self.selection.extend(free.iter().copied());
        info!("Selected all remaining seats: {} added, total {}", free.len(), self.total());
        free.len()
    }

    pub fn total(&self) -> u64 {
        self.selected_seats().map(|seat| u64::from(seat.price)).sum()
    }

    pub fn summary(&self) -> SelectionSummary {
        let items: Vec<SelectedItem> = self
            .selected_seats()
            .map(|seat| SelectedItem {
                row: seat.id.row,
                seat: seat.id.number,
                label: seat.id.to_string(),
                class: seat.class.display_name(),
                badge: TICKET_BADGE,
                price: seat.price,
            })
            .collect();
        let total = self.total();
        let continue_label = if items.is_empty() {
            CONTINUE_LABEL.to_string()
        } else {
            format!("{CONTINUE_LABEL}: {total} ₽")
        };

        SelectionSummary {
            count: items.len(),
            can_continue: !items.is_empty(),
            items,
            total,
            continue_label,
        }
    }

    pub fn occupancy(&self) -> OccupancyState {
        self.layout
            .seats()
            .map(|seat| (seat.id, seat.occupied || self.is_selected(seat.id)))
            .collect()
    }

    /// Схема для отрисовки с отметками выбранных мест
    pub fn view(&self) -> Vec<RowView> {
        self.layout
            .rows()
            .iter()
            .map(|row| RowView {
                row: row.number,
                cells: row
                    .cells
                    .iter()
                    .map(|cell| match cell {
                        Cell::Gap => CellView::Gap,
                        Cell::Seat(seat) => CellView::Seat {
                            seat: seat.clone(),
                            selected: self.is_selected(seat.id),
                        },
                    })
                    .collect(),
            })
            .collect()
    }

    fn seat(&self, id: SeatId) -> Result<&Seat, SeatMapError> {
        self.layout.seat(id).ok_or(SeatMapError::UnknownSeat(id))
    }

    // Выбранные места в порядке (ряд, место)
    fn selected_seats(&self) -> impl Iterator<Item = &Seat> {
        self.selection.iter().filter_map(|id| self.layout.seat(*id))
    }
}

impl SeatLookup for SeatMap {
    fn locate(&self, id: SeatId) -> Slot {
        match self.layout.seat(id) {
            None => Slot::Wall,
            Some(seat) if seat.occupied || self.is_selected(id) => Slot::Taken,
            Some(_) => Slot::Empty,
        }
    }
}
