use serde::{Deserialize, Serialize};

use super::seat::{Seat, SeatClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatMarker {
    Gap,
    Seat,
}

impl SeatMarker {
    /// Компактная запись схемы зала: 0 - проход, всё остальное - место.
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            SeatMarker::Gap
        } else {
            SeatMarker::Seat
        }
    }
}

/// Описание одного физического ряда слева направо.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSpec {
    pub row: u32,
    pub class: SeatClass,
    pub markers: Vec<SeatMarker>,
}

impl RowSpec {
    pub fn new(row: u32, class: SeatClass, markers: Vec<SeatMarker>) -> Self {
        Self { row, class, markers }
    }

    pub fn from_bits(row: u32, class: SeatClass, bits: &[u8]) -> Self {
        Self::new(row, class, bits.iter().copied().map(SeatMarker::from_bit).collect())
    }

    // Ширина ряда в ячейках сетки (места + проходы)
    pub fn width(&self) -> usize {
        self.markers.len()
    }

    pub fn seat_count(&self) -> usize {
        self.markers.iter().filter(|m| **m == SeatMarker::Seat).count()
    }
}

/// Все ряды одной ширины - иначе сетка поедет при центрировании.
pub fn hall_is_aligned(specs: &[RowSpec]) -> bool {
    match specs.first() {
        Some(first) => specs.iter().all(|spec| spec.width() == first.width()),
        None => true,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Cell {
    Gap,
    Seat(Seat),
}

/// Сгенерированный ряд: ячейки в порядке отрисовки.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub number: u32,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.cells.iter().filter_map(|cell| match cell {
            Cell::Seat(seat) => Some(seat),
            Cell::Gap => None,
        })
    }

    pub fn seat(&self, number: u32) -> Option<&Seat> {
        self.seats().find(|seat| seat.id.number == number)
    }
}
