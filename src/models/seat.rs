use serde::{Deserialize, Serialize};
use std::fmt;

/// Координата места: (ряд, номер места в ряду), обе с 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId {
    pub row: u32,
    pub number: u32,
}

impl SeatId {
    pub const fn new(row: u32, number: u32) -> Self {
        Self { row, number }
    }

    /// Сосед в том же ряду со смещением `offset`. `None`, если номер уходит за 1.
    pub fn offset(self, offset: i64) -> Option<Self> {
        let number = i64::from(self.number) + offset;
        if number < 1 {
            return None;
        }
        u32::try_from(number).ok().map(|number| Self { row: self.row, number })
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ряд, {} место", self.row, self.number)
    }
}

// Класс места определяет цену
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatClass {
    Vip,
}

impl SeatClass {
    pub fn display_name(self) -> &'static str {
        match self {
            SeatClass::Vip => "VIP",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub class: SeatClass,
    pub price: u32,
    pub occupied: bool,
}

/// Что находится по координате с точки зрения правила соседства.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Места нет: край ряда или проход
    Wall,
    /// Занято заранее или выбрано
    Taken,
    Empty,
}
