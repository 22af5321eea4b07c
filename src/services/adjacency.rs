//! Правило соседства: нельзя оставлять одно пустое место между занятыми.
//!
//! Проверка чистая - смотрит на состояние через [`SeatLookup`] и ничего не меняет.

use std::collections::BTreeMap;

use crate::models::{SeatId, Slot};

/// Источник состояния мест для проверки соседства.
pub trait SeatLookup {
    fn locate(&self, id: SeatId) -> Slot;
}

/// Снимок занятости: координата -> занято ли (заранее или выбрано).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyState {
    seats: BTreeMap<SeatId, bool>,
}

impl OccupancyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SeatId, taken: bool) {
        self.seats.insert(id, taken);
    }

    pub fn taken(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.seats.iter().filter(|(_, taken)| **taken).map(|(id, _)| *id)
    }
}

impl FromIterator<(SeatId, bool)> for OccupancyState {
    fn from_iter<I: IntoIterator<Item = (SeatId, bool)>>(iter: I) -> Self {
        Self { seats: iter.into_iter().collect() }
    }
}

impl SeatLookup for OccupancyState {
    fn locate(&self, id: SeatId) -> Slot {
        match self.seats.get(&id) {
            None => Slot::Wall,
            Some(true) => Slot::Taken,
            Some(false) => Slot::Empty,
        }
    }
}

/// Оставит ли выбор `target` одиночное пустое место слева или справа.
///
/// Вызывается до отметки места как выбранного и только при выборе:
/// снятие выбора не проверяется.
pub fn would_create_gap(target: SeatId, lookup: &impl SeatLookup) -> bool {
    let slot = |offset: i64| {
        target
            .offset(offset)
            .map_or(Slot::Wall, |id| lookup.locate(id))
    };
    let stranded = |near: i64, far: i64| slot(near) == Slot::Empty && slot(far) == Slot::Taken;

    stranded(-1, -2) || stranded(1, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ряд 1 из `len` мест, занятые перечислены в `taken`
    fn row(len: u32, taken: &[u32]) -> OccupancyState {
        (1..=len)
            .map(|n| (SeatId::new(1, n), taken.contains(&n)))
            .collect()
    }

    #[test]
    fn rejects_gap_on_the_right() {
        let occ = row(6, &[3]);
        assert!(would_create_gap(SeatId::new(1, 1), &occ));
    }

    #[test]
    fn rejects_gap_on_the_left() {
        let occ = row(6, &[3]);
        assert!(would_create_gap(SeatId::new(1, 5), &occ));
    }

    #[test]
    fn allows_when_two_empty_seats_remain() {
        let occ = row(6, &[3]);
        assert!(!would_create_gap(SeatId::new(1, 6), &occ));
    }

    #[test]
    fn allows_adjacent_to_taken() {
        let occ = row(6, &[3]);
        assert!(!would_create_gap(SeatId::new(1, 2), &occ));
        assert!(!would_create_gap(SeatId::new(1, 4), &occ));
    }

    #[test]
    fn walls_never_trigger() {
        // Место 2: слева 1 пустое, дальше стена
        let occ = row(3, &[]);
        assert!(!would_create_gap(SeatId::new(1, 2), &occ));
        // Место 1 в ряду из двух: справа пустое, дальше стена
        let occ = row(2, &[]);
        assert!(!would_create_gap(SeatId::new(1, 1), &occ));
    }

    #[test]
    fn other_rows_are_ignored() {
        let mut occ = row(4, &[]);
        occ.insert(SeatId::new(2, 3), true);
        assert!(!would_create_gap(SeatId::new(1, 1), &occ));
    }

    #[test]
    fn taken_lists_only_taken_seats() {
        let occ = row(5, &[2, 4]);
        let taken: Vec<SeatId> = occ.taken().collect();
        assert_eq!(taken, vec![SeatId::new(1, 2), SeatId::new(1, 4)]);
    }
}
