use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::error::SeatMapError;
use crate::models::{Cell, PriceTable, Row, RowSpec, Seat, SeatId, SeatMarker};

/// Сгенерированная схема зала: ряды для отрисовки плюс индекс мест по координате.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Row>,
    index: BTreeMap<SeatId, (usize, usize)>,
}

impl Layout {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        let (row, cell) = *self.index.get(&id)?;
        match &self.rows[row].cells[cell] {
            Cell::Seat(seat) => Some(seat),
            Cell::Gap => None,
        }
    }

    /// Места в порядке схемы: по рядам, слева направо
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flat_map(Row::seats)
    }

    pub fn seat_count(&self) -> usize {
        self.index.len()
    }
}

/// Строит схему зала из описаний рядов.
///
/// Номера мест в ряду идут с 1 подряд, проходы номер не занимают.
/// Место занято, если его координата есть в `occupied`; координаты,
/// которых в схеме нет, просто игнорируются.
pub fn generate(
    specs: &[RowSpec],
    occupied: &[SeatId],
    prices: &PriceTable,
) -> Result<Layout, SeatMapError> {
    let occupied: BTreeSet<SeatId> = occupied.iter().copied().collect();
    let mut rows = Vec::with_capacity(specs.len());
    let mut index = BTreeMap::new();

    for spec in specs {
        let price = prices
            .price_for(spec.class)
            .ok_or(SeatMapError::UnpricedClass(spec.class))?;

        let mut number = 1;
        let mut cells = Vec::with_capacity(spec.width());
        for marker in &spec.markers {
            match marker {
                SeatMarker::Gap => cells.push(Cell::Gap),
                SeatMarker::Seat => {
                    let id = SeatId::new(spec.row, number);
                    index.insert(id, (rows.len(), cells.len()));
                    cells.push(Cell::Seat(Seat {
                        id,
                        class: spec.class,
                        price,
                        occupied: occupied.contains(&id),
                    }));
                    number += 1;
                }
            }
        }
        rows.push(Row { number: spec.row, cells });
    }

    for id in occupied.iter().filter(|id| !index.contains_key(id)) {
        debug!("Ignoring pre-occupied seat outside the layout: {:?}", id);
    }

    Ok(Layout { rows, index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HallConfig;
    use crate::models::SeatClass;
    use proptest::prelude::*;

    fn prices() -> PriceTable {
        PriceTable::new().with_price(SeatClass::Vip, 1350)
    }

    #[test]
    fn gaps_do_not_advance_numbering() {
        let spec = RowSpec::from_bits(2, SeatClass::Vip, &[0, 1, 0, 1, 1, 0]);
        let layout = generate(&[spec], &[], &prices()).unwrap();
        let row = &layout.rows()[0];
        assert_eq!(row.cells.len(), 6);
        assert_eq!(row.cells[0], Cell::Gap);
        let numbers: Vec<u32> = row.seats().map(|s| s.id.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(row.seat(2).map(|s| s.price), Some(1350));
    }

    #[test]
    fn occupied_overrides_mark_seats() {
        let spec = RowSpec::from_bits(4, SeatClass::Vip, &[0, 1, 1, 1, 1]);
        let occupied = [SeatId::new(4, 2), SeatId::new(4, 3)];
        let layout = generate(&[spec], &occupied, &prices()).unwrap();
        let flags: Vec<bool> = layout.seats().map(|s| s.occupied).collect();
        assert_eq!(flags, vec![false, true, true, false]);
    }

    #[test]
    fn unknown_overrides_are_ignored() {
        let spec = RowSpec::from_bits(1, SeatClass::Vip, &[1, 1]);
        let occupied = [SeatId::new(1, 9), SeatId::new(3, 1)];
        let layout = generate(&[spec], &occupied, &prices()).unwrap();
        assert_eq!(layout.seat_count(), 2);
        assert!(layout.seats().all(|s| !s.occupied));
        assert!(layout.seat(SeatId::new(1, 9)).is_none());
    }

    #[test]
    fn missing_price_is_reported() {
        let spec = RowSpec::from_bits(1, SeatClass::Vip, &[1]);
        let err = generate(&[spec], &[], &PriceTable::new()).unwrap_err();
        assert_eq!(err, SeatMapError::UnpricedClass(SeatClass::Vip));
    }

    #[test]
    fn vip_hall_columns_line_up() {
        let hall = HallConfig::vip_hall();
        let layout = generate(&hall.rows, &hall.occupied, &hall.prices).unwrap();
        assert_eq!(layout.seat_count(), 50);

        // Последнее место 5 и 6 рядов стоит над 10 местом 7 ряда
        let column_of = |row: usize, number: u32| {
            layout.rows()[row].cells.iter().position(
                |c| matches!(c, Cell::Seat(s) if s.id.number == number),
            )
        };
        assert_eq!(column_of(4, 6), Some(9));
        assert_eq!(column_of(5, 8), Some(9));
        assert_eq!(column_of(6, 10), Some(9));

        let occupied: Vec<SeatId> = layout.seats().filter(|s| s.occupied).map(|s| s.id).collect();
        assert_eq!(occupied, hall.occupied);
    }

    proptest! {
        #[test]
        fn numbering_is_dense_per_row(rows in prop::collection::vec(prop::collection::vec(0u8..2, 0..16), 1..8)) {
            let specs: Vec<RowSpec> = rows
                .iter()
                .enumerate()
                .map(|(i, bits)| RowSpec::from_bits(i as u32 + 1, SeatClass::Vip, bits))
                .collect();
            let layout = generate(&specs, &[], &prices()).unwrap();
            for (spec, row) in specs.iter().zip(layout.rows()) {
                let numbers: Vec<u32> = row.seats().map(|s| s.id.number).collect();
                let expected: Vec<u32> = (1..=spec.seat_count() as u32).collect();
                prop_assert_eq!(numbers, expected);
                prop_assert_eq!(row.cells.len(), spec.width());
            }
        }
    }
}
