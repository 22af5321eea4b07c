//! Схема VIP-зала. Каждый ряд ровно 12 ячеек (места + проходы),
//! чтобы при центрировании места стояли друг под другом:
//! конец 5 ряда, конец 6 ряда и 10 место 7 ряда - в одной колонке.

use crate::models::{PriceTable, RowSpec, SeatClass, SeatId};

pub const GRID_WIDTH: usize = 12;

pub const VIP_PRICE: u32 = 1350;

// Ряды 1-5: 4 прохода слева, 6 мест, 2 прохода справа
const NARROW_ROW: [u8; GRID_WIDTH] = [0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 0, 0];
// Ряд 6: 2 + 8 + 2
const MIDDLE_ROW: [u8; GRID_WIDTH] = [0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0];
// Ряд 7: все 12 мест
const BACK_ROW: [u8; GRID_WIDTH] = [1; GRID_WIDTH];

pub const SESSION_TIMES: [&str; 6] = ["10:40", "13:10", "15:40", "18:10", "20:35", "23:00"];

/// Статическая конфигурация зала для одного сеанса.
#[derive(Debug, Clone)]
pub struct HallConfig {
    pub rows: Vec<RowSpec>,
    pub occupied: Vec<SeatId>,
    pub prices: PriceTable,
    pub session_times: Vec<String>,
}

impl HallConfig {
    pub fn vip_hall() -> Self {
        let layout: [(u32, &[u8]); 7] = [
            (1, &NARROW_ROW),
            (2, &NARROW_ROW),
            (3, &NARROW_ROW),
            (4, &NARROW_ROW),
            (5, &NARROW_ROW),
            (6, &MIDDLE_ROW),
            (7, &BACK_ROW),
        ];
        let rows = layout
            .iter()
            .map(|(row, bits)| RowSpec::from_bits(*row, SeatClass::Vip, bits))
            .collect();

        // Ряд 4: места 2-3, ряд 7: места 5-8
        let occupied = [(4, 2), (4, 3), (7, 5), (7, 6), (7, 7), (7, 8)]
            .into_iter()
            .map(|(row, number)| SeatId::new(row, number))
            .collect();

        Self {
            rows,
            occupied,
            prices: PriceTable::new().with_price(SeatClass::Vip, VIP_PRICE),
            session_times: SESSION_TIMES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hall_is_aligned;

    #[test]
    fn vip_hall_rows_share_grid_width() {
        let hall = HallConfig::vip_hall();
        assert_eq!(hall.rows.len(), 7);
        assert!(hall.rows.iter().all(|r| r.width() == GRID_WIDTH));
        assert!(hall_is_aligned(&hall.rows));
    }

    #[test]
    fn vip_hall_seat_counts() {
        let hall = HallConfig::vip_hall();
        let counts: Vec<usize> = hall.rows.iter().map(RowSpec::seat_count).collect();
        assert_eq!(counts, vec![6, 6, 6, 6, 6, 8, 12]);
        assert_eq!(hall.occupied.len(), 6);
        assert_eq!(hall.prices.price_for(SeatClass::Vip), Some(1350));
    }
}
