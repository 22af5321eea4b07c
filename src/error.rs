use thiserror::Error;

use crate::models::{SeatClass, SeatId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatMapError {
    /// Выбор оставил бы одиночное пустое место между занятыми
    #[error("выбор места {0} оставит одно свободное место между занятыми")]
    GapConflict(SeatId),

    #[error("место {0} уже занято")]
    Occupied(SeatId),

    #[error("место {0} не существует")]
    UnknownSeat(SeatId),

    #[error("место {0} уже выбрано")]
    AlreadySelected(SeatId),

    #[error("место {0} не выбрано")]
    NotSelected(SeatId),

    #[error("для класса {0:?} не задана цена")]
    UnpricedClass(SeatClass),
}
