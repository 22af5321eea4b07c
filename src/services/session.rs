use chrono::{Datelike, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

// Родительный падеж, как в "19 октября 2026 г."
const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub date: String,
    pub time: Option<String>,
}

impl SessionInfo {
    /// Дата сеанса - сегодня, время выбирается случайно из расписания.
    pub fn pick<R: Rng + ?Sized>(today: NaiveDate, times: &[String], rng: &mut R) -> Self {
        Self {
            date: format_ru_date(today),
            time: times.choose(rng).cloned(),
        }
    }

    pub fn today(times: &[String]) -> Self {
        Self::pick(Local::now().date_naive(), times, &mut rand::thread_rng())
    }
}

pub fn format_ru_date(date: NaiveDate) -> String {
    format!(
        "{} {} {} г.",
        date.day(),
        MONTHS_GENITIVE[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn formats_long_russian_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_ru_date(date), "19 октября 2026 г.");
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert_eq!(format_ru_date(date), "1 мая 2025 г.");
    }

    #[test]
    fn picks_time_from_schedule() {
        let times: Vec<String> = ["10:40", "23:00"].iter().map(|t| t.to_string()).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        for _ in 0..20 {
            let info = SessionInfo::pick(date, &times, &mut rng);
            assert_eq!(info.date, "2 января 2026 г.");
            assert!(info.time.as_ref().is_some_and(|t| times.contains(t)));
        }
    }

    #[test]
    fn empty_schedule_has_no_time() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let info = SessionInfo::pick(date, &[], &mut StdRng::seed_from_u64(1));
        assert_eq!(info.time, None);
    }
}
