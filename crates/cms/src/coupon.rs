//! Coupon expiration dates.
//!
//! Expirations are stored as `DD/MM/YYYY` strings. A coupon stops being
//! valid at the UTC midnight that starts its expiration day.

use thiserror::Error;
use time::{macros::format_description, Date, Month, OffsetDateTime};

use crate::model::Coupon;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CouponDateError {
    #[error("expected DD/MM/YYYY, got '{0}'")]
    Format(String),

    #[error("'{0}' is not a calendar date")]
    Range(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponStatus {
    Active,
    Expired,
}

impl CouponStatus {
    pub fn is_expired(self) -> bool {
        self == Self::Expired
    }
}

/// Parse a `DD/MM/YYYY` date. Day and month may omit the leading zero.
pub fn parse_date(value: &str) -> Result<Date, CouponDateError> {
    let format_err = || CouponDateError::Format(value.to_string());

    let mut parts = value.trim().split('/');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format_err());
    };

    let day: u8 = day.trim().parse().map_err(|_| format_err())?;
    let month: u8 = month.trim().parse().map_err(|_| format_err())?;
    let year: i32 = year.trim().parse().map_err(|_| format_err())?;

    let month = Month::try_from(month).map_err(|_| CouponDateError::Range(value.to_string()))?;
    Date::from_calendar_date(year, month, day)
        .map_err(|_| CouponDateError::Range(value.to_string()))
}

/// `dd/mm/yyyy`, the pt-BR short date.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[day]/[month]/[year]"))
        .unwrap_or_else(|_| date.to_string())
}

impl Coupon {
    pub fn expires_on(&self) -> Result<Date, CouponDateError> {
        parse_date(&self.expiration)
    }

    /// Unparseable expirations count as expired so they can never be copied.
    pub fn status_at(&self, now: OffsetDateTime) -> CouponStatus {
        match self.expires_on() {
            Ok(date) if date.midnight().assume_utc() >= now => CouponStatus::Active,
            Ok(_) => CouponStatus::Expired,
            Err(err) => {
                tracing::warn!(coupon = %self.id, error = %err, "invalid coupon expiration");
                CouponStatus::Expired
            }
        }
    }

    pub fn status(&self) -> CouponStatus {
        self.status_at(OffsetDateTime::now_utc())
    }

    /// Expiration as `dd/mm/yyyy`, or the raw value when it does not parse.
    pub fn display_expiration(&self) -> String {
        self.expires_on()
            .map(format_date)
            .unwrap_or_else(|_| self.expiration.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn coupon(expiration: &str) -> Coupon {
        Coupon {
            id: "c1".into(),
            code: "ONTECH10".into(),
            expiration: expiration.into(),
            label: "10% em eletrônicos".into(),
        }
    }

    #[test]
    fn parses_day_month_year() {
        let date = parse_date("04/07/2025").unwrap();
        assert_eq!(date.day(), 4);
        assert_eq!(date.month(), Month::July);
        assert_eq!(date.year(), 2025);
        assert_eq!(parse_date("4/7/2025").unwrap(), date);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(matches!(parse_date("2025-07-04"), Err(CouponDateError::Format(_))));
        assert!(matches!(parse_date("04/07"), Err(CouponDateError::Format(_))));
        assert!(matches!(parse_date("1/2/3/4"), Err(CouponDateError::Format(_))));
        assert!(matches!(parse_date("31/02/2025"), Err(CouponDateError::Range(_))));
        assert!(matches!(parse_date("10/13/2025"), Err(CouponDateError::Range(_))));
    }

    #[test]
    fn past_dates_are_expired() {
        let now = datetime!(2025-07-04 11:45:26 -3);
        assert_eq!(coupon("01/07/2025").status_at(now), CouponStatus::Expired);
        assert_eq!(coupon("31/12/2024").status_at(now), CouponStatus::Expired);
    }

    #[test]
    fn future_dates_are_active() {
        let now = datetime!(2025-07-04 11:45:26 -3);
        assert_eq!(coupon("05/07/2025").status_at(now), CouponStatus::Active);
        assert_eq!(coupon("01/01/2030").status_at(now), CouponStatus::Active);
    }

    #[test]
    fn expiration_day_ends_validity_at_utc_midnight() {
        assert_eq!(
            coupon("04/07/2025").status_at(datetime!(2025-07-04 0:00 UTC)),
            CouponStatus::Active
        );
        assert_eq!(
            coupon("04/07/2025").status_at(datetime!(2025-07-04 0:00:01 UTC)),
            CouponStatus::Expired
        );
    }

    #[test]
    fn invalid_expiration_is_expired_and_shown_raw() {
        let c = coupon("em breve");
        assert!(c.status_at(datetime!(2020-01-01 0:00 UTC)).is_expired());
        assert_eq!(c.display_expiration(), "em breve");
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(coupon("4/7/2025").display_expiration(), "04/07/2025");
    }
}
