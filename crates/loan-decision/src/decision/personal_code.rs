//! Decoding of the 11-digit Estonian personal identification code (`isikukood`).
//!
//! Layout: `G YYMMDD SSS C`, where `G` encodes century and sex, `YYMMDD` the birth date,
//! `SSS` a serial number and `C` a mod-11 checksum over the first ten digits.

use chrono::{Datelike, NaiveDate};

const CODE_LENGTH: usize = 11;
const PRIMARY_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECONDARY_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

/// Structural failures when decoding a personal code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonalCodeError {
    #[error("expected 11 characters, found {0}")]
    WrongLength(usize),
    #[error("code must contain digits only")]
    NonDigit,
    #[error("unsupported century marker {0}")]
    UnknownCenturyMarker(u8),
    #[error("birth date digits do not form a calendar date")]
    InvalidBirthDate,
    #[error("checksum mismatch (expected {expected}, found {found})")]
    ChecksumMismatch { expected: u8, found: u8 },
}

/// Parsed personal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalCode {
    raw: String,
    sex: Sex,
    date_of_birth: NaiveDate,
    serial: u16,
    checksum: u8,
}

impl PersonalCode {
    pub fn parse(code: &str) -> Result<Self, PersonalCodeError> {
        let length = code.chars().count();
        if length != CODE_LENGTH {
            return Err(PersonalCodeError::WrongLength(length));
        }

        let digits = code
            .chars()
            .map(|ch| ch.to_digit(10).map(|digit| digit as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or(PersonalCodeError::NonDigit)?;

        let marker = digits[0];
        let (century, sex) = match marker {
            1 | 2 => (1800, sex_for(marker)),
            3 | 4 => (1900, sex_for(marker)),
            5 | 6 => (2000, sex_for(marker)),
            other => return Err(PersonalCodeError::UnknownCenturyMarker(other)),
        };

        let year = century + i32::from(number_from(&digits[1..3]));
        let month = u32::from(number_from(&digits[3..5]));
        let day = u32::from(number_from(&digits[5..7]));
        let date_of_birth =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(PersonalCodeError::InvalidBirthDate)?;

        let expected = checksum(&digits[..10]);
        let found = digits[10];
        if expected != found {
            return Err(PersonalCodeError::ChecksumMismatch { expected, found });
        }

        Ok(Self {
            raw: code.to_string(),
            sex,
            date_of_birth,
            serial: number_from(&digits[7..10]),
            checksum: found,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn serial(&self) -> u16 {
        self.serial
    }

    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Last four digits (serial plus checksum) as a number in `0..=9999`.
    pub fn suffix(&self) -> u16 {
        self.serial * 10 + u16::from(self.checksum)
    }

    /// Completed years of age on `today`; `None` when the birth date is later than `today`.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        if today < self.date_of_birth {
            return None;
        }

        let mut years = today.year() - self.date_of_birth.year();
        if (today.month(), today.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }
}

fn sex_for(marker: u8) -> Sex {
    if marker % 2 == 1 {
        Sex::Male
    } else {
        Sex::Female
    }
}

fn number_from(digits: &[u8]) -> u16 {
    digits
        .iter()
        .fold(0u16, |acc, digit| acc * 10 + u16::from(*digit))
}

fn weighted(digits: &[u8], weights: &[u32; 10]) -> u32 {
    digits
        .iter()
        .zip(weights.iter())
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum::<u32>()
        % 11
}

fn checksum(digits: &[u8]) -> u8 {
    let first = weighted(digits, &PRIMARY_WEIGHTS);
    if first < 10 {
        return first as u8;
    }

    let second = weighted(digits, &SECONDARY_WEIGHTS);
    if second < 10 {
        second as u8
    } else {
        0
    }
}
