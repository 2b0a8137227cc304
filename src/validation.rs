//! Field validation rules for the employee form
//!
//! Rules are pure functions keyed by field name. Every rule accepts the
//! empty string; only the required-field check (in the form layer) rejects
//! emptiness. Field names without a rule are always valid.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Message attached by the form layer when a required field is empty
pub const REQUIRED_MESSAGE: &str = "Este campo es obligatorio";

/// Notification shown when a save is rejected
pub const FIX_ERRORS_MESSAGE: &str = "Por favor, corrige los errores antes de continuar";

/// Allowed age range (inclusive) implied by fecha_nacimiento
const MIN_AGE: i32 = 16;
const MAX_AGE: i32 = 80;

const DATE_FORMAT: &str = "%Y-%m-%d";

static EMPLOYEE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9-]+$").expect("valid pattern"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid pattern"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-+()]+$").expect("valid pattern"));

type Rule = fn(&str, NaiveDate) -> Option<&'static str>;

/// The fixed rule table, keyed by field name
static RULES: &[(&str, Rule)] = &[
    ("numero_empleado", check_employee_number),
    ("email", check_email),
    ("telefono", check_phone),
    ("salario", check_salary),
    ("fecha_nacimiento", check_birth_date),
    ("fecha_ingreso", check_hire_date),
];

/// Validate a raw field value against the rule for `field_name`.
///
/// Returns `None` when valid, or the user-facing message when not.
/// Unknown field names and empty values are always valid.
pub fn check(field_name: &str, raw_value: &str, today: NaiveDate) -> Option<&'static str> {
    let value = raw_value.trim();
    if value.is_empty() {
        return None;
    }
    RULES
        .iter()
        .find(|(name, _)| *name == field_name)
        .and_then(|(_, rule)| rule(value, today))
}

fn check_employee_number(value: &str, _today: NaiveDate) -> Option<&'static str> {
    if EMPLOYEE_NUMBER.is_match(value) {
        None
    } else {
        Some("El número de empleado debe contener solo letras mayúsculas, números y guiones")
    }
}

fn check_email(value: &str, _today: NaiveDate) -> Option<&'static str> {
    if EMAIL.is_match(value) {
        None
    } else {
        Some("Por favor, ingresa un email válido")
    }
}

fn check_phone(value: &str, _today: NaiveDate) -> Option<&'static str> {
    if PHONE.is_match(value) {
        None
    } else {
        Some("Por favor, ingresa un teléfono válido")
    }
}

fn check_salary(value: &str, _today: NaiveDate) -> Option<&'static str> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => None,
        _ => Some("El salario debe ser un número positivo"),
    }
}

fn check_birth_date(value: &str, today: NaiveDate) -> Option<&'static str> {
    let Ok(birth) = NaiveDate::parse_from_str(value, DATE_FORMAT) else {
        return Some("Por favor, ingresa una fecha válida (AAAA-MM-DD)");
    };
    // Calendar-year age, not full date precision
    let age = today.year() - birth.year();
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        None
    } else {
        Some("La edad debe estar entre 16 y 80 años")
    }
}

fn check_hire_date(value: &str, today: NaiveDate) -> Option<&'static str> {
    let Ok(hire) = NaiveDate::parse_from_str(value, DATE_FORMAT) else {
        return Some("Por favor, ingresa una fecha válida (AAAA-MM-DD)");
    };
    if hire > today {
        Some("La fecha de ingreso no puede ser futura")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    mod employee_number {
        use super::*;

        #[test]
        fn test_uppercase_digits_hyphens_valid() {
            assert_eq!(check("numero_empleado", "EMP001", today()), None);
            assert_eq!(check("numero_empleado", "RH-2024", today()), None);
            assert_eq!(check("numero_empleado", "A-1-B-2", today()), None);
        }

        #[test]
        fn test_empty_is_valid() {
            assert_eq!(check("numero_empleado", "", today()), None);
            assert_eq!(check("numero_empleado", "   ", today()), None);
        }

        #[test]
        fn test_lowercase_invalid() {
            assert!(check("numero_empleado", "emp001", today()).is_some());
        }

        #[test]
        fn test_disallowed_symbols_invalid() {
            assert!(check("numero_empleado", "EMP_001", today()).is_some());
            assert!(check("numero_empleado", "EMP 001", today()).is_some());
            assert!(check("numero_empleado", "EMP#1", today()).is_some());
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_basic_shapes() {
            assert_eq!(check("email", "a@b.com", today()), None);
            assert_eq!(check("email", "ana.garcia@empresa.mx", today()), None);
        }

        #[test]
        fn test_missing_tld_invalid() {
            assert!(check("email", "a@b", today()).is_some());
        }

        #[test]
        fn test_missing_at_invalid() {
            assert!(check("email", "ab.com", today()).is_some());
        }

        #[test]
        fn test_whitespace_invalid() {
            assert!(check("email", "a b@c.com", today()).is_some());
        }

        #[test]
        fn test_double_at_invalid() {
            assert!(check("email", "a@b@c.com", today()).is_some());
        }

        #[test]
        fn test_empty_is_valid() {
            assert_eq!(check("email", "", today()), None);
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_digits_and_punctuation_valid() {
            assert_eq!(check("telefono", "555-123-4567", today()), None);
            assert_eq!(check("telefono", "+52 (55) 1234 5678", today()), None);
        }

        #[test]
        fn test_letters_invalid() {
            assert!(check("telefono", "55x1234", today()).is_some());
        }
    }

    mod salary {
        use super::*;

        #[test]
        fn test_zero_is_valid() {
            assert_eq!(check("salario", "0", today()), None);
        }

        #[test]
        fn test_positive_decimal_valid() {
            assert_eq!(check("salario", "12500.50", today()), None);
        }

        #[test]
        fn test_negative_invalid() {
            assert!(check("salario", "-5", today()).is_some());
        }

        #[test]
        fn test_non_numeric_invalid() {
            assert!(check("salario", "abc", today()).is_some());
        }

        #[test]
        fn test_non_finite_invalid() {
            assert!(check("salario", "NaN", today()).is_some());
            assert!(check("salario", "inf", today()).is_some());
        }
    }

    mod dates {
        use super::*;

        #[test]
        fn test_age_bounds_inclusive() {
            // today() is in 2026: born 2010 -> age 16, born 1946 -> age 80
            assert_eq!(check("fecha_nacimiento", "2010-12-31", today()), None);
            assert_eq!(check("fecha_nacimiento", "1946-01-01", today()), None);
        }

        #[test]
        fn test_age_outside_bounds_invalid() {
            // born 2011 -> age 15, born 1945 -> age 81
            assert!(check("fecha_nacimiento", "2011-01-01", today()).is_some());
            assert!(check("fecha_nacimiento", "1945-12-31", today()).is_some());
        }

        #[test]
        fn test_hire_date_today_and_past_valid() {
            assert_eq!(check("fecha_ingreso", "2026-08-27", today()), None);
            assert_eq!(check("fecha_ingreso", "2020-01-15", today()), None);
        }

        #[test]
        fn test_hire_date_future_invalid() {
            assert!(check("fecha_ingreso", "2026-08-28", today()).is_some());
        }

        #[test]
        fn test_unparseable_dates_invalid() {
            assert!(check("fecha_nacimiento", "ayer", today()).is_some());
            assert!(check("fecha_ingreso", "27/08/2026", today()).is_some());
        }
    }

    mod table {
        use super::*;

        #[test]
        fn test_unknown_field_always_valid() {
            assert_eq!(check("nombre", "anything at all!", today()), None);
            assert_eq!(check("direccion", "Calle 5 #10", today()), None);
        }

        #[test]
        fn test_value_is_trimmed_before_matching() {
            assert_eq!(check("numero_empleado", "  EMP001  ", today()), None);
        }
    }
}
