//! Static help text for form fields

/// The fixed help-text table, keyed by field name
static TOOLTIPS: &[(&str, &str)] = &[
    ("numero_empleado", "Formato: EMP001, RH-2024, etc."),
    ("email", "Se usará para notificaciones del sistema"),
    ("telefono", "Incluye código de país si es necesario"),
    ("salario", "Salario mensual en la moneda local"),
    ("fecha_nacimiento", "Se usará para calcular la edad"),
    ("fecha_ingreso", "Fecha de inicio de labores en la empresa"),
    (
        "dias_vacaciones_anuales",
        "Días de vacaciones por año según política",
    ),
    (
        "dias_vacaciones_usados",
        "Días ya utilizados en el año actual",
    ),
];

/// Look up the help text for a field, if any
pub fn for_field(field_name: &str) -> Option<&'static str> {
    TOOLTIPS
        .iter()
        .find(|(name, _)| *name == field_name)
        .map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fields_have_help_text() {
        assert_eq!(
            for_field("numero_empleado"),
            Some("Formato: EMP001, RH-2024, etc.")
        );
        assert_eq!(
            for_field("fecha_ingreso"),
            Some("Fecha de inicio de labores en la empresa")
        );
    }

    #[test]
    fn test_unknown_field_has_none() {
        assert_eq!(for_field("nombre"), None);
        assert_eq!(for_field("direccion"), None);
    }

    #[test]
    fn test_table_has_eight_entries() {
        assert_eq!(TOOLTIPS.len(), 8);
    }
}
