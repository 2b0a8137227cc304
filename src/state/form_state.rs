//! Employee form state and whole-form validation

use super::field::FormField;
use crate::validation;
use chrono::NaiveDate;

/// Buttons on the buttons row (0=Cancelar, 1=Guardar)
pub const BUTTON_LABELS: [&str; 2] = ["Cancelar", "Guardar"];

/// The HR record-entry form: fixed field list plus a buttons row
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    fields: Vec<FormField>,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Cancelar, 1=Guardar)
    pub selected_button: usize,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::required("numero_empleado", "Número de Empleado"),
                FormField::required("nombre", "Nombre Completo"),
                FormField::required("email", "Email"),
                FormField::text("telefono", "Teléfono", false),
                FormField::required("salario", "Salario"),
                FormField::text("fecha_nacimiento", "Fecha de Nacimiento", false),
                FormField::required("fecha_ingreso", "Fecha de Ingreso"),
                FormField::text("dias_vacaciones_anuales", "Días de Vacaciones Anuales", false),
                FormField::text("dias_vacaciones_usados", "Días de Vacaciones Usados", false),
                FormField::text("direccion", "Dirección", true),
            ],
            active_field_index: 0,
            selected_button: 1, // Default to "Guardar"
        }
    }

    /// Number of focusable rows (fields plus the buttons row)
    pub fn field_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    #[cfg(test)]
    pub fn field_by_name(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[cfg(test)]
    pub fn field_by_name_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// The active field, or None when the buttons row is active
    pub fn active_field(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_LABELS.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_LABELS.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Re-validate the active field in place (per-keystroke path).
    ///
    /// Returns whether the field currently passes its rule. Requiredness is
    /// not checked here; an empty field is only rejected at save time.
    pub fn validate_active_field(&mut self, today: NaiveDate) -> bool {
        let Some(field) = self.fields.get_mut(self.active_field_index) else {
            return true;
        };
        match validation::check(&field.name, &field.value, today) {
            Some(message) => {
                field.set_error(message);
                false
            }
            None => {
                field.clear_error();
                true
            }
        }
    }

    /// Validate the whole form for saving.
    ///
    /// An empty required field short-circuits to the single "obligatorio"
    /// error; its pattern rule is not also run. Returns true iff no field
    /// carries an error afterwards.
    pub fn validate(&mut self, today: NaiveDate) -> bool {
        let mut is_valid = true;
        for field in &mut self.fields {
            if field.required && field.trimmed().is_empty() {
                field.set_error(validation::REQUIRED_MESSAGE);
                is_valid = false;
            } else if let Some(message) = validation::check(&field.name, &field.value, today) {
                field.set_error(message);
                is_valid = false;
            } else {
                field.clear_error();
            }
        }
        is_valid
    }

    /// Clear all field values and errors, and reset focus
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
        self.selected_button = 1;
    }
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new()
    }
}
