//! Task Form Validation
//!
//! Raw form state as typed by the user, validation into a [`TaskDraft`],
//! and dirty tracking for edit mode.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::{amount_in_range, PaymentStatus, Task, TaskDraft, Unit, MAX_AMOUNT};

/// Form fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Location,
    Activity,
    Quantity,
    Value,
    Contractor,
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub location: Option<String>,
    pub activity: Option<String>,
    pub quantity: Option<String>,
    pub value: Option<String>,
    pub contractor: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.activity.is_none()
            && self.quantity.is_none()
            && self.value.is_none()
            && self.contractor.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Location => self.location.as_deref(),
            FormField::Activity => self.activity.as_deref(),
            FormField::Quantity => self.quantity.as_deref(),
            FormField::Value => self.value.as_deref(),
            FormField::Contractor => self.contractor.as_deref(),
        }
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Location => self.location = None,
            FormField::Activity => self.activity = None,
            FormField::Quantity => self.quantity = None,
            FormField::Value => self.value = None,
            FormField::Contractor => self.contractor = None,
        }
    }
}

/// Parse a user-entered decimal. Accepts `,` as the decimal separator.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(&raw.replace(',', ".")).ok()
}

/// Parse an amount field, or the message explaining why it is rejected
fn amount(raw: &str, label: &str) -> Result<Decimal, String> {
    match parse_decimal(raw) {
        Some(d) if amount_in_range(d) => Ok(d),
        Some(d) if d > Decimal::ZERO => Err(format!("{} deve ser no máximo {}", label, MAX_AMOUNT)),
        _ => Err(format!("{} deve ser maior que zero", label)),
    }
}

/// Add/edit form state
#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub location: String,
    pub activity: String,
    pub unit: Unit,
    pub quantity: String,
    pub value: String,
    pub contractor: String,
    pub payment_status: PaymentStatus,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            location: String::new(),
            activity: String::new(),
            unit: Unit::SquareMeter,
            quantity: String::new(),
            value: String::new(),
            contractor: String::new(),
            payment_status: PaymentStatus::Pending,
        }
    }
}

impl TaskForm {
    /// Populate the form for editing an existing task
    pub fn from_task(task: &Task) -> Self {
        let f = &task.fields;
        Self {
            location: f.location.clone(),
            activity: f.activity.clone(),
            unit: f.unit,
            quantity: f.quantity.normalize().to_string(),
            value: f.value.normalize().to_string(),
            contractor: f.contractor.clone(),
            payment_status: f.payment_status,
        }
    }

    /// Raw text of a typed field
    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Location => &self.location,
            FormField::Activity => &self.activity,
            FormField::Quantity => &self.quantity,
            FormField::Value => &self.value,
            FormField::Contractor => &self.contractor,
        }
    }

    pub fn set_text(&mut self, field: FormField, value: String) {
        match field {
            FormField::Location => self.location = value,
            FormField::Activity => self.activity = value,
            FormField::Quantity => self.quantity = value,
            FormField::Value => self.value = value,
            FormField::Contractor => self.contractor = value,
        }
    }

    pub fn validate(&self) -> Result<TaskDraft, FormErrors> {
        let mut errors = FormErrors::default();

        if self.location.trim().is_empty() {
            errors.location = Some("Local é obrigatório".to_string());
        }
        if self.activity.trim().is_empty() {
            errors.activity = Some("Atividade é obrigatória".to_string());
        }
        let quantity = match amount(&self.quantity, "Quantidade") {
            Ok(d) => Some(d),
            Err(msg) => {
                errors.quantity = Some(msg);
                None
            }
        };
        let value = match amount(&self.value, "Valor") {
            Ok(d) => Some(d),
            Err(msg) => {
                errors.value = Some(msg);
                None
            }
        };
        if self.contractor.trim().is_empty() {
            errors.contractor = Some("Empreiteira é obrigatória".to_string());
        }

        match (quantity, value) {
            (Some(quantity), Some(value)) if errors.is_empty() => Ok(TaskDraft {
                location: self.location.trim().to_string(),
                activity: self.activity.trim().to_string(),
                unit: self.unit,
                quantity,
                value,
                contractor: self.contractor.trim().to_string(),
                payment_status: self.payment_status,
            }),
            _ => Err(errors),
        }
    }

    /// Whether the form differs from `original` after trimming text and
    /// parsing numbers. Unparseable numbers count as changed.
    pub fn is_dirty(&self, original: &Task) -> bool {
        let f = &original.fields;
        self.location.trim() != f.location
            || self.activity.trim() != f.activity
            || self.unit != f.unit
            || parse_decimal(&self.quantity) != Some(f.quantity)
            || parse_decimal(&self.value) != Some(f.value)
            || self.contractor.trim() != f.contractor
            || self.payment_status != f.payment_status
    }
}

/// Add or edit, with what edit needs to detect changes
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Add,
    Edit(Task),
}

impl FormMode {
    pub fn initial_form(&self) -> TaskForm {
        match self {
            FormMode::Add => TaskForm::default(),
            FormMode::Edit(task) => TaskForm::from_task(task),
        }
    }

    /// Add is always submittable; edit only once something changed
    pub fn can_submit(&self, form: &TaskForm) -> bool {
        match self {
            FormMode::Add => true,
            FormMode::Edit(task) => form.is_dirty(task),
        }
    }
}
