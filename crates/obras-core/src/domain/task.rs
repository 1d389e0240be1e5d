//! Task Entity
//!
//! One billable unit of measured work inside a work-site.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Payment status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "em_andamento")]
    InProgress,
    #[serde(rename = "pago")]
    Paid,
    #[serde(rename = "atrasado")]
    Late,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::InProgress,
        PaymentStatus::Paid,
        PaymentStatus::Late,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pendente",
            PaymentStatus::InProgress => "em_andamento",
            PaymentStatus::Paid => "pago",
            PaymentStatus::Late => "atrasado",
        }
    }

    /// Display label shown on badges and filter buttons
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pendente",
            PaymentStatus::InProgress => "Em Andamento",
            PaymentStatus::Paid => "Pago",
            PaymentStatus::Late => "Atrasado",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

/// Unit of measure vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Unit {
    #[default]
    #[serde(rename = "m²")]
    SquareMeter,
    #[serde(rename = "m³")]
    CubicMeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "unidade")]
    Each,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "ton")]
    Ton,
    #[serde(rename = "ponto")]
    Point,
    #[serde(rename = "peça")]
    Piece,
    #[serde(rename = "conjunto")]
    Set,
    #[serde(rename = "verba")]
    LumpSum,
}

impl Unit {
    pub const ALL: [Unit; 10] = [
        Unit::SquareMeter,
        Unit::CubicMeter,
        Unit::Meter,
        Unit::Each,
        Unit::Kilogram,
        Unit::Ton,
        Unit::Point,
        Unit::Piece,
        Unit::Set,
        Unit::LumpSum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::SquareMeter => "m²",
            Unit::CubicMeter => "m³",
            Unit::Meter => "m",
            Unit::Each => "unidade",
            Unit::Kilogram => "kg",
            Unit::Ton => "ton",
            Unit::Point => "ponto",
            Unit::Piece => "peça",
            Unit::Set => "conjunto",
            Unit::LumpSum => "verba",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.as_str() == s)
    }
}

/// Task fields without an id (payload of add/edit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    #[serde(rename = "local")]
    pub location: String,
    #[serde(rename = "atividade")]
    pub activity: String,
    #[serde(rename = "unidade")]
    pub unit: Unit,
    #[serde(rename = "quantidade")]
    pub quantity: Decimal,
    #[serde(rename = "valor")]
    pub value: Decimal,
    #[serde(rename = "empreiteira")]
    pub contractor: String,
    #[serde(rename = "statusPagamento")]
    pub payment_status: PaymentStatus,
}

/// Largest quantity or value a task may carry
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Whether `amount` is strictly positive and within [`MAX_AMOUNT`]
pub fn amount_in_range(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount <= Decimal::from(MAX_AMOUNT)
}

impl TaskDraft {
    /// Reject drafts the store must never hold
    pub fn check(&self) -> DomainResult<()> {
        if self.location.trim().is_empty() || self.activity.trim().is_empty() || self.contractor.trim().is_empty() {
            return Err(DomainError::InvalidInput("blank text field".to_string()));
        }
        if !amount_in_range(self.quantity) {
            return Err(DomainError::InvalidInput(format!("quantity out of range: {}", self.quantity)));
        }
        if !amount_in_range(self.value) {
            return Err(DomainError::InvalidInput(format!("value out of range: {}", self.value)));
        }
        Ok(())
    }
}

/// A measured task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(flatten)]
    pub fields: TaskDraft,
}

impl Task {
    pub fn new(id: impl Into<String>, fields: TaskDraft) -> Self {
        Self { id: id.into(), fields }
    }

    pub fn location(&self) -> &str {
        &self.fields.location
    }

    pub fn activity(&self) -> &str {
        &self.fields.activity
    }

    pub fn contractor(&self) -> &str {
        &self.fields.contractor
    }

    pub fn value(&self) -> Decimal {
        self.fields.value
    }

    pub fn status(&self) -> PaymentStatus {
        self.fields.payment_status
    }

    /// Value per unit of measure; `None` for zero quantity
    pub fn unit_price(&self) -> Option<Decimal> {
        self.fields.value.checked_div(self.fields.quantity)
    }

    pub fn is_paid(&self) -> bool {
        self.fields.payment_status == PaymentStatus::Paid
    }

    /// Merge the given fields; absent fields keep their value
    pub fn apply(&mut self, patch: TaskPatch) {
        let f = &mut self.fields;
        if let Some(location) = patch.location {
            f.location = location;
        }
        if let Some(activity) = patch.activity {
            f.activity = activity;
        }
        if let Some(unit) = patch.unit {
            f.unit = unit;
        }
        if let Some(quantity) = patch.quantity {
            f.quantity = quantity;
        }
        if let Some(value) = patch.value {
            f.value = value;
        }
        if let Some(contractor) = patch.contractor {
            f.contractor = contractor;
        }
        if let Some(status) = patch.payment_status {
            f.payment_status = status;
        }
    }
}

impl Entity for Task {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update for a task
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub location: Option<String>,
    pub activity: Option<String>,
    pub unit: Option<Unit>,
    pub quantity: Option<Decimal>,
    pub value: Option<Decimal>,
    pub contractor: Option<String>,
    pub payment_status: Option<PaymentStatus>,
}

impl From<TaskDraft> for TaskPatch {
    fn from(draft: TaskDraft) -> Self {
        Self {
            location: Some(draft.location),
            activity: Some(draft.activity),
            unit: Some(draft.unit),
            quantity: Some(draft.quantity),
            value: Some(draft.value),
            contractor: Some(draft.contractor),
            payment_status: Some(draft.payment_status),
        }
    }
}

/// Which free-text field of a task a filter or suggestion targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    Location,
    Contractor,
    Activity,
}

impl TaskField {
    pub fn of<'a>(&self, task: &'a Task) -> &'a str {
        match self {
            TaskField::Location => task.location(),
            TaskField::Contractor => task.contractor(),
            TaskField::Activity => task.activity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn draft() -> TaskDraft {
        TaskDraft {
            location: "Térreo".to_string(),
            activity: "Pintura".to_string(),
            unit: Unit::SquareMeter,
            quantity: Decimal::from(10),
            value: Decimal::from(500),
            contractor: "ABC".to_string(),
            payment_status: PaymentStatus::Pending,
        }
    }

    #[test]
    fn test_status_round_trip_names() {
        assert_eq!(PaymentStatus::InProgress.as_str(), "em_andamento");
        assert_eq!(PaymentStatus::from_str("atrasado"), Some(PaymentStatus::Late));
        assert_eq!(PaymentStatus::from_str("concluida"), None);
    }

    #[test]
    fn test_unit_names() {
        assert_eq!(Unit::Piece.as_str(), "peça");
        assert_eq!(Unit::from_str("verba"), Some(Unit::LumpSum));
    }

    #[test]
    fn test_apply_patch_merges_only_given_fields() {
        let mut task = Task::new("1-1", draft());
        task.apply(TaskPatch {
            contractor: Some("XYZ".to_string()),
            ..Default::default()
        });
        assert_eq!(task.contractor(), "XYZ");
        assert_eq!(task.location(), "Térreo");
        assert_eq!(task.value(), Decimal::from(500));
    }

    #[test]
    fn test_draft_check_bounds_amounts() {
        assert!(draft().check().is_ok());

        let mut huge = draft();
        huge.value = Decimal::from(MAX_AMOUNT) + Decimal::ONE;
        assert!(matches!(huge.check(), Err(DomainError::InvalidInput(_))));

        let mut zero = draft();
        zero.quantity = Decimal::ZERO;
        assert!(matches!(zero.check(), Err(DomainError::InvalidInput(_))));

        let mut blank = draft();
        blank.contractor = "  ".to_string();
        assert!(blank.check().is_err());

        let mut at_cap = draft();
        at_cap.value = Decimal::from(MAX_AMOUNT);
        assert!(at_cap.check().is_ok());
    }

    #[test]
    fn test_unit_price() {
        let task = Task::new("1-1", draft());
        assert_eq!(task.unit_price(), Some(Decimal::from(50)));

        let mut free = draft();
        free.quantity = Decimal::ZERO;
        assert_eq!(Task::new("1-2", free).unit_price(), None);
    }

    #[test]
    fn test_task_json_uses_source_field_names() {
        let json = r#"{
            "id": "7",
            "local": "Subsolo",
            "atividade": "Impermeabilização",
            "unidade": "m²",
            "quantidade": "42.5",
            "valor": "1800",
            "empreiteira": "Impermax",
            "statusPagamento": "em_andamento"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id(), "7");
        assert_eq!(task.fields.unit, Unit::SquareMeter);
        assert_eq!(task.fields.quantity, Decimal::new(425, 1));
        assert_eq!(task.status(), PaymentStatus::InProgress);
    }
}
