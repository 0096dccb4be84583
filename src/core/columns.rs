//! Column resolution: maps a logical client attribute to whatever the source
//! file happens to call it. Each field owns a priority-ordered alias list and
//! the first alias present in the row wins, regardless of column order.

use crate::domain::model::RawRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalField {
    Name,
    Email,
    Phone,
    Whatsapp,
    Status,
    Plan,
    Goals,
    Notes,
    ConsultantId,
    BirthDate,
    RegistrationDate,
    DueDate,
}

impl LogicalField {
    /// Accepted source column names, highest priority first. All lower-case;
    /// row keys are folded at read time.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            LogicalField::Name => &["nome", "name", "cliente"],
            LogicalField::Email => &["email", "e-mail"],
            LogicalField::Phone => &["telefone", "fone", "tel", "phone"],
            LogicalField::Whatsapp => &["whatsapp", "whats", "wa"],
            LogicalField::Status => &["status"],
            LogicalField::Plan => &["plano", "plano_ativo", "plan"],
            LogicalField::Goals => &["objetivos", "objetivo", "goals"],
            LogicalField::Notes => &["observações", "observacoes", "obs", "notes"],
            LogicalField::ConsultantId => &["id do consultor", "id_consultor", "consultor"],
            LogicalField::BirthDate => &[
                "data_nascimento",
                "data nascimento",
                "nascimento",
                "birth_date",
            ],
            LogicalField::RegistrationDate => &[
                "data_cadastro",
                "data de cadastro do ci",
                "cadastro",
                "registration_date",
            ],
            LogicalField::DueDate => &[
                "data_vencimento",
                "data vencimento",
                "vencimento",
                "due_date",
            ],
        }
    }
}

/// Returns the cell under the first matching alias, or None when the row has
/// no column for this field. Presence decides, not content.
pub fn resolve(row: &RawRow, field: LogicalField) -> Option<&serde_json::Value> {
    field.aliases().iter().find_map(|alias| row.data.get(*alias))
}
